//! Party clauses
//!
//! Segment order is fixed: district and pincode, taluk, address lines 3, 2, 1,
//! door number, relation, age, name, national id, phone, ordinal, role label.
//! Empty segments are dropped together with their connector.

use crate::amount::PLACEHOLDER;
use crate::grammar::ordinal_suffix;
use crate::model::{Address, Party};

fn non_empty(value: &str) -> Option<&str> {
    let value = value.trim();
    (!value.is_empty()).then_some(value)
}

/// Address segments in clause order
fn address_segments(address: &Address) -> Vec<String> {
    let mut segments = Vec::new();

    match (non_empty(&address.district), non_empty(&address.pincode)) {
        (Some(district), Some(pincode)) => {
            segments.push(format!("{} மாவட்டம் - {}", district, pincode))
        }
        (Some(district), None) => segments.push(format!("{} மாவட்டம்", district)),
        (None, Some(pincode)) => segments.push(format!("அஞ்சல் குறியீடு {}", pincode)),
        (None, None) => {}
    }
    if let Some(taluk) = non_empty(&address.taluk) {
        segments.push(format!("{} வட்டம்", taluk));
    }
    for line in [&address.line3, &address.line2, &address.line1] {
        if let Some(line) = non_empty(line) {
            segments.push(line.to_string());
        }
    }
    if let Some(door) = non_empty(&address.door_number) {
        segments.push(format!("கதவு எண் {}", door));
    }
    segments
}

/// "<relationName> அவர்களின் <relationType>"
fn relation_clause(party: &Party) -> Option<String> {
    let relation = non_empty(party.relation_type.as_tamil());
    match (non_empty(&party.relation_name), relation) {
        (Some(name), Some(relation)) => Some(format!("{} அவர்களின் {}", name, relation)),
        (Some(name), None) => Some(format!("{} அவர்களின்", name)),
        (None, Some(relation)) => Some(relation.to_string()),
        (None, None) => None,
    }
}

/// Name with the honorific implied by the relation type
pub fn display_name(party: &Party) -> String {
    match non_empty(&party.name) {
        Some(name) => match party.relation_type.honorific() {
            Some(honorific) => format!("{} {}", honorific.as_tamil(), name),
            None => name.to_string(),
        },
        None => format!("பெயர் {}", PLACEHOLDER),
    }
}

/// Everything up to and including the name
fn identity(party: &Party) -> String {
    let mut parts = Vec::new();

    let address = address_segments(&party.address);
    if !address.is_empty() {
        parts.push(format!("{} என்ற முகவரியில் வசிக்கும்", address.join(", ")));
    }
    if let Some(relation) = relation_clause(party) {
        parts.push(format!("{},", relation));
    }
    if let Some(age) = non_empty(&party.age) {
        parts.push(format!("வயது {},", age));
    }
    parts.push(display_name(party));
    parts.join(" ")
}

fn contact(party: &Party) -> Option<String> {
    let mut fields = Vec::new();
    if let Some(id) = non_empty(&party.national_id) {
        fields.push(format!("ஆதார் எண்: {}", id));
    }
    if let Some(phone) = non_empty(&party.phone) {
        fields.push(format!("கைபேசி எண்: {}", phone));
    }
    (!fields.is_empty()).then(|| format!("({})", fields.join(", ")))
}

/// Full clause for a buyer or seller
pub fn party_clause(party: &Party, index: usize, role_noun: &str) -> String {
    let mut parts = vec![identity(party)];
    if let Some(contact) = contact(party) {
        parts.push(contact);
    }
    parts.push(ordinal_suffix(index));
    parts.push(format!("- {}", role_noun));
    parts.join(" ")
}

/// Witness list entry: same clause without ordinal or role label, phone omitted
pub fn witness_entry(party: &Party) -> String {
    let mut parts = vec![identity(party)];
    if let Some(id) = non_empty(&party.national_id) {
        parts.push(format!("(ஆதார் எண்: {})", id));
    }
    parts.join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RelationType;

    fn full_party() -> Party {
        Party {
            id: None,
            name: "முருகன்".to_string(),
            age: "30".to_string(),
            relation_type: RelationType::Son,
            relation_name: "கந்தசாமி".to_string(),
            address: Address {
                door_number: "12".to_string(),
                line1: "பெரிய தெரு".to_string(),
                line2: "அண்ணா நகர்".to_string(),
                line3: "கிழக்கு".to_string(),
                taluk: "தாம்பரம்".to_string(),
                district: "செங்கல்பட்டு".to_string(),
                pincode: "600045".to_string(),
            },
            national_id: "1234 5678 9012".to_string(),
            phone: "9876543210".to_string(),
        }
    }

    #[test]
    fn test_segment_order() {
        let clause = party_clause(&full_party(), 1, "வாங்குபவர்");
        let order = [
            "செங்கல்பட்டு மாவட்டம் - 600045",
            "தாம்பரம் வட்டம்",
            "கிழக்கு",
            "அண்ணா நகர்",
            "பெரிய தெரு",
            "கதவு எண் 12",
            "கந்தசாமி அவர்களின் மகன்",
            "வயது 30",
            "திரு. முருகன்",
            "ஆதார் எண்: 1234 5678 9012",
            "கைபேசி எண்: 9876543210",
            "(1)",
            "- வாங்குபவர்",
        ];
        let positions: Vec<usize> = order
            .iter()
            .map(|needle| clause.find(needle).unwrap_or_else(|| panic!("missing {needle}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{clause}");
    }

    #[test]
    fn test_blank_party_uses_placeholder_name() {
        let clause = party_clause(&Party::default(), 3, "விற்பவர்");
        assert_eq!(clause, "பெயர் குறிப்பிடப்படவில்லை (3) - விற்பவர்");
    }

    #[test]
    fn test_witness_entry_omits_phone() {
        let entry = witness_entry(&full_party());
        assert!(entry.contains("திரு. முருகன்"));
        assert!(!entry.contains("9876543210"));
        assert!(!entry.contains("(1)"));
    }

    #[test]
    fn test_free_text_relation_has_no_honorific() {
        let party = Party {
            relation_type: RelationType::from("பேரன்"),
            ..Party::named("அருண்")
        };
        assert_eq!(display_name(&party), "அருண்");
    }
}
