//! Merge-with-defaults for records picked into a form row
//!
//! When a stored person or typist is selected, values already typed into the
//! row win, then the stored record, then the fallback.

use crate::model::{Address, Party, TypistInfo};

/// First non-blank value of `existing`, `selected`, `fallback`
pub fn coalesce(existing: &str, selected: &str, fallback: &str) -> String {
    [existing, selected, fallback]
        .into_iter()
        .find(|value| !value.trim().is_empty())
        .unwrap_or_default()
        .to_string()
}

fn coalesce_field(existing: &str, selected: &str) -> String {
    coalesce(existing, selected, "")
}

impl Address {
    pub fn merge_selection(&self, selected: &Address) -> Address {
        Address {
            door_number: coalesce_field(&self.door_number, &selected.door_number),
            line1: coalesce_field(&self.line1, &selected.line1),
            line2: coalesce_field(&self.line2, &selected.line2),
            line3: coalesce_field(&self.line3, &selected.line3),
            taluk: coalesce_field(&self.taluk, &selected.taluk),
            district: coalesce_field(&self.district, &selected.district),
            pincode: coalesce_field(&self.pincode, &selected.pincode),
        }
    }
}

impl Party {
    /// Fill this row from a stored record without overwriting typed values.
    /// The stored record's id always wins so the row links to it.
    pub fn merge_selection(&self, selected: &Party) -> Party {
        let relation_type = if self.relation_type.is_empty() {
            selected.relation_type.clone()
        } else {
            self.relation_type.clone()
        };
        Party {
            id: selected.id.clone().or_else(|| self.id.clone()),
            name: coalesce_field(&self.name, &selected.name),
            age: coalesce_field(&self.age, &selected.age),
            relation_type,
            relation_name: coalesce_field(&self.relation_name, &selected.relation_name),
            address: self.address.merge_selection(&selected.address),
            national_id: coalesce_field(&self.national_id, &selected.national_id),
            phone: coalesce_field(&self.phone, &selected.phone),
        }
    }
}

impl TypistInfo {
    /// Office name falls back to `default_office` when neither side has one
    pub fn merge_selection(&self, selected: &TypistInfo, default_office: &str) -> TypistInfo {
        TypistInfo {
            name: coalesce_field(&self.name, &selected.name),
            phone: coalesce_field(&self.phone, &selected.phone),
            office_name: coalesce(&self.office_name, &selected.office_name, default_office),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::RelationType;

    #[test]
    fn test_coalesce_order() {
        assert_eq!(coalesce("a", "b", "c"), "a");
        assert_eq!(coalesce("", "b", "c"), "b");
        assert_eq!(coalesce("  ", "", "c"), "c");
        assert_eq!(coalesce("", "", ""), "");
    }

    #[test]
    fn test_party_merge_keeps_typed_values() {
        let row = Party {
            age: "45".to_string(),
            ..Default::default()
        };
        let stored = Party {
            id: Some("p-7".to_string()),
            name: "செல்வம்".to_string(),
            age: "44".to_string(),
            relation_type: RelationType::Son,
            ..Default::default()
        };
        let merged = row.merge_selection(&stored);
        assert_eq!(merged.id.as_deref(), Some("p-7"));
        assert_eq!(merged.name, "செல்வம்");
        assert_eq!(merged.age, "45");
        assert_eq!(merged.relation_type, RelationType::Son);
    }

    #[test]
    fn test_typist_merge_uses_fallback_office() {
        let merged = TypistInfo::default().merge_selection(
            &TypistInfo {
                name: "கணேஷ்".to_string(),
                ..Default::default()
            },
            "ஆவண எழுத்தர் அலுவலகம்",
        );
        assert_eq!(merged.name, "கணேஷ்");
        assert_eq!(merged.office_name, "ஆவண எழுத்தர் அலுவலகம்");
    }
}
