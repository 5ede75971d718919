//! Tamil agreement rules driven by party counts
//!
//! A role noun is plural as soon as its list holds more than one person, and
//! that choice applies to every clause of the document. Collective pronouns
//! follow the combined buyer and seller count.

/// Singular and plural forms of a role noun
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleNoun {
    pub singular: &'static str,
    pub plural: &'static str,
}

impl RoleNoun {
    pub const fn new(singular: &'static str, plural: &'static str) -> Self {
        Self { singular, plural }
    }

    /// Form matching a list of `count` members
    pub fn for_count(&self, count: usize) -> &'static str {
        if is_plural(count) {
            self.plural
        } else {
            self.singular
        }
    }
}

/// Plural agreement starts at two members
pub fn is_plural(count: usize) -> bool {
    count > 1
}

/// "all of us", "both of us", or "I" for the executing parties
pub fn collective_pronoun(total_parties: usize) -> &'static str {
    match total_parties {
        n if n > 2 => "நாங்கள் அனைவரும்",
        2 => "நாங்கள் இருவரும்",
        _ => "நான்",
    }
}

/// First-person verb ending matching [`collective_pronoun`]
pub fn signing_verb(total_parties: usize) -> &'static str {
    if total_parties >= 2 {
        "கையொப்பமிடுகிறோம்"
    } else {
        "கையொப்பமிடுகிறேன்"
    }
}

/// Dative of the first person: "to me" / "to us"
pub fn first_person_dative(count: usize) -> &'static str {
    if is_plural(count) {
        "எங்களுக்கு"
    } else {
        "எனக்கு"
    }
}

/// Third-person honorific ending for `count` subjects
pub fn verb_suffix(count: usize) -> &'static str {
    if is_plural(count) {
        "ார்கள்"
    } else {
        "ார்"
    }
}

/// Attach the plural ending to a third-person honorific verb (`...ார்` -> `...ார்கள்`)
pub fn agree(verb: &str, count: usize) -> String {
    match verb.strip_suffix("ார்") {
        Some(stem) => format!("{}{}", stem, verb_suffix(count)),
        None if is_plural(count) => format!("{}கள்", verb),
        None => verb.to_string(),
    }
}

/// 1-based ordinal suffix attached to a party clause
pub fn ordinal_suffix(index: usize) -> String {
    format!("({})", index)
}

#[cfg(test)]
mod tests {
    use super::*;

    const BUYER: RoleNoun = RoleNoun::new("வாங்குபவர்", "வாங்குபவர்கள்");

    #[test]
    fn test_verb_suffix() {
        assert_eq!(verb_suffix(1), "ார்");
        assert_eq!(verb_suffix(3), "ார்கள்");
        assert_eq!(agree("பெற்றுக்கொண்டார்", 2), "பெற்றுக்கொண்டார்கள்");
        assert_eq!(agree("பெற்றுக்கொண்டார்", 1), "பெற்றுக்கொண்டார்");
    }

    #[test]
    fn test_noun_for_count() {
        assert_eq!(BUYER.for_count(0), "வாங்குபவர்");
        assert_eq!(BUYER.for_count(1), "வாங்குபவர்");
        assert_eq!(BUYER.for_count(2), "வாங்குபவர்கள்");
        assert_eq!(BUYER.for_count(5), "வாங்குபவர்கள்");
    }

    #[test]
    fn test_collective_pronoun() {
        assert_eq!(collective_pronoun(1), "நான்");
        assert_eq!(collective_pronoun(2), "நாங்கள் இருவரும்");
        assert_eq!(collective_pronoun(3), "நாங்கள் அனைவரும்");
        assert_eq!(signing_verb(1), "கையொப்பமிடுகிறேன்");
        assert_eq!(signing_verb(3), "கையொப்பமிடுகிறோம்");
    }

    #[test]
    fn test_verb_agreement() {
        assert_eq!(agree("பெற்றுக்கொண்டார்", 1), "பெற்றுக்கொண்டார்");
        assert_eq!(agree("பெற்றுக்கொண்டார்", 2), "பெற்றுக்கொண்டார்கள்");
        assert_eq!(first_person_dative(1), "எனக்கு");
        assert_eq!(first_person_dative(3), "எங்களுக்கு");
    }

    #[test]
    fn test_ordinal_suffix() {
        assert_eq!(ordinal_suffix(2), "(2)");
    }
}
