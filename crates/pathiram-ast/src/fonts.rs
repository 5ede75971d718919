//! Tamil-capable font table
//!
//! Exporters pick the first entry. There is no runtime probing for installed
//! fonts; readers fall back through the list on their own where supported.

/// Font families in priority order
pub const TAMIL_FONTS: &[&str] = &[
    "Latha",
    "Nirmala UI",
    "Vijaya",
    "Noto Sans Tamil",
    "Arial Unicode MS",
];

/// The font written into every text run
pub fn primary_font() -> &'static str {
    TAMIL_FONTS[0]
}

/// CSS `font-family` value covering the whole list
pub fn css_font_stack() -> String {
    let mut families: Vec<String> = TAMIL_FONTS.iter().map(|f| format!("'{}'", f)).collect();
    families.push("sans-serif".to_string());
    families.join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_entry_wins() {
        assert_eq!(primary_font(), "Latha");
    }

    #[test]
    fn test_css_stack_ends_with_generic_family() {
        let stack = css_font_stack();
        assert!(stack.starts_with("'Latha', 'Nirmala UI'"));
        assert!(stack.ends_with("sans-serif"));
    }
}
