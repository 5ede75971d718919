//! Rupee amount parsing and monetary clauses
//!
//! Amounts come from free-text form fields. Anything that does not parse as
//! whole rupees is treated as absent, so no `NaN` ever reaches the text.

use crate::words::amount_in_words;

/// Fixed Tamil placeholder for absent values
pub const PLACEHOLDER: &str = "குறிப்பிடப்படவில்லை";

/// Parse a whole-rupee amount
///
/// Accepts digit grouping commas, spaces, a leading `₹` or `ரூ.`, and a
/// fraction made only of zeros (`1500.00`). Everything else yields `None`.
pub fn parse_amount(raw: &str) -> Option<i64> {
    let cleaned: String = raw
        .trim()
        .trim_start_matches('₹')
        .trim_start_matches("ரூ.")
        .chars()
        .filter(|c| !matches!(c, ',' | ' ' | '\u{a0}'))
        .collect();

    let (whole, fraction) = match cleaned.split_once('.') {
        Some((whole, fraction)) => (whole, fraction),
        None => (cleaned.as_str(), ""),
    };

    if whole.is_empty() || !whole.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    if !fraction.chars().all(|c| c == '0') {
        return None;
    }
    whole.parse::<i64>().ok()
}

/// `agreement - advance`, `None` if either side is absent
pub fn balance(agreement: Option<i64>, advance: Option<i64>) -> Option<i64> {
    agreement?.checked_sub(advance?)
}

/// Words form, `None` when the amount is absent
pub fn words_of(amount: Option<i64>) -> Option<String> {
    amount.map(amount_in_words)
}

/// `ரூ.<amount>/-(ரூபாய் <words> மட்டும்)`
pub fn money_clause(amount: Option<i64>) -> String {
    match amount {
        Some(value) => format!(
            "ரூ.{}/-(ரூபாய் {} மட்டும்)",
            value,
            amount_in_words(value)
        ),
        None => format!("தொகை {}", PLACEHOLDER),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_and_grouped() {
        assert_eq!(parse_amount("100000"), Some(100_000));
        assert_eq!(parse_amount(" 1,00,000 "), Some(100_000));
        assert_eq!(parse_amount("₹2,500"), Some(2_500));
        assert_eq!(parse_amount("ரூ.750"), Some(750));
        assert_eq!(parse_amount("1500.00"), Some(1_500));
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        assert_eq!(parse_amount(""), None);
        assert_eq!(parse_amount("abc"), None);
        assert_eq!(parse_amount("NaN"), None);
        assert_eq!(parse_amount("-100"), None);
        assert_eq!(parse_amount("12.50"), None);
        assert_eq!(parse_amount("."), None);
    }

    #[test]
    fn test_balance() {
        assert_eq!(balance(Some(100_000), Some(20_000)), Some(80_000));
        assert_eq!(balance(Some(100), None), None);
        assert_eq!(balance(None, Some(100)), None);
        assert_eq!(balance(Some(100), Some(300)), Some(-200));
    }

    #[test]
    fn test_money_clause() {
        assert_eq!(
            money_clause(Some(80_000)),
            "ரூ.80000/-(ரூபாய் எண்பது ஆயிரம் மட்டும்)"
        );
        assert_eq!(money_clause(None), "தொகை குறிப்பிடப்படவில்லை");
    }
}
