//! Number to Tamil words
//!
//! Indian grouping (கோடி, லட்சம், ஆயிரம், நூறு). A scale word takes its
//! joining form (ஆயிரத்து, லட்சத்து, கோடியே) whenever a smaller group follows.
//!
//! ```
//! use pathiram_core::words::amount_in_words;
//!
//! assert_eq!(amount_in_words(80_000), "எண்பது ஆயிரம்");
//! assert_eq!(amount_in_words(1_500), "ஆயிரத்து ஐநூறு");
//! ```

const ZERO: &str = "பூஜ்ஜியம்";
const MINUS: &str = "கழித்தல்";
const ONE_ATTRIBUTIVE: &str = "ஒரு";

const UNITS: [&str; 10] = [
    "",
    "ஒன்று",
    "இரண்டு",
    "மூன்று",
    "நான்கு",
    "ஐந்து",
    "ஆறு",
    "ஏழு",
    "எட்டு",
    "ஒன்பது",
];

const TEENS: [&str; 10] = [
    "பத்து",
    "பதினொன்று",
    "பன்னிரண்டு",
    "பதின்மூன்று",
    "பதினான்கு",
    "பதினைந்து",
    "பதினாறு",
    "பதினேழு",
    "பதினெட்டு",
    "பத்தொன்பது",
];

const TENS: [&str; 10] = [
    "",
    "",
    "இருபது",
    "முப்பது",
    "நாற்பது",
    "ஐம்பது",
    "அறுபது",
    "எழுபது",
    "எண்பது",
    "தொண்ணூறு",
];

const TENS_JOINING: [&str; 10] = [
    "",
    "",
    "இருபத்து",
    "முப்பத்து",
    "நாற்பத்து",
    "ஐம்பத்து",
    "அறுபத்து",
    "எழுபத்து",
    "எண்பத்து",
    "தொண்ணூற்று",
];

const HUNDREDS: [&str; 10] = [
    "",
    "நூறு",
    "இருநூறு",
    "முந்நூறு",
    "நானூறு",
    "ஐநூறு",
    "அறுநூறு",
    "எழுநூறு",
    "எண்ணூறு",
    "தொள்ளாயிரம்",
];

const HUNDREDS_JOINING: [&str; 10] = [
    "",
    "நூற்று",
    "இருநூற்று",
    "முந்நூற்று",
    "நானூற்று",
    "ஐநூற்று",
    "அறுநூற்று",
    "எழுநூற்று",
    "எண்ணூற்று",
    "தொள்ளாயிரத்து",
];

/// Scale groups above the hundreds: (divisor, modulus, plain, joining)
const SCALES: [(u64, u64, &str, &str); 2] = [
    (100_000, 100, "லட்சம்", "லட்சத்து"),
    (1_000, 100, "ஆயிரம்", "ஆயிரத்து"),
];

const CRORE: u64 = 10_000_000;

/// Convert an amount to Tamil words
pub fn amount_in_words(amount: i64) -> String {
    if amount == 0 {
        return ZERO.to_string();
    }
    let words = cardinal(amount.unsigned_abs());
    if amount < 0 {
        format!("{} {}", MINUS, words)
    } else {
        words
    }
}

fn cardinal(n: u64) -> String {
    let mut parts: Vec<String> = Vec::new();

    let crores = n / CRORE;
    let mut rest = n % CRORE;
    if crores > 0 {
        let word = if rest > 0 { "கோடியே" } else { "கோடி" };
        parts.push(format!("{} {}", multiplier(crores), word));
    }

    for (divisor, modulus, plain, joining) in SCALES {
        let count = (rest / divisor) % modulus;
        rest %= divisor;
        if count == 0 {
            continue;
        }
        let word = if rest > 0 { joining } else { plain };
        // "ஆயிரம்" stands alone for a single thousand
        if count == 1 && divisor == 1_000 {
            parts.push(word.to_string());
        } else {
            parts.push(format!("{} {}", multiplier(count), word));
        }
    }

    if rest > 0 {
        parts.push(below_thousand(rest));
    }

    parts.join(" ")
}

/// Count in front of a scale word: a single unit reads "ஒரு"
fn multiplier(count: u64) -> String {
    if count == 1 {
        ONE_ATTRIBUTIVE.to_string()
    } else {
        cardinal(count)
    }
}

fn below_thousand(n: u64) -> String {
    let hundreds = (n / 100) as usize;
    let rest = n % 100;
    match (hundreds, rest) {
        (0, _) => below_hundred(rest),
        (h, 0) => HUNDREDS[h].to_string(),
        (h, r) => format!("{} {}", HUNDREDS_JOINING[h], below_hundred(r)),
    }
}

fn below_hundred(n: u64) -> String {
    let n = n as usize;
    match n {
        0..=9 => UNITS[n].to_string(),
        10..=19 => TEENS[n - 10].to_string(),
        _ => {
            let (tens, units) = (n / 10, n % 10);
            if units == 0 {
                TENS[tens].to_string()
            } else {
                format!("{} {}", TENS_JOINING[tens], UNITS[units])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_and_units() {
        assert_eq!(amount_in_words(0), "பூஜ்ஜியம்");
        assert_eq!(amount_in_words(7), "ஏழு");
        assert_eq!(amount_in_words(12), "பன்னிரண்டு");
    }

    #[test]
    fn test_tens_take_joining_form() {
        assert_eq!(amount_in_words(20), "இருபது");
        assert_eq!(amount_in_words(25), "இருபத்து ஐந்து");
        assert_eq!(amount_in_words(99), "தொண்ணூற்று ஒன்பது");
    }

    #[test]
    fn test_hundreds() {
        assert_eq!(amount_in_words(100), "நூறு");
        assert_eq!(amount_in_words(125), "நூற்று இருபத்து ஐந்து");
        assert_eq!(amount_in_words(900), "தொள்ளாயிரம்");
        assert_eq!(amount_in_words(905), "தொள்ளாயிரத்து ஐந்து");
    }

    #[test]
    fn test_thousands() {
        assert_eq!(amount_in_words(1_000), "ஆயிரம்");
        assert_eq!(amount_in_words(1_500), "ஆயிரத்து ஐநூறு");
        assert_eq!(amount_in_words(20_000), "இருபது ஆயிரம்");
        assert_eq!(amount_in_words(80_000), "எண்பது ஆயிரம்");
    }

    #[test]
    fn test_lakhs_and_crores() {
        assert_eq!(amount_in_words(100_000), "ஒரு லட்சம்");
        assert_eq!(
            amount_in_words(235_000),
            "இரண்டு லட்சத்து முப்பத்து ஐந்து ஆயிரம்"
        );
        assert_eq!(amount_in_words(10_000_000), "ஒரு கோடி");
        assert_eq!(amount_in_words(120_000_001), "பன்னிரண்டு கோடியே ஒன்று");
    }

    #[test]
    fn test_negative_amount() {
        assert_eq!(amount_in_words(-500), "கழித்தல் ஐநூறு");
    }

    #[test]
    fn test_large_values_do_not_panic() {
        let words = amount_in_words(i64::MIN);
        assert!(words.starts_with(MINUS));
        assert!(!amount_in_words(i64::MAX).is_empty());
    }
}
