//! Date rendering for document and reference dates

use chrono::NaiveDate;

const INPUT_FORMATS: [&str; 4] = ["%Y-%m-%d", "%d-%m-%Y", "%d/%m/%Y", "%d.%m.%Y"];

/// Render a date as `DD-MM-YYYY`
///
/// Unparseable but non-empty input is kept verbatim; empty input gives `None`.
pub fn format_date(raw: &str) -> Option<String> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    let parsed = INPUT_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(raw, fmt).ok());
    Some(match parsed {
        Some(date) => date.format("%d-%m-%Y").to_string(),
        None => raw.to_string(),
    })
}
