//! Property schedule blocks

use pathiram_ast::{Alignment, Block, Inline, Paragraph};

use crate::amount::{money_clause, parse_amount, PLACEHOLDER};
use crate::model::{CadastralRef, PropertyParcel};

/// Shown when no parcel has an id or survey number
pub const NO_PROPERTY: &str = "சொத்து விவரங்கள் குறிப்பிடப்படவில்லை";

fn location(cadastral: &CadastralRef) -> Vec<String> {
    let mut parts = Vec::new();
    let labelled = [
        (&cadastral.state, "மாநிலம்"),
        (&cadastral.district, "மாவட்டம்"),
        (&cadastral.taluk, "வட்டம்"),
        (&cadastral.village, "கிராமம்"),
    ];
    for (value, label) in labelled {
        let value = value.trim();
        if !value.is_empty() {
            parts.push(format!("{} {}", value, label));
        }
    }
    parts
}

/// Detail text of one parcel, without the numbered lead-in
pub fn parcel_details(parcel: &PropertyParcel) -> String {
    let mut parts = Vec::new();
    if let Some(cadastral) = &parcel.cadastral {
        parts.extend(location(cadastral));
    }
    if !parcel.survey_number.trim().is_empty() {
        parts.push(format!("சர்வே எண்: {}", parcel.survey_number.trim()));
    }
    if !parcel.area.trim().is_empty() {
        parts.push(format!("பரப்பளவு: {}", parcel.area.trim()));
    }
    if !parcel.assessed_value.trim().is_empty() {
        // a non-numeric value is shown as absent rather than echoed
        parts.push(format!(
            "மதிப்பு: {}",
            money_clause(parse_amount(&parcel.assessed_value))
        ));
    }
    if !parcel.description.trim().is_empty() {
        parts.push(format!("விவரம்: {}", parcel.description.trim()));
    }
    if parts.is_empty() {
        parts.push(format!("விவரம்: {}", PLACEHOLDER));
    }
    parts.join(", ")
}

/// One block per listable parcel, numbered from 1
pub fn property_blocks(parcels: &[PropertyParcel]) -> Vec<Block> {
    let blocks: Vec<Block> = parcels
        .iter()
        .filter(|parcel| parcel.is_listable())
        .enumerate()
        .map(|(i, parcel)| {
            Block::Paragraph(Paragraph {
                inlines: vec![
                    Inline::bold(format!("சொத்து {}:", i + 1)),
                    Inline::text(format!(" {}", parcel_details(parcel))),
                ],
                align: Some(Alignment::Justify),
            })
        })
        .collect();

    if blocks.is_empty() {
        vec![Block::Paragraph(Paragraph::text(NO_PROPERTY))]
    } else {
        blocks
    }
}
