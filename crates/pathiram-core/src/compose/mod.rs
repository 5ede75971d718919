//! Document composer
//!
//! Turns a [`DocumentModel`] into a tagged-section [`Document`]. The composer
//! is total: any partially filled model produces a document, with absent
//! values rendered as a fixed Tamil placeholder.
//!
//! Section order: title, date, parties clause, four recitals, property
//! heading and parcels, witness heading and list, typist line, signatures.
//!
//! # Example
//!
//! ```
//! use pathiram_core::compose::compose;
//! use pathiram_core::model::{DocumentModel, InstrumentKind};
//!
//! let doc = compose(&DocumentModel::blank(InstrumentKind::SaleAgreement));
//! assert_eq!(doc.title_text(), "கிரைய ஒப்பந்தப் பத்திரம்");
//! ```

mod parties;
mod property;
mod recitals;
mod vocabulary;

use pathiram_ast::{
    Alignment, Block, Document, DocumentMeta, Heading, Inline, List, ListItem, Paragraph, Section,
    SectionKind, Table, TableCell, TableRow,
};

use crate::amount::PLACEHOLDER;
use crate::date::format_date;
use crate::html::HtmlGenerator;
use crate::model::DocumentModel;

pub use parties::{display_name, party_clause, witness_entry};
pub use property::{parcel_details, property_blocks, NO_PROPERTY};
pub use recitals::time_frame_phrase;
pub use vocabulary::Vocabulary;

use recitals::RecitalContext;

/// Composer for one model
pub struct Composer<'a> {
    model: &'a DocumentModel,
    vocab: &'static Vocabulary,
}

impl<'a> Composer<'a> {
    pub fn new(model: &'a DocumentModel) -> Self {
        Self {
            model,
            vocab: Vocabulary::of(model.kind),
        }
    }

    /// Build the full document
    pub fn compose(&self) -> Document {
        let date = format_date(&self.model.date);
        let mut doc = Document {
            metadata: DocumentMeta {
                title: Some(self.vocab.title.to_string()),
                date: date.clone(),
                name: self.model.name.clone(),
                ..Default::default()
            },
            sections: Vec::new(),
        };
        doc.metadata
            .set_attribute("instrument", self.model.kind.as_str());

        doc.push(self.title());
        doc.push(self.date(date.as_deref()));
        doc.push(self.parties());

        let ctx = RecitalContext::new(self.model, self.vocab);
        for (kind, text) in recitals::recitals(&ctx) {
            doc.push(Section::new(kind, vec![justified(text)]));
        }

        doc.push(Section::new(
            SectionKind::PropertyHeading,
            vec![Block::Heading(Heading::new(2, "சொத்து விவரம்"))],
        ));
        for block in property_blocks(&self.model.properties) {
            doc.push(Section::new(SectionKind::Property, vec![block]));
        }

        doc.push(self.witness_heading());
        doc.push(self.witnesses());
        doc.push(self.typist());
        doc.push(self.signatures());
        doc
    }

    fn title(&self) -> Section {
        Section::new(
            SectionKind::Title,
            vec![Block::Heading(Heading::new(1, self.vocab.title))],
        )
    }

    fn date(&self, date: Option<&str>) -> Section {
        let text = format!("நாள்: {}", date.unwrap_or(PLACEHOLDER));
        Section::new(
            SectionKind::Date,
            vec![Block::Paragraph(
                Paragraph::text(text).aligned(Alignment::Right),
            )],
        )
    }

    /// Buyers numbered 1..N, sellers continue from N+1
    fn parties(&self) -> Section {
        let buyers = &self.model.buyers;
        let sellers = &self.model.sellers;
        let buyer_noun = self.vocab.transferee.for_count(buyers.len());
        let seller_noun = self.vocab.transferor.for_count(sellers.len());

        let buyer_clauses: Vec<String> = buyers
            .iter()
            .enumerate()
            .map(|(i, party)| party_clause(party, i + 1, buyer_noun))
            .collect();
        let seller_clauses: Vec<String> = sellers
            .iter()
            .enumerate()
            .map(|(i, party)| party_clause(party, buyers.len() + i + 1, seller_noun))
            .collect();

        let side = |clauses: &[String], noun: &str| {
            if clauses.is_empty() {
                format!("{} {}", noun, PLACEHOLDER)
            } else {
                clauses.join(", ")
            }
        };

        let text = format!(
            "{buyers} ஆகிய {buyer_noun} ஒரு பக்கமும், {sellers} ஆகிய {seller_noun} மறு பக்கமும் \
             சேர்ந்து எழுதிக்கொண்ட {title}.",
            buyers = side(&buyer_clauses, buyer_noun),
            sellers = side(&seller_clauses, seller_noun),
            buyer_noun = buyer_noun,
            seller_noun = seller_noun,
            title = self.vocab.title,
        );
        Section::new(SectionKind::Parties, vec![justified(text)])
    }

    fn witness_heading(&self) -> Section {
        let noun = self.vocab.witness.for_count(self.model.witnesses.len());
        Section::new(
            SectionKind::WitnessHeading,
            vec![Block::Heading(Heading::new(2, noun))],
        )
    }

    fn witnesses(&self) -> Section {
        let witnesses = &self.model.witnesses;
        let block = if witnesses.is_empty() {
            Block::Paragraph(Paragraph::text(format!(
                "{} {}",
                self.vocab.witness.singular, PLACEHOLDER
            )))
        } else {
            Block::List(List {
                ordered: true,
                items: witnesses
                    .iter()
                    .map(|w| ListItem {
                        inlines: vec![Inline::text(witness_entry(w))],
                    })
                    .collect(),
            })
        };
        Section::new(SectionKind::Witnesses, vec![block])
    }

    fn typist(&self) -> Section {
        let typist = &self.model.typist;
        let mut parts = Vec::new();
        for value in [&typist.name, &typist.office_name] {
            if !value.trim().is_empty() {
                parts.push(value.trim().to_string());
            }
        }
        if !typist.phone.trim().is_empty() {
            parts.push(format!("கைபேசி: {}", typist.phone.trim()));
        }
        let text = if parts.is_empty() {
            format!("தட்டச்சு செய்தவர்: {}", PLACEHOLDER)
        } else {
            format!("தட்டச்சு செய்தவர்: {}", parts.join(", "))
        };
        Section::new(
            SectionKind::Typist,
            vec![Block::Paragraph(
                Paragraph::text(text).aligned(Alignment::Right),
            )],
        )
    }

    /// Seller side left, buyer side right, then a blank row for signing
    fn signatures(&self) -> Section {
        let seller = self.vocab.transferor.for_count(self.model.sellers.len());
        let buyer = self.vocab.transferee.for_count(self.model.buyers.len());
        let table = Table {
            rows: vec![
                TableRow {
                    cells: vec![
                        TableCell::text(format!("{} கையொப்பம்", seller), Alignment::Left),
                        TableCell::text(format!("{} கையொப்பம்", buyer), Alignment::Right),
                    ],
                },
                TableRow {
                    cells: vec![
                        TableCell::blank(Alignment::Left),
                        TableCell::blank(Alignment::Right),
                    ],
                },
            ],
            bordered: false,
        };
        Section::new(SectionKind::Signatures, vec![Block::Table(table)])
    }
}

fn justified(text: String) -> Block {
    Block::Paragraph(Paragraph::text(text).aligned(Alignment::Justify))
}

/// Compose a model into tagged sections
pub fn compose(model: &DocumentModel) -> Document {
    Composer::new(model).compose()
}

/// Compose a model straight to preview HTML
pub fn compose_html(model: &DocumentModel) -> String {
    HtmlGenerator::new().generate(&compose(model))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{InstrumentKind, Party};

    #[test]
    fn test_section_order() {
        let doc = compose(&DocumentModel::blank(InstrumentKind::SaleAgreement));
        let kinds: Vec<_> = doc.sections.iter().map(|s| s.kind).collect();
        assert_eq!(
            kinds,
            vec![
                SectionKind::Title,
                SectionKind::Date,
                SectionKind::Parties,
                SectionKind::PriorDocument,
                SectionKind::Payment,
                SectionKind::PropertyRights,
                SectionKind::Covenant,
                SectionKind::PropertyHeading,
                SectionKind::Property,
                SectionKind::WitnessHeading,
                SectionKind::Witnesses,
                SectionKind::Typist,
                SectionKind::Signatures,
            ]
        );
    }

    #[test]
    fn test_metadata() {
        let mut model = DocumentModel::blank(InstrumentKind::SaleDeed);
        model.date = "2024-01-26".to_string();
        model.name = Some("வீடு கிரையம்".to_string());
        let doc = compose(&model);
        assert_eq!(doc.metadata.title.as_deref(), Some("கிரையப் பத்திரம்"));
        assert_eq!(doc.metadata.date.as_deref(), Some("26-01-2024"));
        assert_eq!(doc.metadata.name.as_deref(), Some("வீடு கிரையம்"));
        assert_eq!(
            doc.metadata.attributes.get("instrument").map(String::as_str),
            Some("sale-deed")
        );
    }

    #[test]
    fn test_signature_table_seller_first() {
        let model = DocumentModel {
            buyers: vec![Party::named("அ")],
            sellers: vec![Party::named("ஆ")],
            ..Default::default()
        };
        let doc = compose(&model);
        let section = doc.section(SectionKind::Signatures).unwrap();
        let Block::Table(table) = &section.blocks[0] else {
            panic!("expected table");
        };
        assert_eq!(table.rows.len(), 2);
        assert_eq!(
            pathiram_ast::inline::plain_text(&table.rows[0].cells[0].inlines),
            "விற்பவர் கையொப்பம்"
        );
        assert_eq!(table.rows[0].cells[1].align, Some(Alignment::Right));
        assert!(table.rows[1].cells.iter().all(|c| c.inlines.is_empty()));
    }

    #[test]
    fn test_empty_witness_list_placeholder() {
        let doc = compose(&DocumentModel::default());
        let text = doc.section(SectionKind::Witnesses).unwrap().plain_text();
        assert_eq!(text, "சாட்சி குறிப்பிடப்படவில்லை");
    }
}
