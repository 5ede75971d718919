//! Document root, metadata and tagged sections
//!
//! A composed instrument is an ordered list of sections. Each section carries
//! a [`SectionKind`] tag so exporters can find the parties clause or the
//! witness list by name instead of counting paragraphs.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::block::Block;

/// A complete composed document
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, date, name)
    pub metadata: DocumentMeta,
    /// Sections in composer order
    pub sections: Vec<Section>,
}

/// Document metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DocumentMeta {
    /// Instrument title as rendered in the title section
    pub title: Option<String>,
    /// Rendered document date
    pub date: Option<String>,
    /// User-supplied document name (used for file names)
    pub name: Option<String>,
    /// Additional attributes
    pub attributes: HashMap<String, String>,
}

/// A named section of the instrument
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Which part of the instrument this is
    pub kind: SectionKind,
    /// Section content
    pub blocks: Vec<Block>,
}

/// Section tags, listed in composer order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKind {
    Title,
    Date,
    Parties,
    PriorDocument,
    Payment,
    PropertyRights,
    Covenant,
    PropertyHeading,
    Property,
    WitnessHeading,
    Witnesses,
    Typist,
    Signatures,
}

impl SectionKind {
    /// All kinds in composer order
    pub const ALL: [SectionKind; 13] = [
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
    ];

    /// Stable identifier, used as `data-section` in HTML
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::Title => "title",
            SectionKind::Date => "date",
            SectionKind::Parties => "parties",
            SectionKind::PriorDocument => "prior-document",
            SectionKind::Payment => "payment",
            SectionKind::PropertyRights => "property-rights",
            SectionKind::Covenant => "covenant",
            SectionKind::PropertyHeading => "property-heading",
            SectionKind::Property => "property",
            SectionKind::WitnessHeading => "witness-heading",
            SectionKind::Witnesses => "witnesses",
            SectionKind::Typist => "typist",
            SectionKind::Signatures => "signatures",
        }
    }

    /// Sections that begin on a fresh page in paginated output
    pub fn starts_new_page(self) -> bool {
        matches!(
            self,
            SectionKind::Title | SectionKind::PropertyHeading | SectionKind::WitnessHeading
        )
    }
}

impl Section {
    /// Create a section from blocks
    pub fn new(kind: SectionKind, blocks: Vec<Block>) -> Self {
        Self { kind, blocks }
    }

    /// Plain text of all blocks, one block per line
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .map(Block::plain_text)
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Document {
    /// Create a new empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a section
    pub fn push(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// First section with the given tag
    pub fn section(&self, kind: SectionKind) -> Option<&Section> {
        self.sections.iter().find(|s| s.kind == kind)
    }

    /// All sections with the given tag, in order
    pub fn sections_of(&self, kind: SectionKind) -> impl Iterator<Item = &Section> {
        self.sections.iter().filter(move |s| s.kind == kind)
    }

    /// Plain text of the title section
    pub fn title_text(&self) -> String {
        self.section(SectionKind::Title)
            .map(Section::plain_text)
            .unwrap_or_default()
    }

    /// Check if the document is empty (no sections)
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Get the number of sections
    pub fn len(&self) -> usize {
        self.sections.len()
    }
}

impl DocumentMeta {
    /// Set an attribute
    pub fn set_attribute(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(key.into(), value.into());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::block::{Heading, Paragraph};

    fn sample() -> Document {
        let mut doc = Document::new();
        doc.push(Section::new(
            SectionKind::Title,
            vec![Block::Heading(Heading::new(1, "கிரைய ஒப்பந்தப் பத்திரம்"))],
        ));
        doc.push(Section::new(
            SectionKind::Property,
            vec![Block::Paragraph(Paragraph::text("சொத்து 1"))],
        ));
        doc.push(Section::new(
            SectionKind::Property,
            vec![Block::Paragraph(Paragraph::text("சொத்து 2"))],
        ));
        doc
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.title_text(), "");
    }

    #[test]
    fn test_lookup_by_kind() {
        let doc = sample();
        assert_eq!(doc.title_text(), "கிரைய ஒப்பந்தப் பத்திரம்");
        assert_eq!(doc.sections_of(SectionKind::Property).count(), 2);
        assert!(doc.section(SectionKind::Witnesses).is_none());
    }

    #[test]
    fn test_page_starting_sections() {
        let starting: Vec<_> = SectionKind::ALL
            .iter()
            .filter(|k| k.starts_new_page())
            .collect();
        assert_eq!(
            starting,
            vec![
                &SectionKind::Title,
                &SectionKind::PropertyHeading,
                &SectionKind::WitnessHeading
            ]
        );
    }

    #[test]
    fn test_kind_serializes_kebab_case() {
        let json = serde_json::to_string(&SectionKind::PropertyRights).unwrap();
        assert_eq!(json, "\"property-rights\"");
        assert_eq!(SectionKind::PropertyRights.as_str(), "property-rights");
    }

    #[test]
    fn test_metadata_attributes() {
        let mut meta = DocumentMeta::default();
        meta.set_attribute("instrument", "sale-agreement");
        assert_eq!(
            meta.attributes.get("instrument").map(String::as_str),
            Some("sale-agreement")
        );
    }
}
