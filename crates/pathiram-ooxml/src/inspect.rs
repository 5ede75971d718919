//! Summary of an exported DOCX package
//!
//! Follows the document relationships to the header and footer, so the
//! summary reflects how Word would resolve the package.

use crate::archive::OoxmlArchive;
use crate::document::{WordDocument, WordParagraph};
use crate::error::Result;
use crate::relationships::Relationships;

/// What a reader sees in a pathiram DOCX
#[derive(Debug, Clone, Default)]
pub struct DocxSummary {
    /// Text of the `Title` paragraph
    pub title: Option<String>,
    /// Running header text
    pub header: Option<String>,
    /// Field names in the footer (`PAGE`, `NUMPAGES`)
    pub footer_fields: Vec<String>,
    /// Text of every paragraph that opens a new page
    pub page_breaks: Vec<String>,
    pub paragraph_count: usize,
    pub table_count: usize,
    /// Package part paths, sorted
    pub parts: Vec<String>,
}

impl DocxSummary {
    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Self::from_archive(&OoxmlArchive::from_bytes(bytes)?)
    }

    pub fn from_archive(archive: &OoxmlArchive) -> Result<Self> {
        let document = WordDocument::parse(archive.document_xml()?)?;

        let rels = match archive.get("word/_rels/document.xml.rels") {
            Some(xml) => Relationships::parse(xml)?,
            None => Relationships::new(),
        };
        let part = |rel_type: &str| -> Result<Option<WordDocument>> {
            let Some(target) = rels.target_of_type(rel_type) else {
                return Ok(None);
            };
            match archive.get(&format!("word/{}", target.trim_start_matches('/'))) {
                Some(xml) => Ok(Some(WordDocument::parse(xml)?)),
                None => Ok(None),
            }
        };

        let header = part(Relationships::TYPE_HEADER)?.map(|h| h.plain_text());
        let footer_fields = part(Relationships::TYPE_FOOTER)?
            .map(|f| {
                f.paragraphs()
                    .flat_map(|p| p.fields.iter().cloned())
                    .collect()
            })
            .unwrap_or_default();

        Ok(Self {
            title: document.title(),
            header,
            footer_fields,
            page_breaks: document.page_breaks().map(WordParagraph::text).collect(),
            paragraph_count: document.paragraphs().count(),
            table_count: document.tables().count(),
            parts: archive.file_list().into_iter().map(String::from).collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::OoxmlError;

    #[test]
    fn test_missing_document_part() {
        let mut archive = OoxmlArchive::new();
        archive.set_string("word/styles.xml", "<w:styles/>");
        assert!(matches!(
            DocxSummary::from_archive(&archive),
            Err(OoxmlError::MissingFile(_))
        ));
    }

    #[test]
    fn test_summary_without_header_or_footer() {
        let mut archive = OoxmlArchive::new();
        archive.set_string(
            "word/document.xml",
            r#"<w:document xmlns:w="http://schemas.openxmlformats.org/wordprocessingml/2006/main"><w:body><w:p><w:r><w:t>x</w:t></w:r></w:p></w:body></w:document>"#,
        );
        let summary = DocxSummary::from_archive(&archive).unwrap();
        assert_eq!(summary.header, None);
        assert!(summary.footer_fields.is_empty());
        assert_eq!(summary.paragraph_count, 1);
        assert_eq!(summary.parts, vec!["word/document.xml"]);
    }
}
