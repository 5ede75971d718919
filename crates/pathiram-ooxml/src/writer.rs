//! DOCX Writer
//!
//! Writes a composed `pathiram_ast::Document` to a Word package. Content is
//! placed by section tag into a fixed layout:
//!
//! 1. title, date, parties and the four recitals
//! 2. page break, property heading and parcels, signature table
//! 3. page break, witness heading, numbered witnesses, typist line
//!
//! The package is assembled in memory; an error leaves no partial output.
//!
//! # Example
//!
//! ```
//! use pathiram_ast::{Block, Document, Heading, Section, SectionKind};
//! use pathiram_ooxml::DocxWriter;
//!
//! let mut doc = Document::new();
//! doc.push(Section::new(
//!     SectionKind::Title,
//!     vec![Block::Heading(Heading::new(1, "கிரையப் பத்திரம்"))],
//! ));
//! let bytes = DocxWriter::generate(&doc)?;
//! assert!(bytes.starts_with(b"PK"));
//! # Ok::<(), pathiram_ooxml::OoxmlError>(())
//! ```

use pathiram_ast::{
    primary_font, Alignment, Block, Document, FormatType, Heading, Inline, List, Paragraph,
    SectionKind, Table,
};
use tracing::debug;

use crate::archive::OoxmlArchive;
use crate::error::{OoxmlError, Result};
use crate::package::{self, PAGE_HEIGHT, PAGE_MARGIN, PAGE_WIDTH, REL_NS, TEXT_WIDTH, WORD_NS};
use crate::relationships::Relationships;
use crate::xml::escape_xml;

/// Section kinds in Word layout order, with the ones that open a new page
const LAYOUT: &[(SectionKind, bool)] = &[
    (SectionKind::Title, false),
    (SectionKind::Date, false),
    (SectionKind::Parties, false),
    (SectionKind::PriorDocument, false),
    (SectionKind::Payment, false),
    (SectionKind::PropertyRights, false),
    (SectionKind::Covenant, false),
    (SectionKind::PropertyHeading, true),
    (SectionKind::Property, false),
    (SectionKind::Signatures, false),
    (SectionKind::WitnessHeading, true),
    (SectionKind::Witnesses, false),
    (SectionKind::Typist, false),
];

/// Height of the blank signing row, in twips
const SIGNING_ROW_HEIGHT: u32 = 1134;

/// DOCX Writer for composed documents
pub struct DocxWriter {
    /// XML output buffer
    output: String,
    /// Font written into every run
    font: String,
    /// Document relationships (word/_rels/document.xml.rels)
    relationships: Relationships,
    /// Next paragraph opens a new page
    pending_page_break: bool,
}

impl Default for DocxWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocxWriter {
    /// Writer using the first entry of the Tamil font table
    pub fn new() -> Self {
        Self::with_font(primary_font())
    }

    pub fn with_font(font: impl Into<String>) -> Self {
        Self {
            output: String::new(),
            font: font.into(),
            relationships: Relationships::new(),
            pending_page_break: false,
        }
    }

    /// Generate DOCX bytes with the default writer
    pub fn generate(doc: &Document) -> Result<Vec<u8>> {
        Self::new().write(doc)
    }

    /// Assemble the whole package and return its bytes
    pub fn write(mut self, doc: &Document) -> Result<Vec<u8>> {
        if doc.is_empty() {
            return Err(OoxmlError::InvalidStructure(
                "document has no sections".to_string(),
            ));
        }
        debug!(sections = doc.len(), font = %self.font, "writing docx");

        let title = doc
            .metadata
            .title
            .clone()
            .unwrap_or_else(|| doc.title_text());

        self.relationships
            .add("styles.xml", Relationships::TYPE_STYLES);
        self.relationships
            .add("settings.xml", Relationships::TYPE_SETTINGS);
        let header_id = self
            .relationships
            .add("header1.xml", Relationships::TYPE_HEADER);
        let footer_id = self
            .relationships
            .add("footer1.xml", Relationships::TYPE_FOOTER);

        let document_xml = self.generate_document_xml(doc, &header_id, &footer_id);

        let mut archive = OoxmlArchive::new();
        archive.set_string("[Content_Types].xml", package::content_types_xml());
        archive.set_string("_rels/.rels", package::package_rels().to_xml());
        archive.set_string("word/document.xml", document_xml);
        archive.set_string("word/_rels/document.xml.rels", self.relationships.to_xml());
        archive.set_string("word/styles.xml", package::styles_xml(&self.font));
        archive.set_string("word/settings.xml", package::settings_xml());
        archive.set_string("word/header1.xml", package::header_xml(&title, &self.font));
        archive.set_string("word/footer1.xml", package::footer_xml(&self.font));
        archive.set_string(
            "docProps/core.xml",
            package::core_xml(&title, doc.metadata.name.as_deref()),
        );
        archive.set_string("docProps/app.xml", package::app_xml());

        archive.to_bytes()
    }

    /// Generate the complete document.xml content
    fn generate_document_xml(&mut self, doc: &Document, header_id: &str, footer_id: &str) -> String {
        self.output.clear();

        self.output
            .push_str(r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#);
        self.output.push('\n');
        self.output.push_str(&format!(
            "<w:document xmlns:w=\"{}\" xmlns:r=\"{}\">\n",
            WORD_NS, REL_NS
        ));
        self.output.push_str("<w:body>\n");

        for (kind, new_page) in LAYOUT {
            let mut first = true;
            for section in doc.sections_of(*kind) {
                if first && *new_page {
                    self.pending_page_break = true;
                }
                first = false;
                for block in &section.blocks {
                    self.generate_block(block);
                }
            }
        }

        self.generate_section_properties(header_id, footer_id);

        self.output.push_str("</w:body>\n");
        self.output.push_str("</w:document>");

        std::mem::take(&mut self.output)
    }

    /// A4 page, one-inch margins, single border, header and footer
    fn generate_section_properties(&mut self, header_id: &str, footer_id: &str) {
        self.output.push_str("<w:sectPr>\n");
        self.output.push_str(&format!(
            "<w:headerReference w:type=\"default\" r:id=\"{}\"/>\n",
            escape_xml(header_id)
        ));
        self.output.push_str(&format!(
            "<w:footerReference w:type=\"default\" r:id=\"{}\"/>\n",
            escape_xml(footer_id)
        ));
        self.output.push_str(&format!(
            "<w:pgSz w:w=\"{}\" w:h=\"{}\"/>\n",
            PAGE_WIDTH, PAGE_HEIGHT
        ));
        self.output.push_str(&format!(
            "<w:pgMar w:top=\"{0}\" w:right=\"{0}\" w:bottom=\"{0}\" w:left=\"{0}\" \
             w:header=\"720\" w:footer=\"720\" w:gutter=\"0\"/>\n",
            PAGE_MARGIN
        ));
        self.output
            .push_str("<w:pgBorders w:offsetFrom=\"page\">\n");
        for side in ["top", "left", "bottom", "right"] {
            self.output.push_str(&format!(
                "<w:{} w:val=\"single\" w:sz=\"4\" w:space=\"24\" w:color=\"auto\"/>\n",
                side
            ));
        }
        self.output.push_str("</w:pgBorders>\n");
        self.output.push_str("</w:sectPr>\n");
    }

    fn generate_block(&mut self, block: &Block) {
        match block {
            Block::Paragraph(para) => self.generate_paragraph(para),
            Block::Heading(heading) => self.generate_heading(heading),
            Block::List(list) => self.generate_list(list),
            Block::Table(table) => self.generate_table(table),
            Block::Break(_) => self.pending_page_break = true,
        }
    }

    /// Open `<w:p>` with its properties, consuming any pending page break
    fn open_paragraph(&mut self, style: Option<&str>, align: Option<Alignment>, hanging: bool) {
        self.output.push_str("<w:p>\n<w:pPr>\n");
        if let Some(style) = style {
            self.output
                .push_str(&format!("<w:pStyle w:val=\"{}\"/>\n", escape_xml(style)));
        }
        if std::mem::take(&mut self.pending_page_break) {
            self.output.push_str("<w:pageBreakBefore/>\n");
        }
        if hanging {
            self.output
                .push_str("<w:ind w:left=\"567\" w:hanging=\"567\"/>\n");
        }
        if let Some(align) = align {
            self.output
                .push_str(&format!("<w:jc w:val=\"{}\"/>\n", jc_value(align)));
        }
        self.output.push_str("</w:pPr>\n");
    }

    fn generate_paragraph(&mut self, para: &Paragraph) {
        self.open_paragraph(None, para.align, false);
        for inline in &para.inlines {
            self.generate_inline(inline);
        }
        self.output.push_str("</w:p>\n");
    }

    fn generate_heading(&mut self, heading: &Heading) {
        let style = if heading.level <= 1 { "Title" } else { "Heading2" };
        self.open_paragraph(Some(style), Some(Alignment::Center), false);
        for inline in &heading.text {
            self.generate_inline(inline);
        }
        self.output.push_str("</w:p>\n");
    }

    /// Each item becomes its own paragraph with a literal number prefix
    fn generate_list(&mut self, list: &List) {
        for (i, item) in list.items.iter().enumerate() {
            self.open_paragraph(None, Some(Alignment::Justify), true);
            let marker = if list.ordered {
                format!("{}.\t", i + 1)
            } else {
                "•\t".to_string()
            };
            self.generate_run(&marker, None);
            for inline in &item.inlines {
                self.generate_inline(inline);
            }
            self.output.push_str("</w:p>\n");
        }
    }

    fn generate_table(&mut self, table: &Table) {
        let columns = table
            .rows
            .iter()
            .map(|row| row.cells.len())
            .max()
            .unwrap_or(0)
            .max(1);
        let column_width = TEXT_WIDTH / columns as u32;

        self.output.push_str("<w:tbl>\n");
        self.output.push_str("<w:tblPr>\n");
        self.output
            .push_str("<w:tblW w:w=\"5000\" w:type=\"pct\"/>\n");
        let border = if table.bordered { "single" } else { "none" };
        self.output.push_str("<w:tblBorders>\n");
        for side in ["top", "left", "bottom", "right", "insideH", "insideV"] {
            self.output.push_str(&format!(
                "<w:{} w:val=\"{}\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\n",
                side, border
            ));
        }
        self.output.push_str("</w:tblBorders>\n");
        self.output
            .push_str("<w:tblLayout w:type=\"fixed\"/>\n");
        self.output.push_str("</w:tblPr>\n");

        self.output.push_str("<w:tblGrid>\n");
        for _ in 0..columns {
            self.output
                .push_str(&format!("<w:gridCol w:w=\"{}\"/>\n", column_width));
        }
        self.output.push_str("</w:tblGrid>\n");

        for row in &table.rows {
            self.output.push_str("<w:tr>\n");
            if row.cells.iter().all(|cell| cell.inlines.is_empty()) {
                self.output.push_str(&format!(
                    "<w:trPr><w:trHeight w:val=\"{}\"/></w:trPr>\n",
                    SIGNING_ROW_HEIGHT
                ));
            }
            for cell in &row.cells {
                self.output.push_str("<w:tc>\n");
                self.output.push_str(&format!(
                    "<w:tcPr><w:tcW w:w=\"{}\" w:type=\"dxa\"/></w:tcPr>\n",
                    column_width
                ));
                if cell.inlines.is_empty() {
                    self.output.push_str("<w:p/>\n");
                } else {
                    self.open_paragraph(None, cell.align, false);
                    for inline in &cell.inlines {
                        self.generate_inline(inline);
                    }
                    self.output.push_str("</w:p>\n");
                }
                self.output.push_str("</w:tc>\n");
            }
            self.output.push_str("</w:tr>\n");
        }

        self.output.push_str("</w:tbl>\n");
    }

    fn generate_inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Text(text) => self.generate_run(text, None),
            Inline::Format(format_type, inner) => {
                let text = inner.plain_text();
                self.generate_run(&text, Some(*format_type));
            }
            Inline::Span(inlines) => {
                for inline in inlines {
                    self.generate_inline(inline);
                }
            }
            Inline::Break => {
                self.output.push_str("<w:r>\n<w:br/>\n</w:r>\n");
            }
        }
    }

    fn generate_run(&mut self, text: &str, format: Option<FormatType>) {
        self.output.push_str("<w:r>\n<w:rPr>\n");
        self.output.push_str(&package::font_rpr(&self.font));
        self.output.push('\n');
        match format {
            Some(FormatType::Bold) => self.output.push_str("<w:b/>\n<w:bCs/>\n"),
            Some(FormatType::Underline) => self.output.push_str("<w:u w:val=\"single\"/>\n"),
            None => {}
        }
        self.output.push_str("</w:rPr>\n");
        for (i, part) in text.split('\t').enumerate() {
            if i > 0 {
                self.output.push_str("<w:tab/>\n");
            }
            if !part.is_empty() {
                self.output.push_str(&format!(
                    "<w:t xml:space=\"preserve\">{}</w:t>\n",
                    escape_xml(part)
                ));
            }
        }
        self.output.push_str("</w:r>\n");
    }
}

fn jc_value(align: Alignment) -> &'static str {
    match align {
        Alignment::Left => "left",
        Alignment::Center => "center",
        Alignment::Right => "right",
        Alignment::Justify => "both",
    }
}
