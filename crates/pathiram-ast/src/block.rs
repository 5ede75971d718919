//! Block-level elements for document structure
//!
//! Paragraphs, headings, ordered lists, tables and breaks. This is the
//! vocabulary every exporter has to understand.

use serde::{Deserialize, Serialize};

use crate::inline::{self, Inline};

/// Block-level content element
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Block {
    /// A paragraph of text
    Paragraph(Paragraph),
    /// A section heading
    Heading(Heading),
    /// An ordered or unordered list
    List(List),
    /// A table
    Table(Table),
    /// A page or section break
    Break(BreakType),
}

/// A paragraph block
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline content within the paragraph
    pub inlines: Vec<Inline>,
    /// Horizontal alignment, `None` means the exporter default
    pub align: Option<Alignment>,
}

/// A section heading
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6, where 1 is the highest)
    pub level: u8,
    /// Heading text content
    pub text: Vec<Inline>,
}

/// A list (ordered or unordered)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct List {
    /// Whether items are numbered
    pub ordered: bool,
    /// List items
    pub items: Vec<ListItem>,
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItem {
    /// Item content
    pub inlines: Vec<Inline>,
}

/// A table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Table {
    /// Table rows
    pub rows: Vec<TableRow>,
    /// Draw cell borders
    pub bordered: bool,
}

/// A table row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRow {
    /// Cells in this row
    pub cells: Vec<TableCell>,
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableCell {
    /// Cell content, empty for spacer cells
    pub inlines: Vec<Inline>,
    /// Horizontal alignment
    pub align: Option<Alignment>,
}

/// Text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Alignment {
    Left,
    Center,
    Right,
    Justify,
}

/// Break type variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BreakType {
    /// Page break
    Page,
}

impl Paragraph {
    /// Paragraph holding a single text run
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            inlines: vec![Inline::text(text)],
            align: None,
        }
    }

    /// Set the alignment
    pub fn aligned(mut self, align: Alignment) -> Self {
        self.align = Some(align);
        self
    }

    /// Plain text of the paragraph
    pub fn plain_text(&self) -> String {
        inline::plain_text(&self.inlines)
    }
}

impl Heading {
    /// Heading with a single text run
    pub fn new(level: u8, text: impl Into<String>) -> Self {
        Self {
            level,
            text: vec![Inline::text(text)],
        }
    }
}

impl TableCell {
    /// Cell with a single text run
    pub fn text(text: impl Into<String>, align: Alignment) -> Self {
        Self {
            inlines: vec![Inline::text(text)],
            align: Some(align),
        }
    }

    /// Blank cell, used for signing space
    pub fn blank(align: Alignment) -> Self {
        Self {
            inlines: Vec::new(),
            align: Some(align),
        }
    }
}

impl Block {
    /// Plain text of the block, list items and table cells joined by newlines
    pub fn plain_text(&self) -> String {
        match self {
            Block::Paragraph(p) => p.plain_text(),
            Block::Heading(h) => inline::plain_text(&h.text),
            Block::List(list) => list
                .items
                .iter()
                .map(|item| inline::plain_text(&item.inlines))
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Table(table) => table
                .rows
                .iter()
                .flat_map(|row| row.cells.iter())
                .map(|cell| inline::plain_text(&cell.inlines))
                .filter(|text| !text.is_empty())
                .collect::<Vec<_>>()
                .join("\n"),
            Block::Break(_) => String::new(),
        }
    }
}
