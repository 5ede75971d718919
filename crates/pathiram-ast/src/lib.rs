//! pathiram-ast - Tagged-section document structure
//!
//! The composer produces a [`Document`] made of named [`Section`]s and every
//! exporter (HTML preview, DOCX, PDF) consumes the same structure. Sections
//! are looked up by their [`SectionKind`] tag, never by position.

pub mod block;
pub mod document;
pub mod fonts;
pub mod inline;

pub use block::{
    Alignment, Block, BreakType, Heading, List, ListItem, Paragraph, Table, TableCell, TableRow,
};
pub use document::{Document, DocumentMeta, Section, SectionKind};
pub use fonts::{css_font_stack, primary_font, TAMIL_FONTS};
pub use inline::{FormatType, Inline};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
