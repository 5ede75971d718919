//! # pathiram-ooxml
//!
//! Word (OOXML) export for pathiram documents.
//!
//! This crate provides functionality to:
//! - Write a composed document as an A4 DOCX with a running header,
//!   page-numbered footer and page border
//! - Read an exported DOCX back for inspection
//!
//! ## Example: Reading a Document
//!
//! ```no_run
//! use pathiram_ooxml::{OoxmlArchive, WordDocument};
//!
//! let archive = OoxmlArchive::open("pathiram-document.docx")?;
//! let document = WordDocument::parse(archive.document_xml()?)?;
//!
//! for para in document.page_breaks() {
//!     println!("new page: {}", para.text());
//! }
//! # Ok::<(), pathiram_ooxml::OoxmlError>(())
//! ```

pub mod archive;
pub mod document;
pub mod error;
pub mod inspect;
pub mod package;
pub mod relationships;
pub mod writer;
pub mod xml;

pub use archive::OoxmlArchive;
pub use document::{WordBlock, WordDocument, WordParagraph, WordRun, WordTable};
pub use error::{OoxmlError, Result};
pub use inspect::DocxSummary;
pub use relationships::Relationships;
pub use writer::DocxWriter;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
