//! pathiram-pdf - PDF export via Typst
//!
//! # Architecture
//!
//! 1. **Transpiler** - Converts a composed `pathiram_ast::Document` to Typst markup
//! 2. **Compiler** - Compiles Typst markup to PDF bytes
//!
//! # Example
//!
//! ```ignore
//! use pathiram_ast::Document;
//! use pathiram_pdf::{Compiler, Transpiler};
//!
//! let doc = Document::new();
//! let typst_markup = Transpiler::transpile(&doc);
//! let pdf_bytes = Compiler::compile(&typst_markup)?;
//! ```

mod compiler;
mod error;
mod transpiler;

use std::path::Path;

use tracing::debug;

pub use compiler::Compiler;
pub use error::{PdfError, Result};
pub use transpiler::Transpiler;

/// Render a composed document to PDF bytes
pub fn render_pdf(doc: &pathiram_ast::Document) -> Result<Vec<u8>> {
    render_pdf_with_fonts::<&Path>(doc, &[])
}

/// Render with Tamil font files loaded into the engine
pub fn render_pdf_with_fonts<P: AsRef<Path>>(
    doc: &pathiram_ast::Document,
    font_paths: &[P],
) -> Result<Vec<u8>> {
    if doc.is_empty() {
        return Err(PdfError::EmptyDocument);
    }
    let typst_markup = Transpiler::transpile(doc);
    debug!(bytes = typst_markup.len(), "transpiled document");
    Compiler::compile_with_fonts(&typst_markup, font_paths)
}
