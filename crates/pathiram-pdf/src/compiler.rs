//! Typst to PDF compiler
//!
//! Compiles Typst markup to PDF bytes using typst-as-lib. The engine ships
//! no Tamil font of its own; font files are passed in explicitly.

use std::path::Path;

use tracing::debug;
use typst_as_lib::TypstEngine;

use crate::error::{PdfError, Result};

/// Compiler for converting Typst markup to PDF
pub struct Compiler;

impl Compiler {
    /// Compile Typst markup to PDF bytes
    pub fn compile(markup: &str) -> Result<Vec<u8>> {
        Self::compile_with_fonts::<&Path>(markup, &[])
    }

    /// Compile with font files (TTF/OTF) loaded into the engine
    pub fn compile_with_fonts<P: AsRef<Path>>(markup: &str, font_paths: &[P]) -> Result<Vec<u8>> {
        let mut fonts = Vec::with_capacity(font_paths.len());
        for font_path in font_paths {
            let font_path = font_path.as_ref();
            let font_bytes = std::fs::read(font_path).map_err(|e| {
                PdfError::Font(format!("Failed to read font {}: {}", font_path.display(), e))
            })?;
            fonts.push(font_bytes);
        }
        debug!(fonts = fonts.len(), "compiling typst markup");

        let engine = TypstEngine::builder()
            .main_file(markup.to_string())
            .fonts(fonts)
            .build();

        // compiled.output is the Result, compiled.warnings the diagnostics
        let compiled = engine.compile();
        if !compiled.warnings.is_empty() {
            debug!(warnings = compiled.warnings.len(), "typst reported warnings");
        }
        let document = compiled
            .output
            .map_err(|e| PdfError::Compilation(format!("{:?}", e)))?;

        let options = typst_pdf::PdfOptions::default();
        let pdf_bytes = typst_pdf::pdf(&document, &options)
            .map_err(|e| PdfError::Compilation(format!("PDF generation failed: {:?}", e)))?;

        Ok(pdf_bytes.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compile_simple() {
        let markup = "#set page(paper: \"a4\", margin: 10mm)\n#\"Hello\"";
        let pdf = Compiler::compile(markup).unwrap();
        assert!(pdf.starts_with(b"%PDF"), "Output doesn't start with PDF header");
    }

    #[test]
    fn test_missing_font_file() {
        let err = Compiler::compile_with_fonts("x", &["/nonexistent/Latha.ttf"]).unwrap_err();
        assert!(matches!(err, PdfError::Font(_)));
    }

    #[test]
    fn test_compile_error_is_reported() {
        let result = Compiler::compile("#let x = (");
        assert!(matches!(result, Err(PdfError::Compilation(_))));
    }
}
