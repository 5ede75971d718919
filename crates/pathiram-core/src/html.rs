//! HTML preview generator
//!
//! Converts a composed `pathiram_ast::Document` into deterministic HTML.
//! Every section becomes a `<section class="doc-section">` tagged with its
//! kind, so consumers never need to locate content by position.
//!
//! # Example
//!
//! ```
//! use pathiram_ast::{Block, Document, Heading, Section, SectionKind};
//! use pathiram_core::html::HtmlGenerator;
//!
//! let mut doc = Document::new();
//! doc.push(Section::new(
//!     SectionKind::Title,
//!     vec![Block::Heading(Heading::new(1, "கிரையப் பத்திரம்"))],
//! ));
//!
//! let html = HtmlGenerator::new().generate(&doc);
//! assert!(html.contains(r#"data-section="title""#));
//! ```

use pathiram_ast::{
    css_font_stack, Alignment, Block, Document, FormatType, Heading, Inline, List, Paragraph,
    Section, Table,
};

/// HTML generator configuration
#[derive(Debug, Clone, Default)]
pub struct HtmlConfig {
    /// Wrap the fragment in a complete page with font CSS
    pub standalone: bool,
}

/// HTML generator
pub struct HtmlGenerator {
    config: HtmlConfig,
    output: String,
}

impl Default for HtmlGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl HtmlGenerator {
    pub fn new() -> Self {
        Self {
            config: HtmlConfig::default(),
            output: String::new(),
        }
    }

    pub fn with_config(config: HtmlConfig) -> Self {
        Self {
            config,
            output: String::new(),
        }
    }

    /// Generate HTML for a document
    pub fn generate(&mut self, doc: &Document) -> String {
        self.output.clear();

        if self.config.standalone {
            self.open_page(doc);
        }

        self.output.push_str("<div class=\"document\">\n");
        for section in &doc.sections {
            self.generate_section(section);
        }
        self.output.push_str("</div>\n");

        if self.config.standalone {
            self.output.push_str("</body>\n</html>\n");
        }

        std::mem::take(&mut self.output)
    }

    fn open_page(&mut self, doc: &Document) {
        let title = doc.metadata.title.as_deref().unwrap_or_default();
        self.output.push_str("<!DOCTYPE html>\n<html lang=\"ta\">\n<head>\n");
        self.output.push_str("<meta charset=\"UTF-8\">\n");
        self.output
            .push_str(&format!("<title>{}</title>\n", escape_html(title)));
        self.output.push_str("<style>\n");
        self.output
            .push_str(&format!("body {{ font-family: {}; }}\n", css_font_stack()));
        self.output.push_str(concat!(
            ".document { width: 190mm; margin: 0 auto; line-height: 1.8; }\n",
            ".doc-title { text-align: center; }\n",
            ".text-justify { text-align: justify; }\n",
            ".text-right { text-align: right; }\n",
            ".text-center { text-align: center; }\n",
            ".signature-table { width: 100%; border: none; margin-top: 3em; }\n",
            ".signature-table td { height: 4em; vertical-align: top; }\n",
            "@media print { .page-break { page-break-before: always; } }\n",
        ));
        self.output.push_str("</style>\n</head>\n<body>\n");
    }

    fn generate_section(&mut self, section: &Section) {
        let class = if section.kind.starts_new_page() {
            "doc-section page-break"
        } else {
            "doc-section"
        };
        self.output.push_str(&format!(
            "<section class=\"{}\" data-section=\"{}\">\n",
            class,
            section.kind.as_str()
        ));
        for block in &section.blocks {
            self.generate_block(block);
        }
        self.output.push_str("</section>\n");
    }

    fn generate_block(&mut self, block: &Block) {
        match block {
            Block::Heading(h) => self.generate_heading(h),
            Block::Paragraph(p) => self.generate_paragraph(p),
            Block::List(l) => self.generate_list(l),
            Block::Table(t) => self.generate_table(t),
            Block::Break(_) => self.output.push_str("<div class=\"page-break\"></div>\n"),
        }
    }

    fn generate_heading(&mut self, heading: &Heading) {
        let level = heading.level.clamp(1, 6);
        if level == 1 {
            self.output.push_str("<h1 class=\"doc-title\">");
        } else {
            self.output
                .push_str(&format!("<h{} class=\"text-center\">", level));
        }
        self.generate_inlines(&heading.text);
        self.output.push_str(&format!("</h{}>\n", level));
    }

    fn generate_paragraph(&mut self, para: &Paragraph) {
        match para.align.and_then(align_class) {
            Some(class) => self.output.push_str(&format!("<p class=\"{}\">", class)),
            None => self.output.push_str("<p>"),
        }
        self.generate_inlines(&para.inlines);
        self.output.push_str("</p>\n");
    }

    fn generate_list(&mut self, list: &List) {
        let tag = if list.ordered { "ol" } else { "ul" };
        self.output.push_str(&format!("<{}>\n", tag));
        for item in &list.items {
            self.output.push_str("<li>");
            self.generate_inlines(&item.inlines);
            self.output.push_str("</li>\n");
        }
        self.output.push_str(&format!("</{}>\n", tag));
    }

    fn generate_table(&mut self, table: &Table) {
        if table.bordered {
            self.output.push_str("<table border=\"1\">\n");
        } else {
            self.output.push_str("<table class=\"signature-table\">\n");
        }
        for row in &table.rows {
            self.output.push_str("<tr>");
            for cell in &row.cells {
                match cell.align.and_then(align_class) {
                    Some(class) => self.output.push_str(&format!("<td class=\"{}\">", class)),
                    None => self.output.push_str("<td>"),
                }
                self.generate_inlines(&cell.inlines);
                self.output.push_str("</td>");
            }
            self.output.push_str("</tr>\n");
        }
        self.output.push_str("</table>\n");
    }

    fn generate_inlines(&mut self, inlines: &[Inline]) {
        for inline in inlines {
            self.generate_inline(inline);
        }
    }

    fn generate_inline(&mut self, inline: &Inline) {
        match inline {
            Inline::Text(text) => self.output.push_str(&escape_html(text)),
            Inline::Format(format, inner) => {
                let tag = match format {
                    FormatType::Bold => "strong",
                    FormatType::Underline => "u",
                };
                self.output.push_str(&format!("<{}>", tag));
                self.generate_inline(inner);
                self.output.push_str(&format!("</{}>", tag));
            }
            Inline::Span(children) => self.generate_inlines(children),
            Inline::Break => self.output.push_str("<br>"),
        }
    }
}

fn align_class(align: Alignment) -> Option<&'static str> {
    match align {
        Alignment::Left => None,
        Alignment::Center => Some("text-center"),
        Alignment::Right => Some("text-right"),
        Alignment::Justify => Some("text-justify"),
    }
}

/// Escape text for HTML content and attribute values
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// Generate an HTML fragment with the default configuration
pub fn generate(doc: &Document) -> String {
    HtmlGenerator::new().generate(doc)
}

/// Generate a complete HTML page
pub fn generate_standalone(doc: &Document) -> String {
    HtmlGenerator::with_config(HtmlConfig { standalone: true }).generate(doc)
}
