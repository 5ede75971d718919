//! Section to Typst markup transpiler
//!
//! Every piece of user text is emitted as a Typst string literal (`#"..."`),
//! so names or descriptions containing `*`, `#` or `_` are never read as
//! markup.

use pathiram_ast::{
    Alignment, Block, Document, FormatType, Heading, Inline, List, Paragraph, Section, Table,
    TAMIL_FONTS,
};

/// Height reserved for a blank signing row
const SIGNING_SPACE: &str = "1.5cm";

/// Transpiler for converting composed documents to Typst markup
pub struct Transpiler;

impl Transpiler {
    /// Transpile a document to Typst markup
    pub fn transpile(doc: &Document) -> String {
        let mut output = String::new();

        if let Some(ref title) = doc.metadata.title {
            output.push_str(&format!("#set document(title: {})\n", string_literal(title)));
        }
        output.push_str(&Self::preamble());

        for section in &doc.sections {
            output.push_str(&Self::transpile_section(section));
        }

        output
    }

    /// Page, font and paragraph setup
    fn preamble() -> String {
        let fonts: Vec<String> = TAMIL_FONTS.iter().map(|f| string_literal(f)).collect();
        let mut output = String::new();
        output.push_str("#set page(paper: \"a4\", margin: 10mm)\n");
        output.push_str(&format!(
            "#set text(font: ({}), lang: \"ta\", size: 12pt)\n",
            fonts.join(", ")
        ));
        output.push_str("#set par(leading: 0.9em)\n\n");
        output
    }

    fn transpile_section(section: &Section) -> String {
        let mut output = String::new();
        if section.kind.starts_new_page() {
            output.push_str("#pagebreak(weak: true)\n");
        }
        for block in &section.blocks {
            output.push_str(&Self::transpile_block(block));
            output.push('\n');
        }
        output
    }

    /// Transpile a single block
    fn transpile_block(block: &Block) -> String {
        match block {
            Block::Heading(h) => Self::transpile_heading(h),
            Block::Paragraph(p) => Self::transpile_paragraph(p),
            Block::List(list) => Self::transpile_list(list),
            Block::Table(table) => Self::transpile_table(table),
            Block::Break(_) => "#pagebreak()\n".to_string(),
        }
    }

    fn transpile_heading(heading: &Heading) -> String {
        let size = if heading.level <= 1 { "16pt" } else { "14pt" };
        format!(
            "#align(center, text(size: {}, weight: \"bold\")[{}])\n",
            size,
            Self::transpile_inlines(&heading.text)
        )
    }

    fn transpile_paragraph(para: &Paragraph) -> String {
        let content = Self::transpile_inlines(&para.inlines);
        match para.align {
            Some(Alignment::Justify) => format!("#par(justify: true)[{}]\n", content),
            Some(Alignment::Right) => format!("#align(right)[{}]\n", content),
            Some(Alignment::Center) => format!("#align(center)[{}]\n", content),
            Some(Alignment::Left) | None => format!("{}\n", content),
        }
    }

    /// Ordered lists are numbered "1.", "2.", ...
    fn transpile_list(list: &List) -> String {
        let function = if list.ordered {
            "enum(numbering: \"1.\", "
        } else {
            "list("
        };
        let items: Vec<String> = list
            .items
            .iter()
            .map(|item| format!("  [{}],\n", Self::transpile_inlines(&item.inlines)))
            .collect();
        format!("#{}\n{})\n", function, items.concat())
    }

    /// Tables become borderless equal-width grids
    fn transpile_table(table: &Table) -> String {
        let col_count = table
            .rows
            .iter()
            .map(|r| r.cells.len())
            .max()
            .unwrap_or(0)
            .max(1);

        let mut output = String::new();
        output.push_str(&format!(
            "#grid(\n  columns: ({}),\n  row-gutter: 0.8em,\n",
            vec!["1fr"; col_count].join(", ")
        ));
        if table.bordered {
            output.push_str("  stroke: 0.5pt,\n  inset: 4pt,\n");
        }

        for row in &table.rows {
            for i in 0..col_count {
                let cell = match row.cells.get(i) {
                    Some(cell) if !cell.inlines.is_empty() => {
                        let content = Self::transpile_inlines(&cell.inlines);
                        let align = match cell.align {
                            Some(Alignment::Right) => "right",
                            Some(Alignment::Center) => "center",
                            _ => "left",
                        };
                        format!("align({})[{}]", align, content)
                    }
                    _ => format!("v({})", SIGNING_SPACE),
                };
                output.push_str(&format!("  {},\n", cell));
            }
        }

        output.push_str(")\n");
        output
    }

    /// Transpile inline elements
    fn transpile_inlines(inlines: &[Inline]) -> String {
        inlines.iter().map(Self::transpile_inline).collect()
    }

    /// Transpile a single inline element
    fn transpile_inline(inline: &Inline) -> String {
        match inline {
            Inline::Text(text) => format!("#{}", string_literal(text)),
            Inline::Format(format_type, content) => {
                let inner = Self::transpile_inline(content);
                match format_type {
                    FormatType::Bold => format!("#strong[{}]", inner),
                    FormatType::Underline => format!("#underline[{}]", inner),
                }
            }
            Inline::Span(inlines) => Self::transpile_inlines(inlines),
            Inline::Break => "#linebreak()".to_string(),
        }
    }
}

/// Quote text as a Typst string literal
fn string_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    out.push('"');
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pathiram_ast::{ListItem, SectionKind, TableCell, TableRow};

    fn doc_with(kind: SectionKind, block: Block) -> Document {
        let mut doc = Document::new();
        doc.push(Section::new(kind, vec![block]));
        doc
    }

    #[test]
    fn test_page_setup() {
        let typst = Transpiler::transpile(&Document::new());
        assert!(typst.contains("#set page(paper: \"a4\", margin: 10mm)"));
        assert!(typst.contains("font: (\"Latha\", \"Nirmala UI\""));
    }

    #[test]
    fn test_title_metadata() {
        let mut doc = Document::new();
        doc.metadata.title = Some("கிரையப் பத்திரம்".to_string());
        let typst = Transpiler::transpile(&doc);
        assert!(typst.starts_with("#set document(title: \"கிரையப் பத்திரம்\")"));
    }

    #[test]
    fn test_page_break_before_page_starting_sections() {
        let heading = Block::Heading(Heading::new(2, "சொத்து விவரம்"));
        let typst = Transpiler::transpile(&doc_with(SectionKind::PropertyHeading, heading));
        assert!(typst.contains("#pagebreak(weak: true)\n#align(center"));

        let para = Block::Paragraph(Paragraph::text("x"));
        let typst = Transpiler::transpile(&doc_with(SectionKind::Payment, para));
        assert!(!typst.contains("#pagebreak"));
    }

    #[test]
    fn test_paragraph_alignment() {
        let justified = Paragraph::text("a").aligned(Alignment::Justify);
        assert_eq!(
            Transpiler::transpile_paragraph(&justified),
            "#par(justify: true)[#\"a\"]\n"
        );
        let right = Paragraph::text("b").aligned(Alignment::Right);
        assert_eq!(
            Transpiler::transpile_paragraph(&right),
            "#align(right)[#\"b\"]\n"
        );
    }

    #[test]
    fn test_user_text_is_not_markup() {
        let inline = Inline::text("*இல்லை* #x \"q\" \\");
        assert_eq!(
            Transpiler::transpile_inline(&inline),
            "#\"*இல்லை* #x \\\"q\\\" \\\\\""
        );
    }

    #[test]
    fn test_bold() {
        assert_eq!(
            Transpiler::transpile_inline(&Inline::bold("முக்கியம்")),
            "#strong[#\"முக்கியம்\"]"
        );
    }

    #[test]
    fn test_numbered_list() {
        let list = List {
            ordered: true,
            items: vec![
                ListItem {
                    inlines: vec![Inline::text("ஒன்று")],
                },
                ListItem {
                    inlines: vec![Inline::text("இரண்டு")],
                },
            ],
        };
        let typst = Transpiler::transpile_list(&list);
        assert!(typst.starts_with("#enum(numbering: \"1.\", "));
        assert!(typst.contains("[#\"ஒன்று\"],"));
        assert!(typst.contains("[#\"இரண்டு\"],"));
    }

    #[test]
    fn test_signature_grid() {
        let table = Table {
            rows: vec![
                TableRow {
                    cells: vec![
                        TableCell::text("விற்பவர் கையொப்பம்", Alignment::Left),
                        TableCell::text("வாங்குபவர் கையொப்பம்", Alignment::Right),
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
        let typst = Transpiler::transpile_table(&table);
        assert!(typst.contains("columns: (1fr, 1fr)"));
        assert!(typst.contains("align(left)[#\"விற்பவர் கையொப்பம்\"]"));
        assert!(typst.contains("align(right)[#\"வாங்குபவர் கையொப்பம்\"]"));
        assert_eq!(typst.matches("v(1.5cm)").count(), 2);
        assert!(!typst.contains("stroke"));
    }

    #[test]
    fn test_string_literal() {
        assert_eq!(string_literal("hello"), "\"hello\"");
        assert_eq!(string_literal("a\nb"), "\"a\\nb\"");
        assert_eq!(string_literal("#heading"), "\"#heading\"");
    }
}
