//! Reading WordprocessingML parts back
//!
//! Parses `word/document.xml` (and header or footer parts, which share the
//! paragraph grammar) into paragraphs and tables. Only what the exporter
//! writes is recognised: alignment, paragraph style, page breaks, bold runs,
//! tabs and simple fields.

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use pathiram_ast::Alignment;

use crate::error::{OoxmlError, Result};

/// A parsed Word part
#[derive(Debug, Clone, Default)]
pub struct WordDocument {
    /// Top-level blocks in document order
    pub blocks: Vec<WordBlock>,
}

/// Block-level elements
#[derive(Debug, Clone)]
pub enum WordBlock {
    Paragraph(WordParagraph),
    Table(WordTable),
}

/// A paragraph with the properties pathiram cares about
#[derive(Debug, Clone, Default)]
pub struct WordParagraph {
    /// Style ID (references styles.xml)
    pub style_id: Option<String>,
    /// `w:jc`, if present
    pub alignment: Option<Alignment>,
    /// Opens a new page, via `w:pageBreakBefore` or a preceding page break
    pub page_break_before: bool,
    /// Text runs
    pub runs: Vec<WordRun>,
    /// Instructions of simple fields (`PAGE`, `NUMPAGES`)
    pub fields: Vec<String>,
}

#[derive(Debug, Clone, Default)]
pub struct WordRun {
    pub text: String,
    pub bold: bool,
}

/// A table, reduced to the plain text of each cell
#[derive(Debug, Clone, Default)]
pub struct WordTable {
    pub rows: Vec<Vec<String>>,
}

impl WordParagraph {
    pub fn text(&self) -> String {
        self.runs.iter().map(|r| r.text.as_str()).collect()
    }
}

impl WordDocument {
    /// Parse a document, header or footer part from XML bytes
    pub fn parse(xml: &[u8]) -> Result<Self> {
        let mut reader = Reader::from_reader(xml);
        // Runs carry significant spaces
        reader.config_mut().trim_text(false);

        let mut blocks = Vec::new();
        let mut buf = Vec::new();

        let mut current_para: Option<WordParagraph> = None;
        let mut current_run: Option<WordRun> = None;
        let mut current_table: Option<TableBuilder> = None;
        let mut in_text_element = false;
        let mut pending_page_break = false;

        loop {
            match reader.read_event_into(&mut buf) {
                Ok(Event::Start(ref e)) => match e.local_name().as_ref() {
                    b"p" => {
                        current_para = Some(WordParagraph {
                            page_break_before: std::mem::take(&mut pending_page_break),
                            ..Default::default()
                        });
                    }
                    b"r" if current_para.is_some() => current_run = Some(WordRun::default()),
                    b"t" if current_run.is_some() => in_text_element = true,
                    b"fldSimple" => {
                        if let (Some(para), Some(instr)) =
                            (current_para.as_mut(), get_attr(e, b"w:instr"))
                        {
                            para.fields.push(field_name(&instr));
                        }
                    }
                    b"tbl" => current_table = Some(TableBuilder::default()),
                    b"tr" => {
                        if let Some(table) = current_table.as_mut() {
                            table.current_row = Some(Vec::new());
                        }
                    }
                    b"tc" => {
                        if let Some(table) = current_table.as_mut() {
                            table.current_cell = Some(Vec::new());
                        }
                    }
                    _ => apply_property(e, &mut current_para, &mut current_run),
                },
                Ok(Event::Empty(ref e)) => match e.local_name().as_ref() {
                    b"p" => {
                        let para = WordParagraph {
                            page_break_before: std::mem::take(&mut pending_page_break),
                            ..Default::default()
                        };
                        finish_paragraph(para, &mut current_table, &mut blocks);
                    }
                    b"br" => {
                        let is_page = get_attr(e, b"w:type").is_some_and(|t| t == "page");
                        if is_page {
                            pending_page_break = true;
                        } else if let Some(run) = current_run.as_mut() {
                            run.text.push('\n');
                        }
                    }
                    b"tab" => {
                        if let Some(run) = current_run.as_mut() {
                            run.text.push('\t');
                        }
                    }
                    b"fldSimple" => {
                        if let (Some(para), Some(instr)) =
                            (current_para.as_mut(), get_attr(e, b"w:instr"))
                        {
                            para.fields.push(field_name(&instr));
                        }
                    }
                    _ => apply_property(e, &mut current_para, &mut current_run),
                },
                Ok(Event::End(ref e)) => match e.local_name().as_ref() {
                    b"t" => in_text_element = false,
                    b"r" => {
                        if let (Some(run), Some(para)) = (current_run.take(), current_para.as_mut())
                        {
                            if !run.text.is_empty() {
                                para.runs.push(run);
                            }
                        }
                    }
                    b"p" => {
                        if let Some(para) = current_para.take() {
                            finish_paragraph(para, &mut current_table, &mut blocks);
                        }
                    }
                    b"tc" => {
                        if let Some(table) = current_table.as_mut() {
                            if let (Some(cell), Some(row)) =
                                (table.current_cell.take(), table.current_row.as_mut())
                            {
                                row.push(cell.join("\n"));
                            }
                        }
                    }
                    b"tr" => {
                        if let Some(table) = current_table.as_mut() {
                            if let Some(row) = table.current_row.take() {
                                table.rows.push(row);
                            }
                        }
                    }
                    b"tbl" => {
                        if let Some(table) = current_table.take() {
                            blocks.push(WordBlock::Table(WordTable { rows: table.rows }));
                        }
                    }
                    _ => {}
                },
                Ok(Event::Text(ref e)) => {
                    if in_text_element {
                        if let Some(run) = current_run.as_mut() {
                            let text = e.unescape().unwrap_or_default();
                            run.text.push_str(&text);
                        }
                    }
                }
                Ok(Event::Eof) => break,
                Err(e) => return Err(OoxmlError::Xml(e)),
                _ => {}
            }
            buf.clear();
        }

        Ok(WordDocument { blocks })
    }

    /// Top-level paragraphs, skipping tables
    pub fn paragraphs(&self) -> impl Iterator<Item = &WordParagraph> {
        self.blocks.iter().filter_map(|block| match block {
            WordBlock::Paragraph(p) => Some(p),
            WordBlock::Table(_) => None,
        })
    }

    pub fn tables(&self) -> impl Iterator<Item = &WordTable> {
        self.blocks.iter().filter_map(|block| match block {
            WordBlock::Table(t) => Some(t),
            WordBlock::Paragraph(_) => None,
        })
    }

    /// Text of the first `Title` paragraph
    pub fn title(&self) -> Option<String> {
        self.paragraphs()
            .find(|p| p.style_id.as_deref() == Some("Title"))
            .map(WordParagraph::text)
    }

    /// Paragraphs that open a new page
    pub fn page_breaks(&self) -> impl Iterator<Item = &WordParagraph> {
        self.paragraphs().filter(|p| p.page_break_before)
    }

    /// Plain text, one line per paragraph or table cell
    pub fn plain_text(&self) -> String {
        let mut lines = Vec::new();
        for block in &self.blocks {
            match block {
                WordBlock::Paragraph(p) => lines.push(p.text()),
                WordBlock::Table(t) => lines.extend(
                    t.rows
                        .iter()
                        .flatten()
                        .filter(|cell| !cell.is_empty())
                        .cloned(),
                ),
            }
        }
        lines.join("\n")
    }
}

#[derive(Default)]
struct TableBuilder {
    rows: Vec<Vec<String>>,
    current_row: Option<Vec<String>>,
    current_cell: Option<Vec<String>>,
}

fn finish_paragraph(
    para: WordParagraph,
    current_table: &mut Option<TableBuilder>,
    blocks: &mut Vec<WordBlock>,
) {
    match current_table.as_mut().and_then(|t| t.current_cell.as_mut()) {
        Some(cell) => cell.push(para.text()),
        None => blocks.push(WordBlock::Paragraph(para)),
    }
}

/// Paragraph and run properties, whether written as start or empty tags
fn apply_property(
    e: &BytesStart,
    current_para: &mut Option<WordParagraph>,
    current_run: &mut Option<WordRun>,
) {
    match e.local_name().as_ref() {
        b"b" => {
            if let Some(run) = current_run.as_mut() {
                run.bold = is_on(e);
            }
        }
        b"pStyle" if current_run.is_none() => {
            if let Some(para) = current_para.as_mut() {
                para.style_id = get_attr(e, b"w:val");
            }
        }
        b"jc" if current_run.is_none() => {
            if let Some(para) = current_para.as_mut() {
                para.alignment = get_attr(e, b"w:val").and_then(|v| parse_jc(&v));
            }
        }
        b"pageBreakBefore" if current_run.is_none() => {
            if let Some(para) = current_para.as_mut() {
                para.page_break_before |= is_on(e);
            }
        }
        _ => {}
    }
}

/// Toggle properties are on unless `w:val` says otherwise
fn is_on(e: &BytesStart) -> bool {
    get_attr(e, b"w:val")
        .map(|v| v != "0" && v != "false" && v != "off")
        .unwrap_or(true)
}

fn parse_jc(value: &str) -> Option<Alignment> {
    match value {
        "left" | "start" => Some(Alignment::Left),
        "center" => Some(Alignment::Center),
        "right" | "end" => Some(Alignment::Right),
        "both" | "distribute" => Some(Alignment::Justify),
        _ => None,
    }
}

/// Field name from an instruction such as ` PAGE \* MERGEFORMAT `
fn field_name(instr: &str) -> String {
    instr.split_whitespace().next().unwrap_or_default().to_string()
}

fn get_attr(e: &BytesStart, name: &[u8]) -> Option<String> {
    e.attributes()
        .filter_map(|a| a.ok())
        .find(|a| a.key.as_ref() == name)
        .and_then(|a| a.unescape_value().ok().map(|v| v.into_owned()))
}
