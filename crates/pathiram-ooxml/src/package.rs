//! Fixed package parts
//!
//! Everything in a pathiram DOCX except `word/document.xml`: content types,
//! package relationships, styles, settings, running header and footer, and
//! the document properties.

use crate::relationships::Relationships;
use crate::xml::escape_xml;

pub const WORD_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const REL_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

/// A4 portrait in twips
pub const PAGE_WIDTH: u32 = 11906;
pub const PAGE_HEIGHT: u32 = 16838;
/// One inch on every side
pub const PAGE_MARGIN: u32 = 1440;
/// Usable text width between the margins
pub const TEXT_WIDTH: u32 = PAGE_WIDTH - 2 * PAGE_MARGIN;

const XML_DECL: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

pub fn content_types_xml() -> String {
    let mut xml = String::from(XML_DECL);
    xml.push('\n');
    xml.push_str(
        r#"<Types xmlns="http://schemas.openxmlformats.org/package/2006/content-types">"#,
    );
    xml.push('\n');
    xml.push_str(r#"  <Default Extension="rels" ContentType="application/vnd.openxmlformats-package.relationships+xml"/>"#);
    xml.push('\n');
    xml.push_str(r#"  <Default Extension="xml" ContentType="application/xml"/>"#);
    xml.push('\n');
    let overrides = [
        (
            "/word/document.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml",
        ),
        (
            "/word/styles.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml",
        ),
        (
            "/word/settings.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml",
        ),
        (
            "/word/header1.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml",
        ),
        (
            "/word/footer1.xml",
            "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml",
        ),
        (
            "/docProps/core.xml",
            "application/vnd.openxmlformats-package.core-properties+xml",
        ),
        (
            "/docProps/app.xml",
            "application/vnd.openxmlformats-officedocument.extended-properties+xml",
        ),
    ];
    for (part, content_type) in overrides {
        xml.push_str(&format!(
            "  <Override PartName=\"{}\" ContentType=\"{}\"/>\n",
            part, content_type
        ));
    }
    xml.push_str("</Types>");
    xml
}

/// `_rels/.rels`
pub fn package_rels() -> Relationships {
    let mut rels = Relationships::new();
    rels.add("word/document.xml", Relationships::TYPE_OFFICE_DOCUMENT);
    rels.add("docProps/core.xml", Relationships::TYPE_CORE_PROPERTIES);
    rels.add("docProps/app.xml", Relationships::TYPE_EXTENDED_PROPERTIES);
    rels
}

/// Run properties selecting the Tamil font for every script slot
pub fn font_rpr(font: &str) -> String {
    let font = escape_xml(font);
    format!(
        "<w:rFonts w:ascii=\"{0}\" w:hAnsi=\"{0}\" w:eastAsia=\"{0}\" w:cs=\"{0}\"/>",
        font
    )
}

pub fn styles_xml(font: &str) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push('\n');
    xml.push_str(&format!("<w:styles xmlns:w=\"{}\">\n", WORD_NS));
    xml.push_str("<w:docDefaults>\n<w:rPrDefault><w:rPr>");
    xml.push_str(&font_rpr(font));
    xml.push_str("<w:sz w:val=\"24\"/><w:szCs w:val=\"24\"/><w:lang w:val=\"ta-IN\" w:bidi=\"ta-IN\"/>");
    xml.push_str("</w:rPr></w:rPrDefault>\n");
    xml.push_str("<w:pPrDefault><w:pPr><w:spacing w:after=\"160\" w:line=\"360\" w:lineRule=\"auto\"/></w:pPr></w:pPrDefault>\n");
    xml.push_str("</w:docDefaults>\n");
    xml.push_str(concat!(
        "<w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\">",
        "<w:name w:val=\"Normal\"/><w:qFormat/></w:style>\n",
        "<w:style w:type=\"paragraph\" w:styleId=\"Title\">",
        "<w:name w:val=\"Title\"/><w:basedOn w:val=\"Normal\"/><w:qFormat/>",
        "<w:pPr><w:jc w:val=\"center\"/><w:spacing w:after=\"240\"/></w:pPr>",
        "<w:rPr><w:b/><w:bCs/><w:sz w:val=\"32\"/><w:szCs w:val=\"32\"/></w:rPr></w:style>\n",
        "<w:style w:type=\"paragraph\" w:styleId=\"Heading2\">",
        "<w:name w:val=\"heading 2\"/><w:basedOn w:val=\"Normal\"/><w:qFormat/>",
        "<w:pPr><w:jc w:val=\"center\"/><w:spacing w:before=\"240\" w:after=\"240\"/></w:pPr>",
        "<w:rPr><w:b/><w:bCs/><w:sz w:val=\"28\"/><w:szCs w:val=\"28\"/></w:rPr></w:style>\n",
        "<w:style w:type=\"paragraph\" w:styleId=\"Header\">",
        "<w:name w:val=\"header\"/><w:basedOn w:val=\"Normal\"/></w:style>\n",
        "<w:style w:type=\"paragraph\" w:styleId=\"Footer\">",
        "<w:name w:val=\"footer\"/><w:basedOn w:val=\"Normal\"/></w:style>\n",
        "<w:style w:type=\"table\" w:default=\"1\" w:styleId=\"TableNormal\">",
        "<w:name w:val=\"Normal Table\"/><w:tblPr><w:tblCellMar>",
        "<w:left w:w=\"108\" w:type=\"dxa\"/><w:right w:w=\"108\" w:type=\"dxa\"/>",
        "</w:tblCellMar></w:tblPr></w:style>\n",
    ));
    xml.push_str("</w:styles>");
    xml
}

pub fn settings_xml() -> String {
    let mut xml = String::from(XML_DECL);
    xml.push('\n');
    xml.push_str(&format!("<w:settings xmlns:w=\"{}\">\n", WORD_NS));
    xml.push_str("<w:defaultTabStop w:val=\"720\"/>\n");
    xml.push_str("<w:characterSpacingControl w:val=\"doNotCompress\"/>\n");
    xml.push_str("<w:compat><w:compatSetting w:name=\"compatibilityMode\" w:uri=\"http://schemas.microsoft.com/office/word\" w:val=\"15\"/></w:compat>\n");
    xml.push_str("</w:settings>");
    xml
}

/// Right-aligned running header carrying the title
pub fn header_xml(title: &str, font: &str) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push('\n');
    xml.push_str(&format!(
        "<w:hdr xmlns:w=\"{}\" xmlns:r=\"{}\">\n",
        WORD_NS, REL_NS
    ));
    xml.push_str("<w:p><w:pPr><w:pStyle w:val=\"Header\"/><w:jc w:val=\"right\"/></w:pPr>");
    xml.push_str(&format!(
        "<w:r><w:rPr>{}</w:rPr><w:t xml:space=\"preserve\">{}</w:t></w:r>",
        font_rpr(font),
        escape_xml(title)
    ));
    xml.push_str("</w:p>\n</w:hdr>");
    xml
}

/// Centred "page X / Y" footer built from PAGE and NUMPAGES fields
pub fn footer_xml(font: &str) -> String {
    let rpr = format!("<w:rPr>{}</w:rPr>", font_rpr(font));
    let field = |instr: &str| {
        format!(
            "<w:fldSimple w:instr=\" {} \\* MERGEFORMAT \"><w:r>{}<w:t>1</w:t></w:r></w:fldSimple>",
            instr, rpr
        )
    };

    let mut xml = String::from(XML_DECL);
    xml.push('\n');
    xml.push_str(&format!(
        "<w:ftr xmlns:w=\"{}\" xmlns:r=\"{}\">\n",
        WORD_NS, REL_NS
    ));
    xml.push_str("<w:p><w:pPr><w:pStyle w:val=\"Footer\"/><w:jc w:val=\"center\"/></w:pPr>");
    xml.push_str(&field("PAGE"));
    xml.push_str(&format!(
        "<w:r>{}<w:t xml:space=\"preserve\"> / </w:t></w:r>",
        rpr
    ));
    xml.push_str(&field("NUMPAGES"));
    xml.push_str("</w:p>\n</w:ftr>");
    xml
}

pub fn core_xml(title: &str, subject: Option<&str>) -> String {
    let mut xml = String::from(XML_DECL);
    xml.push('\n');
    xml.push_str(concat!(
        "<cp:coreProperties ",
        "xmlns:cp=\"http://schemas.openxmlformats.org/package/2006/metadata/core-properties\" ",
        "xmlns:dc=\"http://purl.org/dc/elements/1.1/\" ",
        "xmlns:dcterms=\"http://purl.org/dc/terms/\" ",
        "xmlns:xsi=\"http://www.w3.org/2001/XMLSchema-instance\">\n"
    ));
    xml.push_str(&format!("<dc:title>{}</dc:title>\n", escape_xml(title)));
    if let Some(subject) = subject {
        xml.push_str(&format!("<dc:subject>{}</dc:subject>\n", escape_xml(subject)));
    }
    xml.push_str("<dc:creator>pathiram</dc:creator>\n");
    xml.push_str("<dc:language>ta-IN</dc:language>\n");
    xml.push_str("</cp:coreProperties>");
    xml
}

pub fn app_xml() -> String {
    let mut xml = String::from(XML_DECL);
    xml.push('\n');
    xml.push_str(concat!(
        "<Properties ",
        "xmlns=\"http://schemas.openxmlformats.org/officeDocument/2006/extended-properties\">\n",
        "<Application>pathiram</Application>\n",
        "</Properties>"
    ));
    xml
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_types_cover_every_part() {
        let xml = content_types_xml();
        for part in [
            "/word/document.xml",
            "/word/styles.xml",
            "/word/settings.xml",
            "/word/header1.xml",
            "/word/footer1.xml",
            "/docProps/core.xml",
            "/docProps/app.xml",
        ] {
            assert!(xml.contains(part), "missing {part}");
        }
    }

    #[test]
    fn test_header_is_right_aligned_title() {
        let xml = header_xml("கிரையப் பத்திரம்", "Latha");
        assert!(xml.contains("<w:jc w:val=\"right\"/>"));
        assert!(xml.contains("கிரையப் பத்திரம்"));
        assert!(xml.contains("w:ascii=\"Latha\""));
    }

    #[test]
    fn test_footer_has_page_fields() {
        let xml = footer_xml("Latha");
        assert!(xml.contains("<w:jc w:val=\"center\"/>"));
        assert!(xml.contains("w:instr=\" PAGE "));
        assert!(xml.contains("w:instr=\" NUMPAGES "));
        assert!(xml.contains(" / "));
    }

    #[test]
    fn test_text_width() {
        assert_eq!(TEXT_WIDTH, 9026);
    }
}
