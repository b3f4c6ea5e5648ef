//! Numbering definitions (numbering.xml)
//!
//! A single bullet list definition backing the ListBullet style.

use crate::error::{Error, Result};
use crate::xml;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;

/// Numbering instance referenced by bulleted paragraphs
pub(crate) const BULLET_NUM_ID: u32 = 1;

/// Bullet glyph from the Symbol font
const BULLET_GLYPH: &str = "\u{F0B7}";

/// Serialize the numbering part
pub(crate) fn numbering_xml() -> Result<String> {
    let mut buffer = Vec::new();
    let mut writer = Writer::new(&mut buffer);

    writer.write_event(Event::Decl(BytesDecl::new(
        "1.0",
        Some("UTF-8"),
        Some("yes"),
    )))?;

    let mut root = BytesStart::new("w:numbering");
    root.push_attribute(("xmlns:w", xml::W));
    writer.write_event(Event::Start(root))?;

    // Abstract definition: one bullet level
    let mut abstract_num = BytesStart::new("w:abstractNum");
    abstract_num.push_attribute(("w:abstractNumId", "0"));
    writer.write_event(Event::Start(abstract_num))?;
    xml::write_w_val(&mut writer, "w:multiLevelType", "singleLevel")?;

    let mut lvl = BytesStart::new("w:lvl");
    lvl.push_attribute(("w:ilvl", "0"));
    writer.write_event(Event::Start(lvl))?;
    xml::write_w_val(&mut writer, "w:start", "1")?;
    xml::write_w_val(&mut writer, "w:numFmt", "bullet")?;
    xml::write_w_val(&mut writer, "w:lvlText", BULLET_GLYPH)?;
    xml::write_w_val(&mut writer, "w:lvlJc", "left")?;
    writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
    xml::write_empty(
        &mut writer,
        "w:ind",
        &[("w:left", "720"), ("w:hanging", "360")],
    )?;
    writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
    writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
    xml::write_empty(
        &mut writer,
        "w:rFonts",
        &[
            ("w:ascii", "Symbol"),
            ("w:hAnsi", "Symbol"),
            ("w:hint", "default"),
        ],
    )?;
    writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;
    writer.write_event(Event::End(BytesEnd::new("w:lvl")))?;

    writer.write_event(Event::End(BytesEnd::new("w:abstractNum")))?;

    // Concrete instance pointing at the abstract definition
    let mut num = BytesStart::new("w:num");
    num.push_attribute(("w:numId", BULLET_NUM_ID.to_string().as_str()));
    writer.write_event(Event::Start(num))?;
    xml::write_w_val(&mut writer, "w:abstractNumId", "0")?;
    writer.write_event(Event::End(BytesEnd::new("w:num")))?;

    writer.write_event(Event::End(BytesEnd::new("w:numbering")))?;

    String::from_utf8(buffer).map_err(|e| Error::InvalidDocument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numbering_shape() {
        let xml = numbering_xml().unwrap();
        assert!(xml.contains(r#"<w:abstractNum w:abstractNumId="0">"#));
        assert!(xml.contains(r#"<w:numFmt w:val="bullet"/>"#));
        assert!(xml.contains(r#"<w:num w:numId="1">"#));
        assert!(xml.contains(r#"<w:abstractNumId w:val="0"/>"#));
    }
}
