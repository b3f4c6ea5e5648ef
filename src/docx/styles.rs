//! Style definitions (styles.xml)
//!
//! Only the styles the converter emits: Normal, Heading1-9 and ListBullet.

use crate::docx::numbering::BULLET_NUM_ID;
use crate::error::{Error, Result};
use crate::xml;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Heading font sizes in half-points, level 1 through 9
const HEADING_SIZES: [u32; 9] = [32, 26, 24, 22, 22, 20, 20, 20, 20];

/// Serialize the styles part
pub(crate) fn styles_xml() -> Result<String> {
    let mut buffer = Vec::new();
    let mut writer = Writer::new(&mut buffer);

    writer.write_event(Event::Decl(BytesDecl::new(
        "1.0",
        Some("UTF-8"),
        Some("yes"),
    )))?;

    let mut root = BytesStart::new("w:styles");
    root.push_attribute(("xmlns:w", xml::W));
    writer.write_event(Event::Start(root))?;

    write_normal(&mut writer)?;
    for level in 1..=9u32 {
        write_heading(&mut writer, level)?;
    }
    write_list_bullet(&mut writer)?;

    writer.write_event(Event::End(BytesEnd::new("w:styles")))?;

    String::from_utf8(buffer).map_err(|e| Error::InvalidDocument(e.to_string()))
}

fn style_start(style_id: &str, default: bool) -> BytesStart<'static> {
    let mut elem = BytesStart::new("w:style");
    elem.push_attribute(("w:type", "paragraph"));
    if default {
        elem.push_attribute(("w:default", "1"));
    }
    elem.push_attribute(("w:styleId", style_id));
    elem
}

fn write_normal<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    writer.write_event(Event::Start(style_start("Normal", true)))?;
    xml::write_w_val(writer, "w:name", "Normal")?;
    writer.write_event(Event::End(BytesEnd::new("w:style")))?;
    Ok(())
}

fn write_heading<W: Write>(writer: &mut Writer<W>, level: u32) -> Result<()> {
    writer.write_event(Event::Start(style_start(&format!("Heading{}", level), false)))?;
    xml::write_w_val(writer, "w:name", &format!("heading {}", level))?;
    xml::write_w_val(writer, "w:basedOn", "Normal")?;
    xml::write_w_val(writer, "w:next", "Normal")?;

    writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
    xml::write_empty(writer, "w:keepNext", &[])?;
    xml::write_empty(writer, "w:spacing", &[("w:before", "240"), ("w:after", "60")])?;
    xml::write_w_val(writer, "w:outlineLvl", &(level - 1).to_string())?;
    writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;

    writer.write_event(Event::Start(BytesStart::new("w:rPr")))?;
    xml::write_empty(writer, "w:b", &[])?;
    xml::write_w_val(
        writer,
        "w:sz",
        &HEADING_SIZES[(level - 1) as usize].to_string(),
    )?;
    writer.write_event(Event::End(BytesEnd::new("w:rPr")))?;

    writer.write_event(Event::End(BytesEnd::new("w:style")))?;
    Ok(())
}

fn write_list_bullet<W: Write>(writer: &mut Writer<W>) -> Result<()> {
    writer.write_event(Event::Start(style_start("ListBullet", false)))?;
    xml::write_w_val(writer, "w:name", "List Bullet")?;
    xml::write_w_val(writer, "w:basedOn", "Normal")?;

    writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;
    writer.write_event(Event::Start(BytesStart::new("w:numPr")))?;
    xml::write_w_val(writer, "w:ilvl", "0")?;
    xml::write_w_val(writer, "w:numId", &BULLET_NUM_ID.to_string())?;
    writer.write_event(Event::End(BytesEnd::new("w:numPr")))?;
    writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;

    writer.write_event(Event::End(BytesEnd::new("w:style")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_styles_present() {
        let xml = styles_xml().unwrap();
        assert!(xml.contains(r#"w:styleId="Normal""#));
        for level in 1..=9 {
            assert!(xml.contains(&format!(r#"w:styleId="Heading{}""#, level)));
        }
        assert!(xml.contains(r#"w:styleId="ListBullet""#));
    }

    #[test]
    fn test_heading_outline_levels() {
        let xml = styles_xml().unwrap();
        // outline levels are zero-based
        assert!(xml.contains(r#"<w:outlineLvl w:val="0"/>"#));
        assert!(xml.contains(r#"<w:outlineLvl w:val="8"/>"#));
    }
}
