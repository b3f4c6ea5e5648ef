//! Document body: an append-only sequence of paragraphs

use crate::docx::Paragraph;
use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Document body (w:body)
#[derive(Clone, Debug, Default)]
pub struct Body {
    /// Paragraphs in emission order
    paragraphs: Vec<Paragraph>,
}

impl Body {
    /// Get all paragraphs
    pub fn paragraphs(&self) -> impl Iterator<Item = &Paragraph> {
        self.paragraphs.iter()
    }

    /// Number of paragraphs
    pub fn len(&self) -> usize {
        self.paragraphs.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.paragraphs.is_empty()
    }

    /// Append a paragraph
    pub(crate) fn push(&mut self, para: Paragraph) {
        self.paragraphs.push(para);
    }

    /// Append a paragraph and return a mutable reference to it
    pub(crate) fn push_and_get(&mut self, para: Paragraph) -> &mut Paragraph {
        self.paragraphs.push(para);
        self.paragraphs.last_mut().expect("just added paragraph")
    }

    /// Write body to XML writer
    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        writer.write_event(Event::Start(BytesStart::new("w:body")))?;

        for para in &self.paragraphs {
            para.write_to(writer)?;
        }

        // US Letter with one-inch margins
        writer.write_event(Event::Start(BytesStart::new("w:sectPr")))?;
        xml::write_empty(writer, "w:pgSz", &[("w:w", "12240"), ("w:h", "15840")])?;
        xml::write_empty(
            writer,
            "w:pgMar",
            &[
                ("w:top", "1440"),
                ("w:right", "1440"),
                ("w:bottom", "1440"),
                ("w:left", "1440"),
                ("w:header", "720"),
                ("w:footer", "720"),
                ("w:gutter", "0"),
            ],
        )?;
        writer.write_event(Event::End(BytesEnd::new("w:sectPr")))?;

        writer.write_event(Event::End(BytesEnd::new("w:body")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_body_has_section_properties() {
        let body = Body::default();
        let mut buf = Vec::new();
        let mut writer = Writer::new(&mut buf);
        body.write_to(&mut writer).unwrap();

        let xml = String::from_utf8(buf).unwrap();
        assert!(xml.starts_with("<w:body>"));
        assert!(xml.contains("<w:sectPr>"));
        assert!(xml.ends_with("</w:body>"));
    }

    #[test]
    fn test_paragraph_order_preserved() {
        let mut body = Body::default();
        body.push(Paragraph::new("first"));
        body.push(Paragraph::new("second"));

        let mut buf = Vec::new();
        let mut writer = Writer::new(&mut buf);
        body.write_to(&mut writer).unwrap();

        let xml = String::from_utf8(buf).unwrap();
        assert!(xml.find("first").unwrap() < xml.find("second").unwrap());
    }
}
