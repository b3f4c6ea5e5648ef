//! Paragraph element (w:p), write side

use crate::docx::Run;
use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// Paragraph element (w:p)
#[derive(Clone, Debug, Default)]
pub struct Paragraph {
    /// Paragraph properties
    pub properties: Option<ParagraphProperties>,
    /// Paragraph content (runs and fields)
    pub content: Vec<ParagraphContent>,
}

/// Content within a paragraph
#[derive(Clone, Debug)]
pub enum ParagraphContent {
    /// Text run
    Run(Run),
    /// One-shot field code (w:fldSimple), evaluated by the consuming application
    SimpleField { instruction: String },
}

/// Paragraph properties (w:pPr)
#[derive(Clone, Debug, Default)]
pub struct ParagraphProperties {
    /// Style ID
    pub style: Option<String>,
    /// Numbering reference
    pub num_id: Option<u32>,
    pub num_level: Option<u32>,
    /// Left indent in twentieths of a point
    pub indent_left: Option<u32>,
}

impl Paragraph {
    /// Create a new paragraph with text
    pub fn new(text: impl Into<String>) -> Self {
        Paragraph {
            content: vec![ParagraphContent::Run(Run::new(text))],
            ..Default::default()
        }
    }

    /// Get all text in this paragraph
    pub fn text(&self) -> String {
        let mut result = String::new();
        for content in &self.content {
            if let ParagraphContent::Run(run) = content {
                result.push_str(&run.text());
            }
        }
        result
    }

    /// Get style ID
    pub fn style(&self) -> Option<&str> {
        self.properties.as_ref()?.style.as_deref()
    }

    /// Set style
    pub fn set_style(&mut self, style: impl Into<String>) {
        self.properties.get_or_insert_with(Default::default).style = Some(style.into());
    }

    /// Reference a numbering definition (num id + level)
    pub fn set_numbering(&mut self, num_id: u32, level: u32) {
        let props = self.properties.get_or_insert_with(Default::default);
        props.num_id = Some(num_id);
        props.num_level = Some(level);
    }

    /// Set the left indent, in twentieths of a point
    pub fn set_left_indent_twips(&mut self, twips: u32) {
        self.properties
            .get_or_insert_with(Default::default)
            .indent_left = Some(twips);
    }

    /// Get the left indent, if any
    pub fn left_indent_twips(&self) -> Option<u32> {
        self.properties.as_ref()?.indent_left
    }

    /// Whether any run in this paragraph carries an inline drawing
    pub fn has_drawing(&self) -> bool {
        self.content.iter().any(|c| {
            matches!(c, ParagraphContent::Run(run) if run.has_drawing())
        })
    }

    /// Whether this paragraph is a simple-field placeholder
    pub fn is_simple_field(&self) -> bool {
        self.content
            .iter()
            .any(|c| matches!(c, ParagraphContent::SimpleField { .. }))
    }

    /// Write to XML writer
    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let start = BytesStart::new("w:p");

        if self.properties.is_none() && self.content.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;

        if let Some(props) = &self.properties {
            props.write_to(writer)?;
        }

        for content in &self.content {
            content.write_to(writer)?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:p")))?;
        Ok(())
    }
}

impl ParagraphContent {
    /// Write to XML writer
    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        match self {
            ParagraphContent::Run(run) => run.write_to(writer),
            ParagraphContent::SimpleField { instruction } => {
                let mut elem = BytesStart::new("w:fldSimple");
                elem.push_attribute(("w:instr", instruction.as_str()));
                writer.write_event(Event::Empty(elem))?;
                Ok(())
            }
        }
    }
}

impl ParagraphProperties {
    /// Write to XML writer (w:pPr)
    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let has_content = self.style.is_some()
            || self.num_id.is_some()
            || self.num_level.is_some()
            || self.indent_left.is_some();

        if !has_content {
            return Ok(());
        }

        writer.write_event(Event::Start(BytesStart::new("w:pPr")))?;

        if let Some(style) = &self.style {
            xml::write_w_val(writer, "w:pStyle", style)?;
        }

        // Schema order within pPr: pStyle, numPr, ind
        if self.num_id.is_some() || self.num_level.is_some() {
            writer.write_event(Event::Start(BytesStart::new("w:numPr")))?;
            if let Some(level) = self.num_level {
                xml::write_w_val(writer, "w:ilvl", &level.to_string())?;
            }
            if let Some(num_id) = self.num_id {
                xml::write_w_val(writer, "w:numId", &num_id.to_string())?;
            }
            writer.write_event(Event::End(BytesEnd::new("w:numPr")))?;
        }

        if let Some(indent) = self.indent_left {
            xml::write_empty(writer, "w:ind", &[("w:left", indent.to_string().as_str())])?;
        }

        writer.write_event(Event::End(BytesEnd::new("w:pPr")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_xml(para: &Paragraph) -> String {
        let mut buf = Vec::new();
        let mut writer = Writer::new(&mut buf);
        para.write_to(&mut writer).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_plain_paragraph() {
        let para = Paragraph::new("Hello");
        assert_eq!(to_xml(&para), "<w:p><w:r><w:t>Hello</w:t></w:r></w:p>");
    }

    #[test]
    fn test_styled_bullet_with_indent() {
        let mut para = Paragraph::new("Point");
        para.set_style("ListBullet");
        para.set_numbering(1, 0);
        para.set_left_indent_twips(720);

        let xml = to_xml(&para);
        assert!(xml.contains(r#"<w:pStyle w:val="ListBullet"/>"#));
        assert!(xml.contains(r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr>"#));
        assert!(xml.contains(r#"<w:ind w:left="720"/>"#));

        // pStyle must precede numPr, numPr must precede ind
        let style_pos = xml.find("w:pStyle").unwrap();
        let num_pos = xml.find("w:numPr").unwrap();
        let ind_pos = xml.find("w:ind").unwrap();
        assert!(style_pos < num_pos && num_pos < ind_pos);
    }

    #[test]
    fn test_field_instruction_escaped() {
        let mut para = Paragraph::default();
        para.content.push(ParagraphContent::SimpleField {
            instruction: r#"TOC \o "1-3" \h \z \u"#.to_string(),
        });

        let xml = to_xml(&para);
        assert!(xml.contains(r#"w:instr="TOC \o &quot;1-3&quot; \h \z \u""#));
        assert!(para.is_simple_field());
    }

    #[test]
    fn test_empty_paragraph_self_closes() {
        let para = Paragraph::default();
        assert_eq!(to_xml(&para), "<w:p/>");
    }
}
