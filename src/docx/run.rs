//! Run element (w:r), write side

use crate::docx::Drawing;
use crate::error::Result;
use quick_xml::events::{BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Write;

/// Run element (w:r)
#[derive(Clone, Debug, Default)]
pub struct Run {
    /// Run content
    pub content: Vec<RunContent>,
}

/// Content within a run
#[derive(Clone, Debug)]
pub enum RunContent {
    /// Text (w:t)
    Text(String),
    /// Inline picture (w:drawing)
    Drawing(Drawing),
}

impl Run {
    /// Create a new run with text
    pub fn new(text: impl Into<String>) -> Self {
        Run {
            content: vec![RunContent::Text(text.into())],
        }
    }

    /// Get all text in this run
    pub fn text(&self) -> String {
        let mut result = String::new();
        for content in &self.content {
            if let RunContent::Text(t) = content {
                result.push_str(t);
            }
        }
        result
    }

    /// Whether this run carries an inline drawing
    pub fn has_drawing(&self) -> bool {
        self.content
            .iter()
            .any(|c| matches!(c, RunContent::Drawing(_)))
    }

    /// Write to XML writer
    pub(crate) fn write_to<W: Write>(&self, writer: &mut Writer<W>) -> Result<()> {
        let start = BytesStart::new("w:r");

        if self.content.is_empty() {
            writer.write_event(Event::Empty(start))?;
            return Ok(());
        }

        writer.write_event(Event::Start(start))?;

        for content in &self.content {
            match content {
                RunContent::Text(text) => {
                    let mut t = BytesStart::new("w:t");
                    // Word drops boundary whitespace unless told otherwise
                    if text != text.trim() {
                        t.push_attribute(("xml:space", "preserve"));
                    }
                    writer.write_event(Event::Start(t))?;
                    writer.write_event(Event::Text(BytesText::new(text)))?;
                    writer.write_event(Event::End(BytesEnd::new("w:t")))?;
                }
                RunContent::Drawing(drawing) => {
                    drawing.write_to(writer)?;
                }
            }
        }

        writer.write_event(Event::End(BytesEnd::new("w:r")))?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn to_xml(run: &Run) -> String {
        let mut buf = Vec::new();
        let mut writer = Writer::new(&mut buf);
        run.write_to(&mut writer).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_run() {
        let run = Run::new("plain text");
        assert_eq!(to_xml(&run), "<w:r><w:t>plain text</w:t></w:r>");
    }

    #[test]
    fn test_text_is_escaped() {
        let run = Run::new("a < b & c");
        assert_eq!(to_xml(&run), "<w:r><w:t>a &lt; b &amp; c</w:t></w:r>");
    }

    #[test]
    fn test_boundary_whitespace_preserved() {
        let run = Run::new(" padded ");
        assert!(to_xml(&run).contains(r#"<w:t xml:space="preserve">"#));
    }

    #[test]
    fn test_empty_run_self_closes() {
        let run = Run::default();
        assert_eq!(to_xml(&run), "<w:r/>");
    }
}
