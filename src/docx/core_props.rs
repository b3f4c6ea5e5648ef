//! Core properties part (docProps/core.xml)

use crate::error::{Error, Result};
use crate::xml;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;

/// Serialize the core properties part with an optional document title
pub(crate) fn core_xml(title: Option<&str>) -> Result<String> {
    let mut buffer = Vec::new();
    let mut writer = Writer::new(&mut buffer);

    writer.write_event(Event::Decl(BytesDecl::new(
        "1.0",
        Some("UTF-8"),
        Some("yes"),
    )))?;

    let mut root = BytesStart::new("cp:coreProperties");
    root.push_attribute(("xmlns:cp", xml::CP));
    root.push_attribute(("xmlns:dc", xml::DC));
    root.push_attribute(("xmlns:dcterms", xml::DCTERMS));
    writer.write_event(Event::Start(root))?;

    if let Some(title) = title {
        writer.write_event(Event::Start(BytesStart::new("dc:title")))?;
        writer.write_event(Event::Text(BytesText::new(title)))?;
        writer.write_event(Event::End(BytesEnd::new("dc:title")))?;
    }

    writer.write_event(Event::End(BytesEnd::new("cp:coreProperties")))?;

    String::from_utf8(buffer).map_err(|e| Error::InvalidDocument(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_title_escaped() {
        let xml = core_xml(Some("A & B")).unwrap();
        assert!(xml.contains("<dc:title>A &amp; B</dc:title>"));
    }

    #[test]
    fn test_no_title() {
        let xml = core_xml(None).unwrap();
        assert!(!xml.contains("dc:title"));
        assert!(xml.contains("cp:coreProperties"));
    }
}
