//! `[Content_Types].xml` generation

use crate::error::Result;
use crate::opc::PartUri;
use crate::xml;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::collections::BTreeMap;
use std::io::Write;

/// Extension defaults every package carries
const DEFAULTS: &[(&str, &str)] = &[
    ("rels", RELATIONSHIPS),
    ("xml", XML),
    ("png", "image/png"),
    ("jpeg", "image/jpeg"),
    ("jpg", "image/jpeg"),
    ("gif", "image/gif"),
    ("bmp", "image/bmp"),
];

/// Content types of the package: fixed extension defaults plus per-part
/// overrides collected as parts are added.
#[derive(Clone, Debug, Default)]
pub struct ContentTypes {
    overrides: BTreeMap<PartUri, String>,
}

impl ContentTypes {
    /// Create with the standard extension defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the content type of a specific part
    pub fn add_override(&mut self, uri: &PartUri, content_type: &str) {
        self.overrides.insert(uri.clone(), content_type.to_string());
    }

    /// Resolve the content type for a part: overrides first, extension
    /// defaults second
    pub fn get(&self, uri: &PartUri) -> Option<&str> {
        if let Some(content_type) = self.overrides.get(uri) {
            return Some(content_type);
        }
        let ext = uri.extension()?.to_ascii_lowercase();
        DEFAULTS
            .iter()
            .find(|(known, _)| *known == ext)
            .map(|(_, content_type)| *content_type)
    }

    /// Write `[Content_Types].xml`
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml_writer = Writer::new(writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            Some("yes"),
        )))?;

        let mut types = BytesStart::new("Types");
        types.push_attribute(("xmlns", xml::CT));
        xml_writer.write_event(Event::Start(types))?;

        for &(ext, content_type) in DEFAULTS {
            xml::write_empty(
                &mut xml_writer,
                "Default",
                &[("Extension", ext), ("ContentType", content_type)],
            )?;
        }
        for (uri, content_type) in &self.overrides {
            xml::write_empty(
                &mut xml_writer,
                "Override",
                &[("PartName", uri.as_str()), ("ContentType", content_type)],
            )?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("Types")))?;
        Ok(())
    }
}

// Well-known content types
pub const RELATIONSHIPS: &str = "application/vnd.openxmlformats-package.relationships+xml";
pub const XML: &str = "application/xml";
pub const MAIN_DOCUMENT: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
pub const STYLES: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml";
pub const NUMBERING: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml";
pub const CORE_PROPERTIES: &str = "application/vnd.openxmlformats-package.core-properties+xml";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_default() {
        let ct = ContentTypes::new();
        let uri = PartUri::new("/word/media/image1.PNG").unwrap();
        assert_eq!(ct.get(&uri), Some("image/png"));
    }

    #[test]
    fn test_override_wins_over_default() {
        let mut ct = ContentTypes::new();
        let uri = PartUri::new("/word/document.xml").unwrap();
        ct.add_override(&uri, MAIN_DOCUMENT);
        assert_eq!(ct.get(&uri), Some(MAIN_DOCUMENT));
    }

    #[test]
    fn test_unknown_extension() {
        let ct = ContentTypes::new();
        let uri = PartUri::new("/word/odd.bin").unwrap();
        assert_eq!(ct.get(&uri), None);
    }

    #[test]
    fn test_written_xml_lists_defaults_and_overrides() {
        let mut ct = ContentTypes::new();
        ct.add_override(&PartUri::new("/word/document.xml").unwrap(), MAIN_DOCUMENT);

        let mut buf = Vec::new();
        ct.write_to(&mut buf).unwrap();
        let written = String::from_utf8(buf).unwrap();

        assert!(written.contains(r#"<Default Extension="png" ContentType="image/png"/>"#));
        assert!(written.contains(r#"PartName="/word/document.xml""#));
    }
}
