//! `.rels` file generation

use crate::error::Result;
use crate::xml;
use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, Event};
use quick_xml::Writer;
use std::io::Write;

/// An ordered set of relationships with sequential `rIdN` ids
#[derive(Clone, Debug, Default)]
pub struct Relationships {
    items: Vec<Relationship>,
}

/// One relationship entry
#[derive(Clone, Debug)]
pub struct Relationship {
    /// Relationship ID, e.g. "rId1"
    pub id: String,
    /// Relationship type URI
    pub rel_type: String,
    /// Target path, relative to the owning part
    pub target: String,
}

impl Relationships {
    /// Create an empty set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a relationship and return its freshly allocated id.
    ///
    /// Ids are dense: relationships are only ever appended.
    pub fn add(&mut self, rel_type: &str, target: &str) -> String {
        let id = format!("rId{}", self.items.len() + 1);
        self.items.push(Relationship {
            id: id.clone(),
            rel_type: rel_type.to_string(),
            target: target.to_string(),
        });
        id
    }

    /// First relationship of the given type, if any
    pub fn by_type(&self, rel_type: &str) -> Option<&Relationship> {
        self.items.iter().find(|rel| rel.rel_type == rel_type)
    }

    /// Iterate in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Relationship> {
        self.items.iter()
    }

    /// Number of relationships
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Write a `.rels` document
    pub fn write_to<W: Write>(&self, writer: W) -> Result<()> {
        let mut xml_writer = Writer::new(writer);

        xml_writer.write_event(Event::Decl(BytesDecl::new(
            "1.0",
            Some("UTF-8"),
            Some("yes"),
        )))?;

        let mut root = BytesStart::new("Relationships");
        root.push_attribute(("xmlns", xml::PR));
        xml_writer.write_event(Event::Start(root))?;

        for rel in &self.items {
            xml::write_empty(
                &mut xml_writer,
                "Relationship",
                &[
                    ("Id", rel.id.as_str()),
                    ("Type", rel.rel_type.as_str()),
                    ("Target", rel.target.as_str()),
                ],
            )?;
        }

        xml_writer.write_event(Event::End(BytesEnd::new("Relationships")))?;
        Ok(())
    }
}

// Well-known relationship types
pub mod rel_types {
    pub const OFFICE_DOCUMENT: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument";
    pub const STYLES: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    pub const NUMBERING: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    pub const IMAGE: &str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    pub const CORE_PROPERTIES: &str =
        "http://schemas.openxmlformats.org/package/2006/relationships/metadata/core-properties";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_ids() {
        let mut rels = Relationships::new();
        assert_eq!(rels.add(rel_types::STYLES, "styles.xml"), "rId1");
        assert_eq!(rels.add(rel_types::NUMBERING, "numbering.xml"), "rId2");
        assert_eq!(rels.add(rel_types::IMAGE, "media/image1.png"), "rId3");
        assert_eq!(rels.len(), 3);
    }

    #[test]
    fn test_by_type() {
        let mut rels = Relationships::new();
        rels.add(rel_types::STYLES, "styles.xml");
        assert_eq!(rels.by_type(rel_types::STYLES).unwrap().target, "styles.xml");
        assert!(rels.by_type(rel_types::IMAGE).is_none());
    }

    #[test]
    fn test_written_xml_keeps_insertion_order() {
        let mut rels = Relationships::new();
        rels.add(rel_types::STYLES, "styles.xml");
        rels.add(rel_types::IMAGE, "media/image1.png");

        let mut buf = Vec::new();
        rels.write_to(&mut buf).unwrap();
        let written = String::from_utf8(buf).unwrap();

        assert!(written.find("styles.xml").unwrap() < written.find("media/image1.png").unwrap());
        assert!(written.contains(r#"Id="rId1""#));
        assert!(written.contains(r#"Id="rId2""#));
    }
}
