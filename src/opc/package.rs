//! Package assembly: streams parts into the output zip

use crate::error::Result;
use crate::opc::{ContentTypes, Part, PartUri, Relationships};
use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;
use zip::write::{FileOptions, ZipWriter};
use zip::CompressionMethod;

/// The package under assembly: parts in insertion order, package-level
/// relationships, and the content-type index kept in step with the parts.
#[derive(Debug)]
pub struct Package {
    parts: Vec<Part>,
    relationships: Relationships,
    content_types: ContentTypes,
}

impl Package {
    /// Create an empty package
    pub fn new() -> Self {
        Self {
            parts: Vec::new(),
            relationships: Relationships::new(),
            content_types: ContentTypes::new(),
        }
    }

    /// Add a part; its content type is recorded automatically
    pub fn add_part(&mut self, part: Part) {
        self.content_types.add_override(&part.uri, &part.content_type);
        self.parts.push(part);
    }

    /// Look up a part by URI
    pub fn part(&self, uri: &PartUri) -> Option<&Part> {
        self.parts.iter().find(|part| &part.uri == uri)
    }

    /// Iterate over parts in insertion order
    pub fn parts(&self) -> impl Iterator<Item = &Part> {
        self.parts.iter()
    }

    /// Add a package-level relationship
    pub fn add_relationship(&mut self, rel_type: &str, target: &str) -> String {
        self.relationships.add(rel_type, target)
    }

    /// Package-level relationships
    pub fn relationships(&self) -> &Relationships {
        &self.relationships
    }

    /// Content types index
    pub fn content_types(&self) -> &ContentTypes {
        &self.content_types
    }

    /// Write the package to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.write_to(File::create(path)?)
    }

    /// Write the package to bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buf = Vec::new();
        self.write_to(Cursor::new(&mut buf))?;
        Ok(buf)
    }

    /// Stream every entry into a zip archive
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options: FileOptions<()> =
            FileOptions::default().compression_method(CompressionMethod::Deflated);

        zip.start_file("[Content_Types].xml", options)?;
        self.content_types.write_to(&mut zip)?;

        if !self.relationships.is_empty() {
            zip.start_file("_rels/.rels", options)?;
            self.relationships.write_to(&mut zip)?;
        }

        for part in &self.parts {
            zip.start_file(part.uri.zip_path(), options)?;
            zip.write_all(&part.data)?;

            if let Some(rels) = &part.relationships {
                if !rels.is_empty() {
                    zip.start_file(part.uri.relationships_uri().zip_path(), options)?;
                    rels.write_to(&mut zip)?;
                }
            }
        }

        zip.finish()?;
        Ok(())
    }
}

impl Default for Package {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::opc::rel_types;
    use std::io::Read;

    #[test]
    fn test_add_and_find_part() {
        let mut pkg = Package::new();
        let uri = PartUri::new("/word/document.xml").unwrap();
        pkg.add_part(Part::new(uri.clone(), "application/xml", b"<doc/>".to_vec()));

        assert_eq!(pkg.part(&uri).unwrap().data, b"<doc/>");
        assert_eq!(pkg.content_types().get(&uri), Some("application/xml"));
        assert!(pkg.part(&PartUri::new("/other.xml").unwrap()).is_none());
    }

    #[test]
    fn test_written_zip_lists_entries() {
        let mut pkg = Package::new();

        let mut doc_rels = Relationships::new();
        doc_rels.add(rel_types::STYLES, "styles.xml");
        pkg.add_part(
            Part::new(
                PartUri::new("/word/document.xml").unwrap(),
                crate::opc::MAIN_DOCUMENT,
                b"<?xml version=\"1.0\"?><document/>".to_vec(),
            )
            .with_relationships(doc_rels),
        );
        pkg.add_relationship(rel_types::OFFICE_DOCUMENT, "word/document.xml");

        let bytes = pkg.to_bytes().unwrap();
        assert_eq!(&bytes[0..2], b"PK", "should be a valid zip file");

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        for expected in [
            "[Content_Types].xml",
            "_rels/.rels",
            "word/document.xml",
            "word/_rels/document.xml.rels",
        ] {
            assert!(names.contains(&expected.to_string()), "missing {expected}");
        }

        let mut rels = String::new();
        archive
            .by_name("word/_rels/document.xml.rels")
            .unwrap()
            .read_to_string(&mut rels)
            .unwrap();
        assert!(rels.contains("styles.xml"));
    }
}
