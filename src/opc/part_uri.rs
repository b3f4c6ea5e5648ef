//! Normalized part names inside an OPC package

use crate::error::{Error, Result};
use std::fmt;

/// Absolute path of a part inside the package, e.g. `/word/document.xml`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct PartUri(String);

impl PartUri {
    /// Normalize a path into a part URI: a leading slash is ensured, a
    /// trailing slash dropped, and empty segments rejected.
    pub fn new(path: &str) -> Result<Self> {
        let trimmed = path.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(Error::InvalidPartUri("empty part name".into()));
        }

        let absolute = if trimmed.starts_with('/') {
            trimmed.to_string()
        } else {
            format!("/{trimmed}")
        };
        if absolute.contains("//") {
            return Err(Error::InvalidPartUri(format!(
                "'{path}' contains empty segments"
            )));
        }

        Ok(Self(absolute))
    }

    /// The full part name, with leading slash
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The part's path inside the zip archive (no leading slash)
    pub fn zip_path(&self) -> &str {
        &self.0[1..]
    }

    /// Final path segment
    pub fn file_name(&self) -> &str {
        match self.0.rsplit_once('/') {
            Some((_, name)) => name,
            None => &self.0,
        }
    }

    /// Extension of the final segment, if any
    pub fn extension(&self) -> Option<&str> {
        self.file_name()
            .rsplit_once('.')
            .map(|(_, ext)| ext)
            .filter(|ext| !ext.is_empty())
    }

    /// Where this part's relationships live:
    /// `/word/document.xml` -> `/word/_rels/document.xml.rels`
    pub fn relationships_uri(&self) -> PartUri {
        let (dir, name) = self.0.rsplit_once('/').unwrap_or(("", self.0.as_str()));
        PartUri(format!("{dir}/_rels/{name}.rels"))
    }
}

impl fmt::Display for PartUri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_leading_slash_normalized() {
        assert_eq!(PartUri::new("word/document.xml").unwrap().as_str(), "/word/document.xml");
        assert_eq!(PartUri::new("/word/document.xml").unwrap().as_str(), "/word/document.xml");
    }

    #[test]
    fn test_zip_path_and_file_name() {
        let uri = PartUri::new("/word/media/image1.png").unwrap();
        assert_eq!(uri.zip_path(), "word/media/image1.png");
        assert_eq!(uri.file_name(), "image1.png");
        assert_eq!(uri.extension(), Some("png"));
    }

    #[test]
    fn test_relationships_uri() {
        let uri = PartUri::new("/word/document.xml").unwrap();
        assert_eq!(
            uri.relationships_uri().as_str(),
            "/word/_rels/document.xml.rels"
        );
    }

    #[test]
    fn test_invalid_names_rejected() {
        assert!(PartUri::new("").is_err());
        assert!(PartUri::new("   ").is_err());
        assert!(PartUri::new("word//document.xml").is_err());
    }
}
