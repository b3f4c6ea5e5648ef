//! A single package part: payload plus content type and relationships

use crate::opc::{PartUri, Relationships};

/// One file inside the package
#[derive(Clone, Debug)]
pub struct Part {
    /// Where the part lives in the package
    pub uri: PartUri,
    /// MIME content type recorded in `[Content_Types].xml`
    pub content_type: String,
    /// Raw payload
    pub data: Vec<u8>,
    /// Part-level relationships, written next to the part when present
    pub relationships: Option<Relationships>,
}

impl Part {
    /// Create a part without relationships
    pub fn new(uri: PartUri, content_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            uri,
            content_type: content_type.into(),
            data,
            relationships: None,
        }
    }

    /// Attach part-level relationships
    pub fn with_relationships(mut self, rels: Relationships) -> Self {
        self.relationships = Some(rels);
        self
    }
}
