//! In-memory mapping of binary resources embedded in the source archive

use std::collections::HashMap;

/// Archive directory the resources live under
pub(crate) const RESOURCE_DIR: &str = "resources/";

/// Prefix some image references carry in front of the archive path
pub(crate) const ALIAS_PREFIX: &str = "xap:";

/// Binary assets keyed by archive-relative path.
///
/// Image `src` values address entries either by the raw archive path
/// (`resources/foo.png`) or with the `xap:` alias prefix
/// (`xap:resources/foo.png`); lookups accept both.
#[derive(Clone, Debug, Default)]
pub struct Resources {
    entries: HashMap<String, Vec<u8>>,
}

impl Resources {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a resource under its raw archive path
    pub fn insert(&mut self, path: impl Into<String>, data: Vec<u8>) {
        self.entries.insert(path.into(), data);
    }

    /// Look up a resource by raw or aliased path
    pub fn get(&self, src: &str) -> Option<&[u8]> {
        if let Some(data) = self.entries.get(src) {
            return Some(data);
        }
        let stripped = src.strip_prefix(ALIAS_PREFIX)?;
        self.entries.get(stripped).map(|data| data.as_slice())
    }

    /// Number of stored resources
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_by_raw_and_alias() {
        let mut resources = Resources::new();
        resources.insert("resources/a.png", vec![1, 2, 3]);

        assert_eq!(resources.get("resources/a.png"), Some(&[1, 2, 3][..]));
        assert_eq!(resources.get("xap:resources/a.png"), Some(&[1, 2, 3][..]));
        assert_eq!(resources.get("resources/missing.png"), None);
        assert_eq!(resources.get("xap:resources/missing.png"), None);
    }

    #[test]
    fn test_alias_only_strips_known_prefix() {
        let mut resources = Resources::new();
        resources.insert("resources/a.png", vec![1]);

        assert_eq!(resources.get("other:resources/a.png"), None);
    }
}
