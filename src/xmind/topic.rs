//! Topic tree model shared by both source schemas

use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;

/// One node of the mind-map outline.
///
/// Two wire shapes exist for children and both are tolerated at once: the
/// grouped shape (`topics`: group name -> topic list) and the
/// attached/detached shape (`children.attached` / `children.detached`).
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct Topic {
    pub title: Option<String>,
    pub image: Option<ImageRef>,
    /// Grouped child shape, in encounter order
    #[serde(deserialize_with = "ordered_groups")]
    pub topics: Vec<(String, Vec<Topic>)>,
    /// Attached/detached child shape
    pub children: ChildLists,
}

/// The attached/detached child lists
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ChildLists {
    pub attached: Vec<Topic>,
    pub detached: Vec<Topic>,
}

/// An embedded image reference
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(default)]
pub struct ImageRef {
    pub src: Option<String>,
}

impl Topic {
    /// Get the topic title
    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    /// Get the image source path, if the topic carries one
    pub fn image_src(&self) -> Option<&str> {
        self.image.as_ref()?.src.as_deref()
    }

    /// Iterate children across both schemas: every group of the grouped shape
    /// in encounter order, then the attached list, then the detached list.
    pub fn children(&self) -> impl Iterator<Item = &Topic> {
        self.topics
            .iter()
            .flat_map(|(_, group)| group.iter())
            .chain(self.children.attached.iter())
            .chain(self.children.detached.iter())
    }

    /// A topic is a leaf iff it has no children under either shape
    pub fn is_leaf(&self) -> bool {
        self.children().next().is_none()
    }
}

/// Deserialize a JSON mapping into ordered (group, topics) pairs.
///
/// A plain map type would lose the group iteration order.
fn ordered_groups<'de, D>(deserializer: D) -> Result<Vec<(String, Vec<Topic>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct Groups;

    impl<'de> Visitor<'de> for Groups {
        type Value = Vec<(String, Vec<Topic>)>;

        fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
            formatter.write_str("a map of topic groups")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut groups = Vec::new();
            while let Some(entry) = map.next_entry::<String, Vec<Topic>>()? {
                groups.push(entry);
            }
            Ok(groups)
        }
    }

    deserializer.deserialize_map(Groups)
}
