//! Key/value tag handling
//!
//! Converts the service's tag list into a key/value map and filters out
//! keys reserved by the managing system (the `aws:` namespace).

use crate::api::Tag;
use crate::error::{LookupError, Result};
use std::collections::BTreeMap;

/// Key prefix of tags reserved by the managing system
pub const AWS_TAG_KEY_PREFIX: &str = "aws:";

/// A set of key/value tags with filtering helpers
///
/// # Example
/// ```
/// use elasticache_lookup::api::Tag;
/// use elasticache_lookup::tags::KeyValueTags;
///
/// let tags = KeyValueTags::from_list(&[
///     Tag::new("Environment", "production"),
///     Tag::new("aws:cloudformation:stack-name", "infra"),
/// ])
/// .unwrap();
///
/// let map = tags.ignore_aws().into_map();
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.get("Environment").map(String::as_str), Some("production"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueTags(BTreeMap<String, String>);

impl KeyValueTags {
    /// Build from the service's tag list
    ///
    /// A tag entry without a key cannot be represented in the map and is an
    /// error. An entry without a value maps to the empty string.
    pub fn from_list(tags: &[Tag]) -> Result<Self> {
        let mut map = BTreeMap::new();
        for tag in tags {
            let key = tag.key.clone().ok_or_else(|| {
                LookupError::TagAssembly(format!("tag entry has no key: {:?}", tag))
            })?;
            map.insert(key, tag.value.clone().unwrap_or_default());
        }
        Ok(Self(map))
    }

    /// Drop tags whose keys live in the reserved `aws:` namespace
    pub fn ignore_aws(self) -> Self {
        Self(
            self.0
                .into_iter()
                .filter(|(key, _)| !key.starts_with(AWS_TAG_KEY_PREFIX))
                .collect(),
        )
    }

    /// Consume into a plain key→value map
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
