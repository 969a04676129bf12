//! Link entity representing a shortened URL mapping.

use serde::Serialize;
use std::collections::BTreeMap;

/// Registry state: short code to target URL.
///
/// Ordered so the persisted file is stable between writes.
pub type LinkMap = BTreeMap<String, String>;

/// A single code-to-target mapping.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkEntry {
    pub code: String,
    pub target: String,
}

impl LinkEntry {
    /// Creates a new LinkEntry instance.
    pub fn new(code: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            target: target.into(),
        }
    }

    /// Collects a [`LinkMap`] into entries, in code order.
    pub fn from_map(links: &LinkMap) -> Vec<Self> {
        links
            .iter()
            .map(|(code, target)| Self::new(code.clone(), target.clone()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_link_entry_creation() {
        let entry = LinkEntry::new("abc123", "https://example.com");

        assert_eq!(entry.code, "abc123");
        assert_eq!(entry.target, "https://example.com");
    }

    #[test]
    fn test_from_map_is_ordered_by_code() {
        let mut links = LinkMap::new();
        links.insert("zz".to_string(), "https://z.test".to_string());
        links.insert("aa".to_string(), "https://a.test".to_string());

        let entries = LinkEntry::from_map(&links);

        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], LinkEntry::new("aa", "https://a.test"));
        assert_eq!(entries[1], LinkEntry::new("zz", "https://z.test"));
    }
}
