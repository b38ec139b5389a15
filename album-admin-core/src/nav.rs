//! Navigation parameters: the externally owned key-value state that drives
//! pagination. The map round-trips through a query string so that a view can
//! be reproduced from a shareable address.

use std::collections::BTreeMap;

pub const PAGE_KEY: &str = "page";
pub const PAGE_SIZE_KEY: &str = "pageSize";

/// Ordered key-value navigation state. Keys are kept sorted so the query
/// string rendering is stable across round trips.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavParams {
    entries: BTreeMap<String, String>,
}

impl NavParams {
    pub fn new() -> Self {
        NavParams {
            entries: BTreeMap::new(),
        }
    }

    /// Parse a query string like `page=2&pageSize=20`. A leading `?` is
    /// tolerated, as are empty or valueless segments; nothing here can fail.
    pub fn from_query(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut entries = BTreeMap::new();
        for segment in query.split('&') {
            if segment.is_empty() {
                continue;
            }
            match segment.split_once('=') {
                Some((key, value)) => entries.insert(key.to_string(), value.to_string()),
                None => entries.insert(segment.to_string(), String::new()),
            };
        }
        NavParams { entries }
    }

    pub fn to_query(&self) -> String {
        self.entries
            .iter()
            .map(|(k, v)| format!("{}={}", k, v))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    pub fn with(mut self, key: &str, value: String) -> Self {
        self.set(key, value);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_round_trip() {
        let params = NavParams::from_query("page=2&pageSize=20");
        assert_eq!(params.get(PAGE_KEY), Some("2"));
        assert_eq!(params.get(PAGE_SIZE_KEY), Some("20"));
        assert_eq!(params.to_query(), "page=2&pageSize=20");
    }

    #[test]
    fn test_leading_question_mark_and_junk_segments() {
        let params = NavParams::from_query("?page=3&&flag&pageSize=50");
        assert_eq!(params.get(PAGE_KEY), Some("3"));
        assert_eq!(params.get(PAGE_SIZE_KEY), Some("50"));
        assert_eq!(params.get("flag"), Some(""));
    }

    #[test]
    fn test_stable_key_order() {
        let params = NavParams::new()
            .with(PAGE_SIZE_KEY, "10".to_string())
            .with(PAGE_KEY, "1".to_string());
        // `page` sorts before `pageSize` regardless of insertion order
        assert_eq!(params.to_query(), "page=1&pageSize=10");
    }

    #[test]
    fn test_empty_query() {
        let params = NavParams::from_query("");
        assert!(params.is_empty());
        assert_eq!(params.to_query(), "");
    }
}
