//! Outgoing request parameter set.

use std::collections::BTreeMap;

use serde::Serialize;

/// Key/value request parameters, keyed by schema name.
///
/// Keys are kept sorted so that a dispatcher encoding them (query string,
/// form body) produces the same bytes for the same call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Params(BTreeMap<String, String>);

impl Params {
    /// An empty parameter set.
    pub fn new() -> Self { Self::default() }

    /// Set `key` to `value`, replacing any earlier value.
    pub fn add(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// The value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> { self.0.get(key).map(String::as_str) }

    /// Whether `key` is present.
    pub fn contains(&self, key: &str) -> bool { self.0.contains_key(key) }

    /// Number of parameters.
    pub fn len(&self) -> usize { self.0.len() }

    /// Whether no parameters were added.
    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl IntoIterator for Params {
    type Item = (String, String);
    type IntoIter = std::collections::btree_map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_replaces_and_iterates_sorted() {
        let mut params = Params::new();
        assert!(params.is_empty());

        params.add("text", "hello");
        params.add("chat_id", "42");
        params.add("text", "bye");

        assert_eq!(params.len(), 2);
        assert_eq!(params.get("text"), Some("bye"));
        assert!(params.contains("chat_id"));
        assert!(!params.contains("entities"));

        let keys: Vec<&str> = params.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["chat_id", "text"]);
    }
}
