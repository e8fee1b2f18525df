//! The parsed document: assignments in source order with their comments.

use std::collections::HashSet;

use crate::error::{ParseError, Result};
use crate::value::Value;

/// A resolved assignment and the comment lines directly above it.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub value: Value,
    pub comments: Vec<String>,
}

impl Entry {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            comments: Vec::new(),
        }
    }

    pub fn with_comments(value: Value, comments: Vec<String>) -> Self {
        Self { value, comments }
    }
}

/// Ordered key → [`Entry`] mapping. Keys are unique; insertion order is
/// emission order.
#[derive(Debug, Clone, Default)]
pub struct Document {
    entries: Vec<(String, Entry)>,
    keys: HashSet<String>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry. A key that is already present is an error and
    /// leaves the document unchanged.
    pub fn insert(&mut self, key: &str, entry: Entry) -> Result<()> {
        if !self.keys.insert(key.to_string()) {
            return Err(ParseError::DuplicateKey(key.to_string(), String::new()));
        }
        self.entries.push((key.to_string(), entry));
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&Entry> {
        if !self.keys.contains(key) {
            return None;
        }
        self.entries.iter().find(|(k, _)| k == key).map(|(_, e)| e)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.keys.contains(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Entry)> {
        self.entries.iter().map(|(k, e)| (k.as_str(), e))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|(k, _)| k.as_str())
    }
}

impl PartialEq for Document {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}
