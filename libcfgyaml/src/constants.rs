//! Constant table: named values defined with `def`, in declaration order.

use indexmap::IndexMap;

use crate::error::{ParseError, Result};
use crate::value::Value;

/// Constants defined so far in a single parse.
///
/// Values are stored fully resolved, so a lookup never re-resolves.
#[derive(Debug, Clone, Default)]
pub struct ConstantTable {
    entries: IndexMap<String, Value>,
}

impl ConstantTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Define `name`. Redefinition is an error.
    pub fn define(&mut self, name: &str, value: Value) -> Result<()> {
        if self.entries.contains_key(name) {
            return Err(ParseError::DuplicateConstant(name.to_string(), String::new()));
        }
        tracing::trace!(name, value = ?value, "constant defined");
        self.entries.insert(name.to_string(), value);
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<&Value> {
        self.entries.get(name)
    }

    /// A copy of the value stored under `name`.
    pub fn lookup(&self, name: &str) -> Result<Value> {
        self.get(name)
            .cloned()
            .ok_or_else(|| ParseError::UndefinedConstant(name.to_string(), String::new()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Constants in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}
