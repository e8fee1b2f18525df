//! Value resolution: turn the text on the right of `=` into a [`Value`].
//!
//! Dispatch is checked in order:
//! 1. `$name$` constant reference
//! 2. `"..."` string (no escape processing)
//! 3. `[a, b, ...]` array, split on every comma
//! 4. integer (`digits`)
//! 5. float (`digits.digits`)
//! 6. `true` / `false`, any case
//! 7. anything else is kept as a bare-word string

use num_bigint::BigInt;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::ConstantTable;
use crate::error::Result;
use crate::value::Value;

static INTEGER: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+$").unwrap());
static FLOAT: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").unwrap());

/// Resolve `text` against the constants defined so far.
pub fn resolve_value(text: &str, constants: &ConstantTable) -> Result<Value> {
    let text = text.trim();

    if let Some(name) = unwrap_delimited(text, '$', '$') {
        return constants.lookup(name);
    }

    if let Some(s) = unwrap_delimited(text, '"', '"') {
        return Ok(Value::String(s.to_string()));
    }

    if let Some(inner) = unwrap_delimited(text, '[', ']') {
        return resolve_array(inner, constants);
    }

    if INTEGER.is_match(text) {
        if let Ok(n) = text.parse::<BigInt>() {
            return Ok(Value::Integer(n));
        }
    }

    if FLOAT.is_match(text) {
        if let Ok(f) = text.parse::<f64>() {
            return Ok(Value::Float(f));
        }
    }

    if text.eq_ignore_ascii_case("true") {
        return Ok(Value::Bool(true));
    }
    if text.eq_ignore_ascii_case("false") {
        return Ok(Value::Bool(false));
    }

    Ok(Value::String(text.to_string()))
}

/// Array elements are split on every comma, including commas inside
/// quoted strings or nested brackets.
fn resolve_array(inner: &str, constants: &ConstantTable) -> Result<Value> {
    let inner = inner.trim();
    if inner.is_empty() {
        return Ok(Value::Array(Vec::new()));
    }
    let items = inner
        .split(',')
        .map(|piece| resolve_value(piece, constants))
        .collect::<Result<Vec<_>>>()?;
    Ok(Value::Array(items))
}

/// The interior of `text` if it starts with `open` and ends with `close`.
/// A lone delimiter character does not count as wrapped.
fn unwrap_delimited(text: &str, open: char, close: char) -> Option<&str> {
    if text.len() < open.len_utf8() + close.len_utf8() {
        return None;
    }
    text.strip_prefix(open)?.strip_suffix(close)
}
