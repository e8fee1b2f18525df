//! Encode a parsed document as block-style YAML.
//!
//! Each entry's comments are written as `#` lines directly above it. Arrays
//! become block sequences, mappings become nested blocks, and nesting adds
//! two spaces per level. Keys are written as-is and no flow-style
//! collections are produced: an empty array or mapping is a bare `key:`
//! (or a bare `-` inside a sequence).

use crate::document::Document;
use crate::value::Value;

/// Spaces added per nesting level.
const INDENT_STEP: usize = 2;

/// Encode a document as YAML lines, without line terminators.
pub fn encode_lines(doc: &Document) -> Vec<String> {
    let mut lines = Vec::new();
    for (key, entry) in doc.iter() {
        encode_entry(key, &entry.value, &entry.comments, 0, &mut lines);
    }
    tracing::debug!(lines = lines.len(), "encoded yaml");
    lines
}

/// Encode a document as YAML text. Every line, including the last, ends
/// with `\n`; an empty document encodes to the empty string.
pub fn encode(doc: &Document) -> String {
    let mut out = String::new();
    for line in encode_lines(doc) {
        out.push_str(&line);
        out.push('\n');
    }
    out
}

fn encode_entry(key: &str, value: &Value, comments: &[String], indent: usize, out: &mut Vec<String>) {
    let pad = " ".repeat(indent);

    for comment in comments {
        out.push(format!("{}# {}", pad, comment));
    }

    if let Some(text) = value.to_yaml_scalar() {
        out.push(format!("{}{}: {}", pad, key, text));
        return;
    }

    out.push(format!("{}{}:", pad, key));
    match value {
        Value::Array(items) => encode_sequence(items, indent + INDENT_STEP, out),
        Value::Mapping(fields) => encode_fields(fields, indent + INDENT_STEP, out),
        _ => {}
    }
}

fn encode_sequence(items: &[Value], indent: usize, out: &mut Vec<String>) {
    let pad = " ".repeat(indent);

    for item in items {
        if let Some(text) = item.to_yaml_scalar() {
            out.push(format!("{}- {}", pad, text));
            continue;
        }

        out.push(format!("{}-", pad));
        match item {
            Value::Array(inner) => encode_sequence(inner, indent + INDENT_STEP, out),
            Value::Mapping(fields) => encode_fields(fields, indent + INDENT_STEP, out),
            _ => {}
        }
    }
}

fn encode_fields(fields: &[(String, Value)], indent: usize, out: &mut Vec<String>) {
    for (key, value) in fields {
        encode_entry(key, value, &[], indent, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Entry;

    fn doc(entries: Vec<(&str, Entry)>) -> Document {
        let mut doc = Document::new();
        for (key, entry) in entries {
            doc.insert(key, entry).unwrap();
        }
        doc
    }

    #[test]
    fn test_scalars_and_comments() {
        let d = doc(vec![
            (
                "Hostname",
                Entry::with_comments(Value::from("example.com"), vec!["Server".into(), "".into()]),
            ),
            ("Port", Entry::new(Value::from(8080))),
        ]);
        assert_eq!(
            encode_lines(&d),
            vec!["# Server", "# ", "Hostname: \"example.com\"", "Port: 8080"]
        );
    }

    #[test]
    fn test_array() {
        let d = doc(vec![(
            "Numbers",
            Entry::new(Value::from(vec![Value::from(1), Value::from(2), Value::from(3)])),
        )]);
        assert_eq!(encode(&d), "Numbers:\n  - 1\n  - 2\n  - 3\n");
    }

    #[test]
    fn test_empty_collections_stay_block_style() {
        let d = doc(vec![
            ("List", Entry::new(Value::Array(vec![]))),
            ("Map", Entry::new(Value::Mapping(vec![]))),
            (
                "Outer",
                Entry::new(Value::from(vec![Value::Array(vec![]), Value::from(1)])),
            ),
        ]);
        assert_eq!(
            encode_lines(&d),
            vec!["List:", "Map:", "Outer:", "  -", "  - 1"]
        );
    }

    #[test]
    fn test_mapping_elements_in_array() {
        let record = Value::from(vec![
            ("name".to_string(), Value::from("a")),
            ("port".to_string(), Value::from(1)),
        ]);
        let d = doc(vec![("Servers", Entry::new(Value::from(vec![record])))]);
        assert_eq!(
            encode_lines(&d),
            vec!["Servers:", "  -", "    name: \"a\"", "    port: 1"]
        );
    }

    #[test]
    fn test_nested_mapping_and_array() {
        let inner = Value::from(vec![Value::from(true), Value::from(vec![Value::from(2.5)])]);
        let d = doc(vec![(
            "Root",
            Entry::with_comments(
                Value::from(vec![("items".to_string(), inner)]),
                vec!["nested".into()],
            ),
        )]);
        assert_eq!(
            encode_lines(&d),
            vec![
                "# nested",
                "Root:",
                "  items:",
                "    - true",
                "    -",
                "      - 2.5",
            ]
        );
    }

    #[test]
    fn test_empty_document() {
        assert_eq!(encode(&Document::new()), "");
    }

    #[test]
    fn test_output_is_valid_yaml() {
        let d = doc(vec![
            ("Quote", Entry::new(Value::from(r#"say "hi" \o/"#))),
            (
                "Mixed",
                Entry::new(Value::from(vec![
                    Value::from(1),
                    Value::from(vec![("k".to_string(), Value::from("v"))]),
                    Value::Array(vec![]),
                ])),
            ),
        ]);
        let parsed: serde_yaml::Value = serde_yaml::from_str(&encode(&d)).unwrap();
        assert_eq!(parsed["Quote"].as_str(), Some(r#"say "hi" \o/"#));
        assert_eq!(parsed["Mixed"][0].as_i64(), Some(1));
        assert_eq!(parsed["Mixed"][1]["k"].as_str(), Some("v"));
        // An empty collection has no block form and reads back as null.
        assert!(parsed["Mixed"][2].is_null());
    }
}
