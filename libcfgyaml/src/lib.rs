//! CFG to YAML translator.
//!
//! CFG is a small configuration language of constant definitions,
//! `KEY = VALUE;` assignments, arrays, and comments:
//!
//! ```text
//! {- Service settings -}
//! def host = "example.com";
//! ' Public name
//! Hostname = $host$;
//! Ports = [80, 443];
//! ```
//!
//! translates to
//!
//! ```text
//! # Public name
//! Hostname: "example.com"
//! Ports:
//!   - 80
//!   - 443
//! ```
//!
//! # Translation Pipeline
//!
//! 1. **Comment Normalizer**: rewrites `{- ... -}` block comments into `'`
//!    line comments, one per line, keeping line numbers stable.
//!
//! 2. **Scanner**: splits the normalized text into lines and classifies
//!    each as comment, constant definition, assignment, or unrecognized.
//!
//! 3. **Line Parser**: resolves values against the constant table and
//!    builds an ordered [`Document`], attaching buffered comments to the
//!    next assignment.
//!
//! 4. **Encoder**: renders the document as block YAML with the comments
//!    above the entries they belong to.
//!
//! Each phase runs to completion before the next starts, and the first
//! error aborts the translation.

mod comments;
mod constants;
mod document;
mod encode;
mod error;
mod parser;
mod resolve;
mod scanner;
mod value;

pub use constants::ConstantTable;
pub use document::{Document, Entry};
pub use encode::{encode, encode_lines};
pub use error::{ErrorKind, ParseContext, ParseError, Result};
pub use resolve::resolve_value;
pub use value::Value;

/// Parse CFG source into a document.
///
/// # Example
///
/// ```
/// use libcfgyaml::{parse, Value};
///
/// let doc = parse("Port = 8080;").unwrap();
/// assert_eq!(doc.get("Port").unwrap().value, Value::from(8080));
/// ```
pub fn parse(input: &str) -> Result<Document> {
    parse_with_filename(input, None)
}

/// Parse CFG source with a filename for error messages.
pub fn parse_with_filename(input: &str, filename: Option<&str>) -> Result<Document> {
    let ctx = ParseContext::new(filename);

    // Phase 1: Block comments to line comments
    let text = comments::normalize(input, &ctx)?;

    // Phase 2: Classify lines
    let lines = scanner::scan(&text);

    // Phase 3: Resolve into a document
    parser::parse_document(&lines, &ctx)
}

/// Translate CFG source to YAML text.
///
/// # Example
///
/// ```
/// let yaml = libcfgyaml::translate("def port = 8080;\nPort = $port$;\n").unwrap();
/// assert_eq!(yaml, "Port: 8080\n");
/// ```
pub fn translate(input: &str) -> Result<String> {
    translate_with_filename(input, None)
}

/// Translate CFG source to YAML text with a filename for error messages.
pub fn translate_with_filename(input: &str, filename: Option<&str>) -> Result<String> {
    let doc = parse_with_filename(input, filename)?;
    Ok(encode(&doc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_translate_constants() {
        let yaml = translate(
            "def hostname = \"example.com\";\ndef port = 8080;\n\nHostname = $hostname$;\nPort = $port$;\n",
        )
        .unwrap();
        assert_eq!(yaml, "Hostname: \"example.com\"\nPort: 8080\n");
    }

    #[test]
    fn test_translate_arrays() {
        let yaml = translate("Numbers = [1, 2, 3];\nStrings = [\"one\", \"two\", \"three\"];\n")
            .unwrap();
        assert_eq!(
            yaml,
            "Numbers:\n  - 1\n  - 2\n  - 3\nStrings:\n  - \"one\"\n  - \"two\"\n  - \"three\"\n"
        );
    }

    #[test]
    fn test_translate_comments() {
        let yaml = translate(
            "'\ndef name = \"Test\";\n' Another comment\nValue = $name$;\n\n{- \nMulti-line comment\n-}\nNumber = 42;\n",
        )
        .unwrap();
        assert_eq!(
            yaml,
            "# Another comment\nValue: \"Test\"\n# \n# Multi-line comment\n# \nNumber: 42\n"
        );
    }

    #[test]
    fn test_translate_scalars() {
        let yaml =
            translate("Integer = 123;\nFloatVal = 3.14;\nBoolTrue = true;\nBoolFalse = false;\n")
                .unwrap();
        assert_eq!(
            yaml,
            "Integer: 123\nFloatVal: 3.14\nBoolTrue: true\nBoolFalse: false\n"
        );
    }

    #[test]
    fn test_translate_errors() {
        let err = translate("Value = $undefined$;").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UndefinedConstant);
        assert_eq!(err.to_string(), "Undefined constant: undefined");

        let err = translate("Invalid line").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnrecognizedLine);
        assert_eq!(err.to_string(), "Invalid line: Invalid line");
    }

    #[test]
    fn test_integers_round_trip() {
        for n in ["0", "7", "42", "8080", "9223372036854775807", "18446744073709551616"] {
            let yaml = translate(&format!("N = {};", n)).unwrap();
            assert_eq!(yaml, format!("N: {}\n", n));
        }
    }

    #[test]
    fn test_quotes_survive_yaml_reader() {
        let yaml = translate(r#"Motto = "say "hi" \ twice";"#).unwrap();
        let parsed: serde_yaml::Value = serde_yaml::from_str(&yaml).unwrap();
        assert_eq!(parsed["Motto"].as_str(), Some(r#"say "hi" \ twice"#));
    }

    #[test]
    fn test_order_preserved() {
        let keys = ["Zeta", "Alpha", "Omega", "Beta", "Kappa"];
        let source: String = keys.iter().map(|k| format!("{} = 1;\n", k)).collect();
        let yaml = translate(&source).unwrap();
        let emitted: Vec<&str> = yaml.lines().map(|l| l.trim_end_matches(": 1")).collect();
        assert_eq!(emitted, keys);
    }

    #[test]
    fn test_empty_array_is_bare_key() {
        assert_eq!(translate("Empty = [];\n").unwrap(), "Empty:\n");
        assert_eq!(translate("Blank = [  ];\nNext = 1;\n").unwrap(), "Blank:\nNext: 1\n");
    }

    #[test]
    fn test_parse_with_filename_locates_errors() {
        let err = parse_with_filename("A = 1;\nA = 2;", Some("dup.cfg")).unwrap_err();
        assert_eq!(err.to_string(), "Duplicate key: A at 2:1 of <dup.cfg>");
    }
}
