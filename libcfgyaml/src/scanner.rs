//! Phase 2: Scanner
//!
//! The scanner splits normalized source into lines and classifies each one
//! independently. Rules are checked in order:
//! - blank lines are dropped
//! - `'` starts a line comment
//! - `def` followed by whitespace starts a constant definition
//! - a line containing `=` and ending with `;` is an assignment
//! - anything else is unrecognized

use crate::comments::LINE_MARKER;

/// Keyword introducing a constant definition.
pub const DEF_KEYWORD: &str = "def";
/// Statement terminator.
pub const TERMINATOR: char = ';';

/// Classification of a non-blank line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Comment,
    Constant,
    Assignment,
    Unrecognized,
}

/// A single non-blank line after scanning.
#[derive(Debug, Clone)]
pub struct ScanLine {
    pub kind: LineKind,
    /// Comment text for comments, trimmed line otherwise.
    pub content: String,
    /// The line as written, for diagnostics.
    pub raw: String,
    /// Zero-based line number.
    pub line_num: usize,
    /// Zero-based column of the first non-blank character.
    pub col: usize,
}

/// Scan normalized source into classified lines.
pub fn scan(source: &str) -> Vec<ScanLine> {
    let mut lines = Vec::new();

    for (line_num, line_str) in source.split('\n').enumerate() {
        let raw = line_str.trim_end_matches('\r');
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            continue;
        }

        let (kind, content) = classify(trimmed);
        lines.push(ScanLine {
            kind,
            content,
            raw: raw.to_string(),
            line_num,
            col: count_indent(raw),
        });
    }

    lines
}

/// Classify a trimmed, non-empty line.
fn classify(trimmed: &str) -> (LineKind, String) {
    if trimmed.starts_with(LINE_MARKER) {
        let text = trimmed.trim_start_matches(LINE_MARKER).trim();
        return (LineKind::Comment, text.to_string());
    }

    let kind = if is_constant_definition(trimmed) {
        LineKind::Constant
    } else if trimmed.contains('=') && trimmed.ends_with(TERMINATOR) {
        LineKind::Assignment
    } else {
        LineKind::Unrecognized
    };
    (kind, trimmed.to_string())
}

/// `def` followed by whitespace. `default = 1;` is an assignment.
fn is_constant_definition(trimmed: &str) -> bool {
    trimmed
        .strip_prefix(DEF_KEYWORD)
        .map_or(false, |rest| rest.starts_with(char::is_whitespace))
}

/// Count leading whitespace characters.
fn count_indent(line: &str) -> usize {
    line.chars().take_while(|c| c.is_whitespace()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<LineKind> {
        scan(source).into_iter().map(|l| l.kind).collect()
    }

    #[test]
    fn test_blank_lines_dropped() {
        assert!(scan("\n   \n\t\n").is_empty());
    }

    #[test]
    fn test_classification_order() {
        assert_eq!(
            kinds("' note\ndef a = 1;\nb = 2;\nInvalid line\n"),
            vec![
                LineKind::Comment,
                LineKind::Constant,
                LineKind::Assignment,
                LineKind::Unrecognized,
            ]
        );
    }

    #[test]
    fn test_comment_text_is_stripped() {
        let lines = scan("   '   Another comment  ");
        assert_eq!(lines[0].content, "Another comment");
        assert_eq!(lines[0].col, 3);
    }

    #[test]
    fn test_bare_comment_marker() {
        let lines = scan("'");
        assert_eq!(lines[0].kind, LineKind::Comment);
        assert_eq!(lines[0].content, "");
    }

    #[test]
    fn test_def_requires_whitespace() {
        assert_eq!(kinds("default = 1;"), vec![LineKind::Assignment]);
        assert_eq!(kinds("def\tport = 1;"), vec![LineKind::Constant]);
        assert_eq!(kinds("def port = 1"), vec![LineKind::Constant]);
    }

    #[test]
    fn test_assignment_needs_terminator() {
        assert_eq!(kinds("a = 1"), vec![LineKind::Unrecognized]);
        assert_eq!(kinds("a;"), vec![LineKind::Unrecognized]);
    }

    #[test]
    fn test_line_numbers_and_raw_text() {
        let lines = scan("\r\n  Bad stuff\r\n");
        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].line_num, 1);
        assert_eq!(lines[0].raw, "  Bad stuff");
        assert_eq!(lines[0].content, "Bad stuff");
    }
}
