//! Phase 1: Comment Normalizer
//!
//! Rewrites every `{- ... -}` block comment into one `'` line comment per
//! line of its content, so later phases only see line comments. A block
//! spanning N lines is replaced by exactly N lines, which keeps line numbers
//! stable for error reporting.

use crate::error::{ParseContext, ParseError, Result};

/// Block comment open marker.
pub const BLOCK_OPEN: &str = "{-";
/// Block comment close marker.
pub const BLOCK_CLOSE: &str = "-}";
/// Line comment marker.
pub const LINE_MARKER: char = '\'';

/// Replace all block comments in `source` with line comments.
///
/// Blocks do not nest: the first `-}` after a `{-` closes it. Searching
/// resumes after each replacement, so an `{-` inside a block's content is
/// never treated as the start of another block.
pub fn normalize(source: &str, ctx: &ParseContext) -> Result<String> {
    let mut text = source.to_string();
    let mut cursor = 0;
    let mut blocks = 0usize;

    while let Some(rel) = text[cursor..].find(BLOCK_OPEN) {
        let open = cursor + rel;
        let body_start = open + BLOCK_OPEN.len();
        let Some(close_rel) = text[body_start..].find(BLOCK_CLOSE) else {
            let (line, col) = position_of(&text, open);
            return Err(
                ParseError::UnclosedBlockComment(String::new()).with_location(ctx, line, col)
            );
        };
        let close = body_start + close_rel;

        let replacement = line_comments(&text[body_start..close]);
        text.replace_range(open..close + BLOCK_CLOSE.len(), &replacement);
        cursor = open + replacement.len();
        blocks += 1;
    }

    if blocks > 0 {
        tracing::debug!(blocks, "normalized block comments");
    }
    Ok(text)
}

/// Turn block comment content into `'`-prefixed lines.
fn line_comments(body: &str) -> String {
    body.split('\n')
        .map(|line| {
            let trimmed = line.trim();
            let mut out = String::with_capacity(trimmed.len() + 1);
            out.push(LINE_MARKER);
            out.push_str(trimmed);
            out
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Zero-based (line, column) of a byte offset.
fn position_of(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count();
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let col = before[line_start..].chars().count();
    (line, col)
}
