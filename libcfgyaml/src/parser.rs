//! Phase 3: Line Parser
//!
//! Walks the scanned lines once, in order. Comments are buffered until the
//! next assignment, constant definitions populate the constant table (and
//! drop any buffered comments), and assignments are resolved and appended to
//! the document. The first error aborts the parse.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::constants::ConstantTable;
use crate::document::{Document, Entry};
use crate::error::{ParseContext, ParseError, Result};
use crate::resolve::resolve_value;
use crate::scanner::{LineKind, ScanLine};

static CONSTANT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^def\s+([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.+);$").unwrap());
static ASSIGNMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^([A-Za-z_][A-Za-z0-9_]*)\s*=\s*(.+);$").unwrap());

/// Per-parse state. Nothing here outlives a single call to [`parse_document`].
struct Parser<'a> {
    ctx: &'a ParseContext,
    constants: ConstantTable,
    document: Document,
    pending_comments: Vec<String>,
}

/// Build a document from scanned lines.
pub fn parse_document(lines: &[ScanLine], ctx: &ParseContext) -> Result<Document> {
    let mut parser = Parser {
        ctx,
        constants: ConstantTable::new(),
        document: Document::new(),
        pending_comments: Vec::new(),
    };

    for line in lines {
        parser
            .parse_line(line)
            .map_err(|e| e.with_location(ctx, line.line_num, line.col))?;
    }

    if !parser.pending_comments.is_empty() {
        tracing::debug!(
            count = parser.pending_comments.len(),
            "dropping trailing comments with no following assignment"
        );
    }
    tracing::debug!(
        entries = parser.document.len(),
        constants = parser.constants.len(),
        file = parser.ctx.filename.as_deref().unwrap_or("<input>"),
        "parsed document"
    );
    Ok(parser.document)
}

impl Parser<'_> {
    fn parse_line(&mut self, line: &ScanLine) -> Result<()> {
        match line.kind {
            LineKind::Comment => {
                self.pending_comments.push(line.content.clone());
                Ok(())
            }
            LineKind::Constant => self.parse_constant(line),
            LineKind::Assignment => self.parse_assignment(line),
            LineKind::Unrecognized => {
                Err(ParseError::UnrecognizedLine(line.raw.clone(), String::new()))
            }
        }
    }

    /// `def NAME = VALUE;`
    fn parse_constant(&mut self, line: &ScanLine) -> Result<()> {
        let caps = CONSTANT
            .captures(&line.content)
            .ok_or_else(|| ParseError::MalformedConstant(line.content.clone(), String::new()))?;
        let name = &caps[1];
        let value = resolve_value(&caps[2], &self.constants)?;
        self.constants.define(name, value)?;

        if !self.pending_comments.is_empty() {
            tracing::trace!(
                name,
                count = self.pending_comments.len(),
                "discarding comments before constant"
            );
            self.pending_comments.clear();
        }
        Ok(())
    }

    /// `KEY = VALUE;`
    fn parse_assignment(&mut self, line: &ScanLine) -> Result<()> {
        let caps = ASSIGNMENT
            .captures(&line.content)
            .ok_or_else(|| ParseError::MalformedAssignment(line.content.clone(), String::new()))?;
        let key = &caps[1];
        let value = resolve_value(&caps[2], &self.constants)?;
        let comments = std::mem::take(&mut self.pending_comments);

        tracing::trace!(key, comments = comments.len(), "entry");
        self.document
            .insert(key, Entry::with_comments(value, comments))
    }
}
