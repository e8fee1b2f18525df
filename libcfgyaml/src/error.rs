//! Error types for CFG translation.

use thiserror::Error;

/// Result type for CFG translation operations.
pub type Result<T> = std::result::Result<T, ParseError>;

/// Parse context carrying filename for error reporting.
#[derive(Clone, Debug, Default)]
pub struct ParseContext {
    pub filename: Option<String>,
}

impl ParseContext {
    /// Create a new parse context.
    pub fn new(filename: Option<&str>) -> Self {
        Self {
            filename: filename.map(String::from),
        }
    }

    /// Format a location suffix for error messages.
    /// `line` and `col` are zero-based; the suffix is one-based.
    pub fn loc_suffix(&self, line: usize, col: usize) -> String {
        match &self.filename {
            Some(name) => format!(" at {}:{} of <{}>", line + 1, col + 1, name),
            None => String::new(),
        }
    }
}

/// The kind of a [`ParseError`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    MalformedConstant,
    MalformedAssignment,
    DuplicateKey,
    DuplicateConstant,
    UndefinedConstant,
    UnrecognizedLine,
    UnclosedBlockComment,
}

/// Error type for CFG translation.
///
/// Every variant except [`ParseError::UnclosedBlockComment`] carries the
/// offending text first and a location suffix second. The suffix is empty
/// unless a filename was supplied to the parse.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A `def` line that is not `def NAME = VALUE;`.
    #[error("Invalid constant definition: {0}{1}")]
    MalformedConstant(String, String),

    /// An assignment line that is not `KEY = VALUE;`.
    #[error("Invalid key-value line: {0}{1}")]
    MalformedAssignment(String, String),

    /// Assignment key already present in the document.
    #[error("Duplicate key: {0}{1}")]
    DuplicateKey(String, String),

    /// Constant name already defined.
    #[error("Duplicate constant: {0}{1}")]
    DuplicateConstant(String, String),

    /// `$name$` reference with no prior definition.
    #[error("Undefined constant: {0}{1}")]
    UndefinedConstant(String, String),

    /// Line matching none of the recognized constructs.
    #[error("Invalid line: {0}{1}")]
    UnrecognizedLine(String, String),

    /// `{-` without a matching `-}`.
    #[error("Unclosed block comment{0}")]
    UnclosedBlockComment(String),
}

impl ParseError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::MalformedConstant(..) => ErrorKind::MalformedConstant,
            ParseError::MalformedAssignment(..) => ErrorKind::MalformedAssignment,
            ParseError::DuplicateKey(..) => ErrorKind::DuplicateKey,
            ParseError::DuplicateConstant(..) => ErrorKind::DuplicateConstant,
            ParseError::UndefinedConstant(..) => ErrorKind::UndefinedConstant,
            ParseError::UnrecognizedLine(..) => ErrorKind::UnrecognizedLine,
            ParseError::UnclosedBlockComment(_) => ErrorKind::UnclosedBlockComment,
        }
    }

    /// The offending text (constant name, key, or source line).
    pub fn subject(&self) -> Option<&str> {
        match self {
            ParseError::MalformedConstant(s, _)
            | ParseError::MalformedAssignment(s, _)
            | ParseError::DuplicateKey(s, _)
            | ParseError::DuplicateConstant(s, _)
            | ParseError::UndefinedConstant(s, _)
            | ParseError::UnrecognizedLine(s, _) => Some(s),
            ParseError::UnclosedBlockComment(_) => None,
        }
    }

    /// Create an error with location information.
    pub fn with_location(self, ctx: &ParseContext, line: usize, col: usize) -> Self {
        let suffix = ctx.loc_suffix(line, col);
        match self {
            ParseError::MalformedConstant(s, _) => ParseError::MalformedConstant(s, suffix),
            ParseError::MalformedAssignment(s, _) => ParseError::MalformedAssignment(s, suffix),
            ParseError::DuplicateKey(s, _) => ParseError::DuplicateKey(s, suffix),
            ParseError::DuplicateConstant(s, _) => ParseError::DuplicateConstant(s, suffix),
            ParseError::UndefinedConstant(s, _) => ParseError::UndefinedConstant(s, suffix),
            ParseError::UnrecognizedLine(s, _) => ParseError::UnrecognizedLine(s, suffix),
            ParseError::UnclosedBlockComment(_) => ParseError::UnclosedBlockComment(suffix),
        }
    }
}
