//! Errors raised while scanning JavaScript source.

use std::fmt;

/// The construct that was still open when the input ran out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralKind {
    String,
    Template,
    Regex,
    BlockComment,
}

impl fmt::Display for LiteralKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralKind::String => write!(f, "string literal"),
            LiteralKind::Template => write!(f, "template literal"),
            LiteralKind::Regex => write!(f, "regular expression literal"),
            LiteralKind::BlockComment => write!(f, "block comment"),
        }
    }
}

/// Source could not be minified without corrupting it.
///
/// `line` and `column` are 1-based and point at the character that opened
/// the unterminated construct.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Malformed source: unterminated {kind} starting at line {line}, column {column}")]
pub struct MalformedSourceError {
    pub kind: LiteralKind,
    pub line: usize,
    pub column: usize,
}
