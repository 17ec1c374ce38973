//! JavaScript minification for bookmarklets
//!
//! Strips comments and collapses whitespace without touching the contents of
//! string, template or regular-expression literals.
//!
//! # Architecture
//!
//! A single pass over the source characters:
//! 1. **Scanner** - tracks the lexical context (code, string, template,
//!    interpolation, regex, comment) and copies literals verbatim
//! 2. **Token memory** - remembers the last significant token, which decides
//!    whether `/` opens a regex and whether a line break may be dropped
//! 3. **Spacing** - turns each whitespace/comment gap into nothing, a space
//!    or a newline
//!
//! # Safety Rules
//!
//! - Word boundaries preserved: `return x` not `returnx`
//! - Operators that would merge keep a space: `a+ +b`, `a/ /re/`
//! - Newlines are never replaced by `;`
//! - A newline is only removed where automatic semicolon insertion cannot
//!   depend on it (`return\n(x)` keeps it)
//! - Unterminated literals and comments are errors, never truncated output

mod error;
mod scanner;
mod spacing;
mod token;

pub use error::{LiteralKind, MalformedSourceError};

use std::fmt;

/// JavaScript with comments removed and whitespace reduced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Minified(String);

impl Minified {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for Minified {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip comments and non-significant whitespace from JavaScript source.
///
/// A leading `javascript:` prefix is dropped so that an existing
/// bookmarklet can be fed back in.
///
/// # Errors
/// `MalformedSourceError` if the input ends inside a string, template,
/// regex literal or block comment.
///
/// # Example
/// ```
/// use minifylet::minify;
/// let output = minify::strip("if ( x == 1 ) { y = 2; }").unwrap();
/// assert_eq!(output.as_str(), "if(x==1){y=2;}");
/// ```
pub fn strip(source: &str) -> Result<Minified, MalformedSourceError> {
    scanner::Scanner::new(source).run().map(Minified)
}
