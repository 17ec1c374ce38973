//! Bookmarklet assembly: closure wrapping and URL-safe encoding.
//!
//! Each stage returns its own type so the pipeline order is enforced by the
//! compiler: [`Minified`](crate::minify::Minified) → [`Wrapped`] → [`Encoded`].

pub mod encode;
pub mod wrap;

pub use encode::encode;
pub use wrap::wrap;

use std::fmt;

/// URL scheme that turns the encoded code into a bookmarklet.
pub const JAVASCRIPT_SCHEME: &str = "javascript:";

/// Minified code, possibly wrapped in a closure. Still readable JavaScript.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Wrapped(String);

impl Wrapped {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Wrapped {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Percent-encoded code, ready to follow `javascript:`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Encoded(String);

impl Encoded {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_string(self) -> String {
        self.0
    }

    /// The full bookmarklet URL.
    pub fn url(&self) -> String {
        format!("{}{}", JAVASCRIPT_SCHEME, self.0)
    }
}

impl fmt::Display for Encoded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
