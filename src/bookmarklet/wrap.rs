//! Closure wrapping.

use super::Wrapped;
use crate::minify::Minified;

/// Opening half of the closure template.
pub const WRAP_PREFIX: &str = "void((function(){";

/// Closing half of the closure template.
pub const WRAP_SUFFIX: &str = "})())";

/// Wrap minified code in `void((function(){...})())`.
///
/// The closure keeps the bookmarklet's variables out of the page's global
/// scope, and `void` discards its return value so the browser does not
/// navigate to it. When `enabled` is false the code passes through unchanged.
pub fn wrap(code: Minified, enabled: bool) -> Wrapped {
    if !enabled {
        return Wrapped(code.into_string());
    }
    Wrapped(format!("{}{}{}", WRAP_PREFIX, code, WRAP_SUFFIX))
}
