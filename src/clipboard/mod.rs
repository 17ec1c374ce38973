//! Clipboard support for finished bookmarklets.
//!
//! Hands the `javascript:` URL to the first installed system clipboard
//! tool (pbcopy on macOS, wl-copy/xclip/xsel on Linux, clip on Windows).
//!
//! # Example
//!
//! ```ignore
//! use minifylet::clipboard::copy_text_to_clipboard;
//!
//! let result = copy_text_to_clipboard("javascript:alert(1)")?;
//! println!("{}", result.message());
//! ```

pub mod copy;
mod error;
mod result;
pub mod tool;
pub mod tools;

pub use error::ClipboardError;
pub use result::{CopyMethod, CopyResult};

use copy::Copy;

/// Copy text to the system clipboard.
///
/// # Errors
/// - `ClipboardError::NoToolAvailable` - no clipboard tool found or every tool failed
/// - `ClipboardError::UnsupportedPlatform` - no tools exist for this OS
pub fn copy_text_to_clipboard(text: &str) -> Result<CopyResult, ClipboardError> {
    Copy::new().text(text)
}
