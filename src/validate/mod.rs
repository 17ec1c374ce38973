//! External syntax validation.
//!
//! The minifier has no JavaScript parser of its own. Validation is delegated
//! to an external runtime, used as an oracle that accepts or rejects the
//! readable (not yet percent-encoded) bookmarklet code.
//!
//! A missing runtime is reported as [`ValidationError::Unavailable`], which
//! the pipeline keeps separate from a syntax rejection.

mod node;
pub mod process;

pub use node::NodeValidator;

use std::time::Duration;
use thiserror::Error;

/// Errors from a validator run.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("JavaScript runtime '{command}' not found in PATH")]
    Unavailable { command: String },

    #[error("Syntax error in minified code:\n{diagnostic}")]
    Rejected { diagnostic: String },

    #[error("Syntax check timed out after {0:?}")]
    Timeout(Duration),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A JavaScript syntax oracle.
pub trait Validator {
    /// Human-readable name for logging.
    fn name(&self) -> &str;

    /// Check if the runtime is installed.
    fn is_available(&self) -> bool;

    /// Accept (`Ok`) or reject the given code.
    fn check(&self, code: &str) -> Result<(), ValidationError>;
}
