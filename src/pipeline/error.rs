//! Pipeline failure modes.

use thiserror::Error;

use crate::minify::MalformedSourceError;

/// Errors that abort the pipeline before any output is produced.
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error(transparent)]
    Malformed(#[from] MalformedSourceError),

    #[error("Syntax error in minified code ({validator}):\n{diagnostic}")]
    Validation {
        validator: String,
        diagnostic: String,
    },

    #[error(
        "Syntax checker '{validator}' is not installed. Install it, or pass --no-check-js to skip the check."
    )]
    ValidatorUnavailable { validator: String },

    #[error("Syntax checker '{validator}' failed: {reason}")]
    ValidatorFailed { validator: String, reason: String },
}

impl PipelineError {
    /// Short category name for log output.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Malformed(_) => "malformed-source",
            PipelineError::Validation { .. } => "validation",
            PipelineError::ValidatorUnavailable { .. } => "validator-unavailable",
            PipelineError::ValidatorFailed { .. } => "validator-failed",
        }
    }
}
