//! Bookmarklet pipeline orchestration.
//!
//! Composes the stages in a fixed order:
//! 1. **Strip** - remove comments and whitespace ([`crate::minify`])
//! 2. **Wrap** - optional closure ([`crate::bookmarklet::wrap`])
//! 3. **Validate** - optional external syntax check on the readable code
//! 4. **Encode** - percent-encode for the URL ([`crate::bookmarklet::encode`])
//!
//! Validation runs before encoding because the external checker parses
//! JavaScript, not percent-encoded text.

mod error;

pub use error::PipelineError;

use tracing::{debug, warn};

use crate::bookmarklet::{encode, wrap, Encoded, Wrapped};
use crate::minify;
use crate::validate::{NodeValidator, ValidationError, Validator};

/// Which optional stages to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineOptions {
    /// Wrap the code in `void((function(){...})())`.
    pub wrap: bool,
    /// Run the external syntax check.
    pub check: bool,
    /// Treat a missing syntax checker as an error instead of skipping it.
    pub strict: bool,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            wrap: true,
            check: true,
            strict: false,
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone)]
pub struct Output {
    pub encoded: Encoded,
    /// Non-fatal problems, such as a skipped syntax check.
    pub warnings: Vec<String>,
}

impl Output {
    /// The `javascript:` URL to write out.
    pub fn url(&self) -> String {
        self.encoded.url()
    }
}

/// Runs source text through every stage.
pub struct Pipeline {
    options: PipelineOptions,
    validator: Box<dyn Validator>,
}

impl Pipeline {
    /// Create with the default `node --check` validator.
    pub fn new(options: PipelineOptions) -> Self {
        Self::with_validator(options, Box::new(NodeValidator::new()))
    }

    /// Create with a specific validator (for testing or other runtimes).
    pub fn with_validator(options: PipelineOptions, validator: Box<dyn Validator>) -> Self {
        Self { options, validator }
    }

    /// Minify, wrap, validate and encode `source`.
    ///
    /// # Errors
    /// - `PipelineError::Malformed` - unterminated literal or comment
    /// - `PipelineError::Validation` - the validator rejected the code
    /// - `PipelineError::ValidatorUnavailable` - no runtime and `strict` is set
    /// - `PipelineError::ValidatorFailed` - the runtime timed out or could not run
    pub fn run(&self, source: &str) -> Result<Output, PipelineError> {
        let minified = minify::strip(source)?;
        debug!(
            "Minified {} bytes of source to {} bytes",
            source.len(),
            minified.len()
        );

        let wrapped = wrap(minified, self.options.wrap);
        let mut warnings = Vec::new();

        if self.options.check {
            if let Some(warning) = self.validate(&wrapped)? {
                warn!("{}", warning);
                warnings.push(warning);
            }
        }

        let encoded = encode(&wrapped);
        debug!("Encoded bookmarklet is {} bytes", encoded.as_str().len());
        Ok(Output { encoded, warnings })
    }

    /// Run the validator; a skipped check comes back as a warning.
    fn validate(&self, code: &Wrapped) -> Result<Option<String>, PipelineError> {
        let validator = self.validator.name().to_string();
        debug!("Checking syntax with {}", validator);

        match self.validator.check(code.as_str()) {
            Ok(()) => {
                debug!("Syntax check passed");
                Ok(None)
            }
            Err(ValidationError::Rejected { diagnostic }) => Err(PipelineError::Validation {
                validator,
                diagnostic,
            }),
            Err(ValidationError::Unavailable { .. }) if self.options.strict => {
                Err(PipelineError::ValidatorUnavailable { validator })
            }
            Err(ValidationError::Unavailable { .. }) => Ok(Some(format!(
                "{} is not installed. Skipping syntax check.",
                validator
            ))),
            Err(e) => Err(PipelineError::ValidatorFailed {
                validator,
                reason: e.to_string(),
            }),
        }
    }
}

/// One-shot run with the default validator in non-strict mode.
pub fn run(source: &str, wrap_enabled: bool, check_enabled: bool) -> Result<Encoded, PipelineError> {
    let options = PipelineOptions {
        wrap: wrap_enabled,
        check: check_enabled,
        strict: false,
    };
    Pipeline::new(options).run(source).map(|output| output.encoded)
}
