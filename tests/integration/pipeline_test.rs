//! Integration tests for the pipeline orchestrator.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use super::helpers::load_fixture;
use minifylet::config::ValidatorConfig;
use minifylet::pipeline::{self, Pipeline, PipelineError, PipelineOptions};
use minifylet::validate::{NodeValidator, ValidationError, Validator};

/// A validator that always gives the same answer and counts its calls.
struct MockValidator {
    available: bool,
    reject_with: Option<String>,
    calls: Arc<AtomicUsize>,
}

impl MockValidator {
    fn accepting() -> Self {
        Self {
            available: true,
            reject_with: None,
            calls: Arc::new(AtomicUsize::new(0)),
        }
    }

    fn rejecting(diagnostic: &str) -> Self {
        Self {
            reject_with: Some(diagnostic.to_string()),
            ..Self::accepting()
        }
    }

    fn missing() -> Self {
        Self {
            available: false,
            ..Self::accepting()
        }
    }

    fn counter(&self) -> Arc<AtomicUsize> {
        Arc::clone(&self.calls)
    }
}

impl Validator for MockValidator {
    fn name(&self) -> &str {
        "mock-node"
    }

    fn is_available(&self) -> bool {
        self.available
    }

    fn check(&self, _code: &str) -> Result<(), ValidationError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if !self.available {
            return Err(ValidationError::Unavailable {
                command: self.name().to_string(),
            });
        }
        match &self.reject_with {
            Some(diagnostic) => Err(ValidationError::Rejected {
                diagnostic: diagnostic.clone(),
            }),
            None => Ok(()),
        }
    }
}

fn options(wrap: bool, check: bool, strict: bool) -> PipelineOptions {
    PipelineOptions {
        wrap,
        check,
        strict,
    }
}

#[test]
fn accepted_fixture_produces_url() {
    let validator = MockValidator::accepting();
    let calls = validator.counter();
    let pipeline = Pipeline::with_validator(options(false, true, false), Box::new(validator));

    let output = pipeline.run(&load_fixture("word_count.js")).unwrap();
    assert!(output.warnings.is_empty());
    assert!(output.url().starts_with("javascript:var%20text=String("));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn rejection_carries_validator_and_diagnostic() {
    let pipeline = Pipeline::with_validator(
        PipelineOptions::default(),
        Box::new(MockValidator::rejecting("SyntaxError: missing ) after argument list")),
    );

    match pipeline.run("alert(1)") {
        Err(PipelineError::Validation {
            validator,
            diagnostic,
        }) => {
            assert_eq!(validator, "mock-node");
            assert!(diagnostic.contains("missing )"));
        }
        other => panic!("expected validation error, got {:?}", other.map(|o| o.url())),
    }
}

#[test]
fn missing_validator_is_skipped_by_default() {
    let pipeline =
        Pipeline::with_validator(PipelineOptions::default(), Box::new(MockValidator::missing()));
    let output = pipeline.run("alert(1)").unwrap();
    assert_eq!(output.url(), "javascript:void((function(){alert(1)})())");
    assert_eq!(
        output.warnings,
        vec!["mock-node is not installed. Skipping syntax check.".to_string()]
    );
}

#[test]
fn missing_validator_fails_in_strict_mode() {
    let pipeline = Pipeline::with_validator(
        options(true, true, true),
        Box::new(MockValidator::missing()),
    );
    let err = pipeline.run("alert(1)").unwrap_err();
    assert!(matches!(err, PipelineError::ValidatorUnavailable { .. }));
    assert!(err.to_string().contains("--no-check-js"));
}

#[test]
fn malformed_source_never_reaches_validator() {
    let validator = MockValidator::accepting();
    let calls = validator.counter();
    let pipeline = Pipeline::with_validator(PipelineOptions::default(), Box::new(validator));

    let err = pipeline.run(&load_fixture("unterminated_string.js")).unwrap_err();
    assert_eq!(err.kind(), "malformed-source");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[test]
fn one_shot_run_matches_pipeline() {
    let encoded = pipeline::run(&load_fixture("word_count.js"), false, false).unwrap();
    let expected = Pipeline::with_validator(
        options(false, false, false),
        Box::new(MockValidator::accepting()),
    )
    .run(&load_fixture("word_count.js"))
    .unwrap();
    assert_eq!(encoded, expected.encoded);
}

#[test]
fn unknown_runtime_is_unavailable() {
    let config = ValidatorConfig {
        command: "minifylet-test-no-such-runtime".to_string(),
        ..ValidatorConfig::default()
    };
    let pipeline = Pipeline::with_validator(
        options(true, true, true),
        Box::new(NodeValidator::from_config(&config)),
    );
    let err = pipeline.run("alert(1)").unwrap_err();
    assert!(matches!(
        err,
        PipelineError::ValidatorUnavailable { validator } if validator == "minifylet-test-no-such-runtime"
    ));
}

#[cfg(unix)]
mod shell_runtime {
    use super::*;

    /// A stand-in runtime: `sh -c <script> sh <file>`, so `$1` is the file.
    fn shell_validator(script: &str, timeout_secs: u64) -> Box<dyn Validator> {
        let config = ValidatorConfig {
            command: "sh".to_string(),
            args: vec!["-c".to_string(), script.to_string(), "sh".to_string()],
            timeout_secs,
        };
        Box::new(NodeValidator::from_config(&config))
    }

    #[test]
    fn runtime_receives_readable_code() {
        // Fails unless the file holds the unencoded, wrapped code
        let script = r#"grep -qF "void((function(){alert('a b')})())" "$1""#;
        let pipeline =
            Pipeline::with_validator(PipelineOptions::default(), shell_validator(script, 10));
        let output = pipeline.run("alert( 'a b' )").unwrap();
        assert_eq!(
            output.url(),
            "javascript:void((function(){alert('a%20b')})())"
        );
    }

    #[test]
    fn runtime_stderr_becomes_diagnostic() {
        let script = r#"echo "$1:1 SyntaxError: Unexpected token" >&2; exit 1"#;
        let pipeline =
            Pipeline::with_validator(PipelineOptions::default(), shell_validator(script, 10));
        match pipeline.run("alert(1)").unwrap_err() {
            PipelineError::Validation { diagnostic, .. } => {
                assert_eq!(diagnostic, "<bookmarklet>:1 SyntaxError: Unexpected token");
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn long_diagnostic_is_rejection_not_timeout() {
        let script = r#"head -c 200000 /dev/zero | tr '\0' x >&2; exit 1"#;
        let pipeline =
            Pipeline::with_validator(PipelineOptions::default(), shell_validator(script, 3));
        match pipeline.run("alert(1)").unwrap_err() {
            PipelineError::Validation { diagnostic, .. } => {
                assert_eq!(diagnostic.len(), 200_000);
            }
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn slow_runtime_times_out() {
        let pipeline =
            Pipeline::with_validator(PipelineOptions::default(), shell_validator("sleep 5", 1));
        let err = pipeline.run("alert(1)").unwrap_err();
        assert!(matches!(err, PipelineError::ValidatorFailed { .. }));
        assert!(err.to_string().contains("timed out"));
    }
}
