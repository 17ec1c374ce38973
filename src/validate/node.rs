//! Node.js syntax check backend.
//!
//! Runs `node --check <file>` on a temporary `.js` file. Any runtime with a
//! compatible "check only" flag can be configured instead (e.g. `deno check`).

use std::io::Write;
use std::process::{Command, Stdio};
use std::time::Duration;

use tracing::debug;

use super::process::{command_exists, wait_with_timeout};
use super::{ValidationError, Validator};
use crate::config::ValidatorConfig;

/// Validator that shells out to a JavaScript runtime.
#[derive(Debug, Clone)]
pub struct NodeValidator {
    command: String,
    args: Vec<String>,
    timeout: Duration,
}

impl NodeValidator {
    /// Default `node --check` with a 10 second timeout.
    pub fn new() -> Self {
        Self::from_config(&ValidatorConfig::default())
    }

    pub fn from_config(config: &ValidatorConfig) -> Self {
        Self {
            command: config.command.clone(),
            args: config.args.clone(),
            timeout: Duration::from_secs(config.timeout_secs),
        }
    }

    /// Command line that will be run for a given script path (for logging).
    pub fn command_line(&self, script: &str) -> String {
        let mut parts = vec![self.command.clone()];
        parts.extend(self.args.iter().cloned());
        parts.push(script.to_string());
        parts.join(" ")
    }

    fn write_script(code: &str) -> std::io::Result<tempfile::NamedTempFile> {
        let mut file = tempfile::Builder::new()
            .prefix("minifylet-")
            .suffix(".js")
            .tempfile()?;
        file.write_all(code.as_bytes())?;
        file.flush()?;
        Ok(file)
    }
}

impl Validator for NodeValidator {
    fn name(&self) -> &str {
        &self.command
    }

    fn is_available(&self) -> bool {
        command_exists(&self.command)
    }

    fn check(&self, code: &str) -> Result<(), ValidationError> {
        if !self.is_available() {
            return Err(ValidationError::Unavailable {
                command: self.command.clone(),
            });
        }

        // Removed when `script` is dropped
        let script = Self::write_script(code)?;
        let script_path = script.path().to_string_lossy().to_string();
        debug!("Running {}", self.command_line(&script_path));

        let spawned = Command::new(&self.command)
            .args(&self.args)
            .arg(script.path())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn();

        let mut child = match spawned {
            Ok(child) => child,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                return Err(ValidationError::Unavailable {
                    command: self.command.clone(),
                });
            }
            Err(e) => return Err(ValidationError::Io(e)),
        };

        let output = match wait_with_timeout(&mut child, self.timeout) {
            Ok(output) => output,
            Err(e) if e.kind() == std::io::ErrorKind::TimedOut => {
                return Err(ValidationError::Timeout(self.timeout));
            }
            Err(e) => return Err(ValidationError::Io(e)),
        };

        if output.status.success() {
            return Ok(());
        }

        let stderr = String::from_utf8_lossy(&output.stderr);
        let diagnostic = if stderr.trim().is_empty() {
            format!("{} exited with code {}", self.command, exit_code(&output))
        } else {
            stderr.trim().replace(&script_path, "<bookmarklet>")
        };
        Err(ValidationError::Rejected { diagnostic })
    }
}

impl Default for NodeValidator {
    fn default() -> Self {
        Self::new()
    }
}

fn exit_code(output: &std::process::Output) -> i32 {
    output.status.code().unwrap_or(-1)
}
