//! Configuration type definitions and defaults

use serde::{Deserialize, Serialize};

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub pipeline: PipelineConfig,
    #[serde(default)]
    pub validator: ValidatorConfig,
}

impl Config {
    /// Check values that serde cannot reject on its own.
    pub fn validate(&self) -> Result<(), String> {
        if self.validator.command.trim().is_empty() {
            return Err("validator.command must not be empty".to_string());
        }
        if self.validator.timeout_secs == 0 {
            return Err("validator.timeout_secs must be greater than 0".to_string());
        }
        Ok(())
    }
}

/// Defaults for the pipeline flags; CLI flags override these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Wrap code in `void((function(){...})())`
    #[serde(default = "default_true")]
    pub wrap: bool,
    /// Run the external syntax check
    #[serde(default = "default_true")]
    pub check_js: bool,
    /// Fail when the syntax checker is not installed
    #[serde(default)]
    pub strict: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            wrap: true,
            check_js: true,
            strict: false,
        }
    }
}

/// External syntax checker configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValidatorConfig {
    /// Runtime executable, looked up in PATH
    #[serde(default = "default_validator_command")]
    pub command: String,
    /// Arguments placed before the script path
    #[serde(default = "default_validator_args")]
    pub args: Vec<String>,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

pub fn default_validator_command() -> String {
    "node".to_string()
}

pub fn default_validator_args() -> Vec<String> {
    vec!["--check".to_string()]
}

pub fn default_timeout_secs() -> u64 {
    10
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            command: default_validator_command(),
            args: default_validator_args(),
            timeout_secs: default_timeout_secs(),
        }
    }
}
