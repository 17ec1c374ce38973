//! Clipboard tool abstraction.

use std::io::Write;
use std::process::{Command, Stdio};

use super::result::CopyMethod;

/// Why a single tool could not copy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CopyToolError {
    /// The tool is not installed.
    NotFound,
    /// The tool ran and failed.
    Failed(String),
}

/// A system clipboard tool that accepts text on stdin.
pub trait CopyTool {
    fn method(&self) -> CopyMethod;

    /// Whether the tool is installed and usable on this platform.
    fn is_available(&self) -> bool;

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError>;

    fn name(&self) -> &'static str {
        self.method().name()
    }
}

/// Spawn `program args...`, write `text` to its stdin and wait for it.
pub fn pipe_to_command(program: &str, args: &[&str], text: &str) -> Result<(), CopyToolError> {
    let mut child = Command::new(program)
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => CopyToolError::NotFound,
            _ => CopyToolError::Failed(e.to_string()),
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        // A tool that exits early closes the pipe; its exit status says more
        if let Err(e) = stdin.write_all(text.as_bytes()) {
            if e.kind() != std::io::ErrorKind::BrokenPipe {
                let _ = child.wait();
                return Err(CopyToolError::Failed(e.to_string()));
            }
        }
    }

    let status = child
        .wait()
        .map_err(|e| CopyToolError::Failed(e.to_string()))?;

    if status.success() {
        Ok(())
    } else {
        Err(CopyToolError::Failed(format!("{} failed", program)))
    }
}
