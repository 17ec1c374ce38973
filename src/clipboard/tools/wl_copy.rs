//! Wayland wl-copy clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{pipe_to_command, CopyTool, CopyToolError};
use crate::validate::process::command_exists;

/// Wayland clipboard tool from wl-clipboard.
///
/// Only offered when `WAYLAND_DISPLAY` is set, since wl-copy fails
/// outright under a plain X11 session.
pub struct WlCopy;

impl WlCopy {
    pub fn new() -> Self {
        Self
    }

    fn in_wayland_session() -> bool {
        std::env::var_os("WAYLAND_DISPLAY").is_some_and(|v| !v.is_empty())
    }
}

impl CopyTool for WlCopy {
    fn method(&self) -> CopyMethod {
        CopyMethod::WlCopy
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "linux") && Self::in_wayland_session() && command_exists("wl-copy")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_to_command("wl-copy", &[], text)
    }
}

impl Default for WlCopy {
    fn default() -> Self {
        Self::new()
    }
}
