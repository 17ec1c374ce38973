//! Windows clip.exe clipboard tool.

use crate::clipboard::result::CopyMethod;
use crate::clipboard::tool::{pipe_to_command, CopyTool, CopyToolError};

pub struct Clip;

impl Clip {
    pub fn new() -> Self {
        Self
    }
}

impl CopyTool for Clip {
    fn method(&self) -> CopyMethod {
        CopyMethod::Clip
    }

    fn is_available(&self) -> bool {
        cfg!(target_os = "windows")
    }

    fn try_copy_text(&self, text: &str) -> Result<(), CopyToolError> {
        pipe_to_command("clip", &[], text)
    }
}

impl Default for Clip {
    fn default() -> Self {
        Self::new()
    }
}
