//! Reading source text and writing the finished bookmarklet.
//!
//! `-` or an absent path means stdin for input and stdout for output.

use anyhow::{Context, Result};
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};
use tracing::info;

/// Where source text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Stdin,
    File(PathBuf),
}

/// Where the URL goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Destination {
    Stdout,
    File(PathBuf),
}

fn is_stdio(path: &Path) -> bool {
    path.as_os_str() == "-"
}

impl Input {
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if !is_stdio(path) => Input::File(path.to_path_buf()),
            _ => Input::Stdin,
        }
    }

    /// Read the whole input as UTF-8.
    pub fn read(&self) -> Result<String> {
        match self {
            Input::File(path) => {
                info!("Reading from {}", path.display());
                fs::read_to_string(path)
                    .with_context(|| format!("Failed to read input file: {}", path.display()))
            }
            Input::Stdin => {
                if atty::is(atty::Stream::Stdin) {
                    info!("Reading JavaScript from stdin (end with Ctrl-D)");
                } else {
                    info!("Reading from stdin");
                }
                let mut buf = String::new();
                io::stdin()
                    .read_to_string(&mut buf)
                    .context("Failed to read from stdin")?;
                Ok(buf)
            }
        }
    }
}

impl Destination {
    pub fn from_arg(arg: Option<&Path>) -> Self {
        match arg {
            Some(path) if !is_stdio(path) => Destination::File(path.to_path_buf()),
            _ => Destination::Stdout,
        }
    }

    pub fn is_stdout(&self) -> bool {
        matches!(self, Destination::Stdout)
    }

    /// Write `url` followed by a newline.
    pub fn write(&self, url: &str) -> Result<()> {
        match self {
            Destination::File(path) => {
                info!("Writing to {}", path.display());
                fs::write(path, format!("{}\n", url))
                    .with_context(|| format!("Failed to write output file: {}", path.display()))
            }
            Destination::Stdout => {
                let stdout = io::stdout();
                let mut handle = stdout.lock();
                writeln!(handle, "{}", url).context("Failed to write to stdout")?;
                handle.flush().context("Failed to write to stdout")
            }
        }
    }
}
