//! CLI definitions for minifylet
//!
//! This module contains the clap CLI structure definitions, separated from main.rs
//! so they can be accessed by xtask for documentation generation (man pages, markdown).

use clap::builder::styling::{AnsiColor, Effects, Styles};
use clap::Parser;
use std::path::PathBuf;

/// Build clap styles.
///
/// - Green: headers, usage, flag names
/// - White: descriptions, placeholders (renders as light gray on dark terminals)
pub fn build_cli_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Green.on_default() | Effects::BOLD)
        .usage(AnsiColor::Green.on_default() | Effects::BOLD)
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::White.on_default())
        .valid(AnsiColor::White.on_default())
        .invalid(AnsiColor::Red.on_default())
        .error(AnsiColor::Red.on_default() | Effects::BOLD)
}

#[derive(Parser, Debug)]
#[command(name = "minifylet")]
#[command(about = "Minify JavaScript into a javascript: bookmarklet URL")]
#[command(
    long_about = "minifylet - Minify JavaScript into a javascript: bookmarklet URL.

Strips comments and whitespace, wraps the code in a closure so it does not
replace the current page, checks the syntax with Node.js when available,
and percent-encodes the result for use as a bookmark URL.

EXAMPLES:
    minifylet script.js                  Print the bookmarklet URL
    minifylet script.js bookmarklet.txt  Write the URL to a file
    cat script.js | minifylet -C         Read stdin, also copy to clipboard
    minifylet --no-wrap --no-check-js script.js

CONFIGURATION:
    Defaults are read from ~/.config/minifylet/config.toml.
    Command-line flags override the config file."
)]
#[command(version)]
#[command(styles = build_cli_styles())]
pub struct Cli {
    /// JavaScript source file ('-' or omitted reads stdin)
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file for the URL ('-' or omitted writes stdout)
    #[arg(value_name = "OUTPUT")]
    pub output: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Also copy the bookmarklet URL to the clipboard
    #[arg(short = 'C', long)]
    pub clipboard: bool,

    /// Check the minified code with Node.js
    #[arg(long, overrides_with = "no_check_js")]
    pub check_js: bool,

    /// Skip the syntax check
    #[arg(long, overrides_with = "check_js")]
    pub no_check_js: bool,

    /// Wrap the code in void((function(){...})())
    #[arg(long, overrides_with = "no_wrap")]
    pub wrap: bool,

    /// Emit the minified code without a closure
    #[arg(long, overrides_with = "wrap")]
    pub no_wrap: bool,

    /// Fail if the syntax checker is not installed
    #[arg(long)]
    pub strict: bool,

    /// Read configuration from this file instead of the default location
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

/// `Some(true)` for `--flag`, `Some(false)` for `--no-flag`, `None` if neither.
fn paired_flag(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

impl Cli {
    pub fn check_js_flag(&self) -> Option<bool> {
        paired_flag(self.check_js, self.no_check_js)
    }

    pub fn wrap_flag(&self) -> Option<bool> {
        paired_flag(self.wrap, self.no_wrap)
    }

    pub fn strict_flag(&self) -> Option<bool> {
        self.strict.then_some(true)
    }
}
