//! Command handlers for the minifylet CLI.
//!
//! The binary has a single command; `minify` holds its handler and the
//! logic that merges CLI flags over the config file.

pub mod minify;
