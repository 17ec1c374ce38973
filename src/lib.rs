//! minifylet library
//!
//! Turns JavaScript source into a `javascript:` bookmarklet URL: strip
//! comments and whitespace, optionally wrap in a closure, optionally check
//! the syntax with an external runtime, then percent-encode.
//!
//! ```
//! use minifylet::pipeline;
//!
//! let encoded = pipeline::run("alert( 'hi' ); // greet", true, false).unwrap();
//! assert_eq!(encoded.url(), "javascript:void((function(){alert('hi');})())");
//! ```

pub mod bookmarklet;
pub mod cli;
pub mod clipboard;
pub mod config;
pub mod logging;
pub mod minify;
pub mod pipeline;
pub mod source;
pub mod validate;

pub use bookmarklet::{Encoded, Wrapped};
pub use config::Config;
pub use minify::{strip, Minified};
pub use pipeline::{Pipeline, PipelineError, PipelineOptions};
