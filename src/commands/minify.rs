//! Minify command handler

use anyhow::Result;
use tracing::{debug, info, warn};

use minifylet::cli::Cli;
use minifylet::clipboard::copy_text_to_clipboard;
use minifylet::config::Config;
use minifylet::pipeline::{Pipeline, PipelineOptions};
use minifylet::source::{Destination, Input};
use minifylet::validate::NodeValidator;

/// Load the config named by `--config`, or the default one.
fn load_config(cli: &Cli) -> Result<Config> {
    match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
}

/// Merge CLI flags over config defaults.
pub fn resolve_options(cli: &Cli, config: &Config) -> PipelineOptions {
    PipelineOptions {
        wrap: cli.wrap_flag().unwrap_or(config.pipeline.wrap),
        check: cli.check_js_flag().unwrap_or(config.pipeline.check_js),
        strict: cli.strict_flag().unwrap_or(config.pipeline.strict),
    }
}

/// Read the source, run the pipeline and deliver the URL.
///
/// Nothing is written until the pipeline has succeeded.
#[cfg(not(tarpaulin_include))]
pub fn handle(cli: &Cli) -> Result<()> {
    let config = load_config(cli)?;
    let options = resolve_options(cli, &config);
    debug!("Pipeline options: {:?}", options);

    let input = Input::from_arg(cli.input.as_deref());
    let destination = Destination::from_arg(cli.output.as_deref());

    let source = input.read()?;

    let validator = NodeValidator::from_config(&config.validator);
    let pipeline = Pipeline::with_validator(options, Box::new(validator));
    let output = pipeline.run(&source).map_err(|e| {
        debug!("Pipeline failed ({})", e.kind());
        e
    })?;
    let url = output.url();

    destination.write(&url)?;
    if !destination.is_stdout() {
        info!("Success! Bookmarklet is {} characters long.", url.len());
        eprintln!("Copy the content below into your bookmark URL:");
        println!("{}", url);
    }

    if cli.clipboard {
        match copy_text_to_clipboard(&url) {
            Ok(result) => info!("{}", result.message()),
            Err(e) => warn!("Could not copy to clipboard: {}", e),
        }
    }

    Ok(())
}
