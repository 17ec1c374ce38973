//! minifylet - CLI entry point

mod commands;

use anyhow::Result;
use clap::Parser;

use minifylet::cli::Cli;

fn main() -> Result<()> {
    let cli = Cli::parse();
    minifylet::logging::init(cli.verbose);
    commands::minify::handle(&cli)
}
