//! to-doc CLI
//!
//! Command-line entry point: concatenate a directory tree into a single
//! document for LLM context.

use anyhow::Result;
use clap::Parser;
use to_doc::cli::{commands, Cli};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging; RUST_LOG overrides the flag-derived default
    let default_filter = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "error"
    } else {
        "info"
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    commands::pack::execute(cli)
}
