//! Command-line interface for to-doc

use clap::Parser;
use std::path::PathBuf;

pub mod commands;

/// to-doc - Pack a directory tree into one document
#[derive(Parser, Debug)]
#[command(
    name = "to-doc",
    version,
    about = "Concatenate a directory tree into a single document for LLM context",
    long_about = "to-doc walks a directory tree, drops files matched by the \
.docignore rules at its root, and concatenates the remaining files into one \
UTF-8 document with a relative-path header above each file."
)]
pub struct Cli {
    /// Directory to pack
    #[arg(value_name = "DIRECTORY", default_value = ".")]
    pub directory: PathBuf,

    /// Output file path (default: <directory-name>-llms.log inside the directory)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// List the files that would be included without writing anything
    #[arg(long)]
    pub dry: bool,

    /// Maximum number of lines per file (longer files are filtered out)
    #[arg(long, value_name = "N")]
    pub max_lines: Option<usize>,

    /// Disable the per-file line limit
    #[arg(long, conflicts_with = "max_lines")]
    pub no_limit: bool,

    /// File extensions to exclude (e.g. --exclude .pyc --exclude log)
    #[arg(long = "exclude", value_name = "EXT")]
    pub exclude: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,
}
