//! Pack command implementation: the whole pipeline

use crate::cli::commands::{resolve_directory, DEFAULT_MAX_LINES};
use crate::cli::Cli;
use crate::config::GlobalConfig;
use crate::document::{
    assemble, normalize_extensions, resolve_output_path, write_document, AssembleOptions,
    DEFAULT_OUTPUT_SUFFIX,
};
use crate::ignore::TreeScanner;
use anyhow::Result;
use bytesize::ByteSize;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::cmp::Reverse;
use std::time::Duration;
use tracing::debug;

/// Execute the pack command
pub fn execute(cli: Cli) -> Result<()> {
    let root = resolve_directory(&cli.directory)?;
    let config = GlobalConfig::load();

    let max_lines = if cli.no_limit {
        None
    } else {
        Some(
            cli.max_lines
                .or(config.core.max_lines)
                .unwrap_or(DEFAULT_MAX_LINES),
        )
    };

    let mut raw_excludes = config.filter.exclude.clone();
    raw_excludes.extend(cli.exclude.iter().cloned());
    let exclude_extensions = normalize_extensions(&raw_excludes);

    let suffix = config
        .core
        .output_suffix
        .as_deref()
        .unwrap_or(DEFAULT_OUTPUT_SUFFIX);
    let output_path = resolve_output_path(&root, cli.output.clone(), suffix);

    let spinner = if !cli.dry && !cli.quiet {
        let progress = ProgressBar::new_spinner();
        progress.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress.set_message("Scanning files...");
        progress.enable_steady_tick(Duration::from_millis(80));
        Some(progress)
    } else {
        None
    };

    let outcome = TreeScanner::new(&root)?.skip_path(&output_path).scan()?;
    debug!(
        "discovered {} files, {} excluded by ignore rules",
        outcome.stats.total_discovered, outcome.stats.total_ignored
    );

    let options = AssembleOptions {
        max_lines,
        exclude_extensions: exclude_extensions.clone(),
    };
    let document = assemble(outcome.included, &options)?;

    if let Some(progress) = spinner {
        progress.finish_and_clear();
    }

    if cli.dry {
        println!(
            "{}",
            "Dry run, listing files that would be included:".bright_blue()
        );
        println!();

        // Largest files first so the expensive inclusions stand out
        let mut listing: Vec<_> = document.entries.iter().collect();
        listing.sort_by_key(|entry| (Reverse(entry.line_count), entry.relative_path.clone()));
        for entry in listing {
            println!("{}", entry);
        }

        println!();
        println!("Total lines: {}", document.stats.total_lines);
        println!("Total files: {}", document.stats.files_included);
        match max_lines {
            Some(max) => println!("Max lines per file: {}", max),
            None => println!("Max lines per file: No limit"),
        }
        if !exclude_extensions.is_empty() {
            let joined: Vec<_> = exclude_extensions.iter().cloned().collect();
            println!("Excluded extensions: {}", joined.join(", "));
        }
        println!("Output file: {}", output_path.display());
        return Ok(());
    }

    if !cli.quiet {
        if document.stats.files_over_limit > 0 {
            println!(
                "  {} Filtered out {} files over the line limit",
                "•".cyan(),
                document.stats.files_over_limit
            );
        }
        if document.stats.files_excluded_by_extension > 0 {
            println!(
                "  {} Filtered out {} files by extension",
                "•".cyan(),
                document.stats.files_excluded_by_extension
            );
        }
        println!(
            "Writing {} files with {} lines to {}",
            document.stats.files_included,
            document.stats.total_lines,
            output_path.display()
        );
    }

    write_document(&document.entries, &output_path)?;

    if !cli.quiet {
        println!(
            "{} {} written ({})",
            "✓".green(),
            output_path.display(),
            ByteSize(document.stats.total_bytes)
        );
    }

    Ok(())
}
