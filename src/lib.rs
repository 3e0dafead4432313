//! to-doc - Pack a directory tree into a single document
//!
//! to-doc walks a directory tree, filters files through `.docignore`
//! glob rules, and concatenates the survivors into one UTF-8 document
//! intended as LLM context.
//!
//! # Core Features
//!
//! - **Ignore rules**: gitignore-style `.docignore` patterns with negation
//!   and directory-only matching
//! - **Deterministic output**: entries ordered lexicographically by
//!   relative path, byte-identical across reruns
//! - **Graceful skipping**: binary, unreadable, empty, and over-limit
//!   files are dropped with a warning instead of aborting
//! - **Dry mode**: preview the inclusion list without touching the disk
//!
//! # Example Usage
//!
//! ```rust,no_run
//! use to_doc::document::{assemble, write_document, AssembleOptions};
//! use to_doc::ignore::TreeScanner;
//! use std::path::Path;
//!
//! let root = Path::new("./my-project");
//! let outcome = TreeScanner::new(root)?.scan()?;
//! let document = assemble(outcome.included, &AssembleOptions::default())?;
//! write_document(&document.entries, Path::new("my-project-llms.log"))?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod document;
pub mod ignore;

// Re-export commonly used types
pub use core::{
    error::{Result, ToDocError},
    types::{DocumentStats, FileEntry},
};
pub use ignore::{IgnoreRuleSet, TreeScanner, IGNORE_FILE_NAME};
