//! CLI command implementations

pub mod pack;

// Common utilities for commands
use crate::core::error::{Result, ToDocError};
use std::path::{Path, PathBuf};

/// Built-in default for the per-file line limit
pub const DEFAULT_MAX_LINES: usize = 2000;

/// Validate the directory argument
///
/// The path must exist and be a directory; anything else is the usage
/// error that exits non-zero.
pub fn resolve_directory(path: &Path) -> Result<PathBuf> {
    if !path.is_dir() {
        return Err(ToDocError::not_a_directory(path.to_path_buf()));
    }
    Ok(path.to_path_buf())
}
