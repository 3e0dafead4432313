//! Content reading and document assembly

use crate::core::types::{DocumentStats, FileEntry};
use anyhow::Result;
use std::collections::BTreeSet;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Filters applied while reading file contents
#[derive(Debug, Clone, Default)]
pub struct AssembleOptions {
    /// Maximum number of lines per file; longer files are dropped.
    /// `None` disables the limit.
    pub max_lines: Option<usize>,
    /// Normalized extensions to drop (lowercase, with leading dot)
    pub exclude_extensions: BTreeSet<String>,
}

/// The assembled document: ordered entries plus counters
#[derive(Debug)]
pub struct AssembledDocument {
    pub entries: Vec<FileEntry>,
    pub stats: DocumentStats,
}

/// Normalize user-supplied extensions to lowercase with a leading dot
///
/// Accepts both `.pyc` and `pyc` spellings.
pub fn normalize_extensions<S: AsRef<str>>(raw: &[S]) -> BTreeSet<String> {
    raw.iter()
        .map(|ext| {
            let ext = ext.as_ref().trim().to_lowercase();
            if ext.starts_with('.') {
                ext
            } else {
                format!(".{}", ext)
            }
        })
        .filter(|ext| ext.len() > 1)
        .collect()
}

/// Read the content of every included file and build the document entries
///
/// Order of the input is preserved. Unreadable or non-UTF-8 files are
/// skipped with a warning; empty and over-limit files are counted and
/// dropped.
pub fn assemble(
    files: Vec<(PathBuf, PathBuf)>,
    options: &AssembleOptions,
) -> Result<AssembledDocument> {
    let mut entries = Vec::new();
    let mut stats = DocumentStats::default();

    for (absolute, relative) in files {
        if is_excluded_extension(&relative, &options.exclude_extensions) {
            stats.files_excluded_by_extension += 1;
            continue;
        }

        let content = match fs::read_to_string(&absolute) {
            Ok(content) => content,
            Err(e) => {
                // Covers binary files too: non-UTF-8 reads fail with InvalidData
                warn!("failed to read {}: {}", absolute.display(), e);
                stats.files_unreadable += 1;
                continue;
            },
        };

        let entry = FileEntry::new(relative, absolute, content);

        if entry.line_count == 0 {
            stats.files_empty += 1;
            continue;
        }
        if let Some(max) = options.max_lines {
            if entry.line_count > max {
                debug!(
                    "{} exceeds line limit ({} > {})",
                    entry.relative_path.display(),
                    entry.line_count,
                    max
                );
                stats.files_over_limit += 1;
                continue;
            }
        }

        stats.total_lines += entry.line_count;
        stats.total_bytes += entry.content.len() as u64;
        entries.push(entry);
    }

    stats.files_included = entries.len();
    Ok(AssembledDocument { entries, stats })
}

fn is_excluded_extension(relative: &std::path::Path, excluded: &BTreeSet<String>) -> bool {
    if excluded.is_empty() {
        return false;
    }
    relative
        .extension()
        .map(|ext| excluded.contains(&format!(".{}", ext.to_string_lossy().to_lowercase())))
        .unwrap_or(false)
}
