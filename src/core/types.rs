//! Core data types for to-doc

use std::fmt;
use std::path::PathBuf;

/// A file selected for inclusion in the output document
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntry {
    /// Path relative to the packed directory root
    pub relative_path: PathBuf,
    /// Absolute path on disk
    pub absolute_path: PathBuf,
    /// Number of lines in the file's content
    pub line_count: usize,
    /// The file's UTF-8 content
    pub content: String,
}

impl FileEntry {
    pub fn new(
        relative_path: PathBuf,
        absolute_path: PathBuf,
        content: String,
    ) -> Self {
        let line_count = content.lines().count();
        Self {
            relative_path,
            absolute_path,
            line_count,
            content,
        }
    }
}

impl fmt::Display for FileEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({} lines)",
            self.relative_path.display(),
            self.line_count
        )
    }
}

/// Statistics gathered while assembling the output document
#[derive(Debug, Clone, Default)]
pub struct DocumentStats {
    /// Files included in the document
    pub files_included: usize,
    /// Files excluded by ignore patterns
    pub files_ignored: usize,
    /// Files filtered out by the line limit
    pub files_over_limit: usize,
    /// Files filtered out by extension
    pub files_excluded_by_extension: usize,
    /// Unreadable or non-UTF-8 files that were skipped
    pub files_unreadable: usize,
    /// Empty files that were skipped
    pub files_empty: usize,
    /// Total lines across included files
    pub total_lines: usize,
    /// Total bytes across included files
    pub total_bytes: u64,
}
