//! Directory traversal with .docignore filtering

use crate::ignore::parser::{IgnoreRuleSet, IGNORE_FILE_NAME};
use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::warn;
use walkdir::WalkDir;

/// Statistics from a traversal
#[derive(Debug, Clone, Default)]
pub struct ScanStats {
    /// Total regular files discovered
    pub total_discovered: usize,
    /// Files that passed filtering
    pub total_included: usize,
    /// Files excluded by ignore patterns
    pub total_ignored: usize,
}

/// Result of a filtered traversal
#[derive(Debug)]
pub struct ScanOutcome {
    /// Included files as (absolute, root-relative) pairs, in lexicographic
    /// order of the relative path
    pub included: Vec<(PathBuf, PathBuf)>,
    /// Excluded files and the pattern that matched each
    pub ignored: Vec<(PathBuf, String)>,
    pub stats: ScanStats,
}

/// Recursive file scanner rooted at the target directory
///
/// Walks the tree once, applies the ignore rules, and yields a sorted list
/// of surviving files. The ignore file itself and any explicitly skipped
/// paths (the output document) never appear in the results.
pub struct TreeScanner {
    root: PathBuf,
    rules: IgnoreRuleSet,
    follow_links: bool,
    max_depth: Option<usize>,
    skip_paths: Vec<PathBuf>,
}

impl TreeScanner {
    /// Create a scanner for a directory, loading its .docignore if present
    pub fn new(root: &Path) -> Result<Self> {
        let rules = IgnoreRuleSet::load(root)?;
        Ok(Self {
            root: root.to_path_buf(),
            rules,
            follow_links: false,
            max_depth: None,
            skip_paths: Vec::new(),
        })
    }

    /// Set whether to follow symbolic links
    pub fn follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Set maximum depth for directory traversal
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.max_depth = Some(depth);
        self
    }

    /// Always exclude a path from the results, regardless of the rules
    pub fn skip_path(mut self, path: &Path) -> Self {
        self.skip_paths.push(path.to_path_buf());
        self
    }

    /// The loaded rule set
    pub fn rules(&self) -> &IgnoreRuleSet {
        &self.rules
    }

    /// Walk the tree and split files into included and ignored
    pub fn scan(&self) -> Result<ScanOutcome> {
        let mut stats = ScanStats::default();
        let mut included = Vec::new();
        let mut ignored = Vec::new();

        // Pruning an ignored directory is only correct when no negation
        // pattern could re-include something beneath it.
        let prune_dirs = !self.rules.has_reincludes();

        let mut walker = WalkDir::new(&self.root).follow_links(self.follow_links);
        if let Some(depth) = self.max_depth {
            walker = walker.max_depth(depth);
        }

        let root = self.root.clone();
        let rules = self.rules.clone();
        let iter = walker.into_iter().filter_entry(move |entry| {
            if !prune_dirs || !entry.file_type().is_dir() {
                return true;
            }
            match entry.path().strip_prefix(&root) {
                Ok(rel) if !rel.as_os_str().is_empty() => !rules.is_ignored(rel, true),
                _ => true, // the root itself
            }
        });

        for entry in iter {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    warn!("error accessing path: {}", e);
                    continue;
                },
            };
            if !entry.file_type().is_file() {
                continue;
            }

            let path = entry.path();
            if self.is_always_skipped(path) {
                continue;
            }
            stats.total_discovered += 1;

            let relative = match path.strip_prefix(&self.root) {
                Ok(rel) => rel.to_path_buf(),
                Err(_) => path.to_path_buf(),
            };

            match self.excluded_by(&relative) {
                Some(pattern) => {
                    ignored.push((path.to_path_buf(), pattern));
                    stats.total_ignored += 1;
                },
                None => {
                    included.push((path.to_path_buf(), relative));
                },
            }
        }

        // Deterministic document order
        included.sort_by(|a, b| a.1.cmp(&b.1));
        stats.total_included = included.len();

        Ok(ScanOutcome {
            included,
            ignored,
            stats,
        })
    }

    /// The pattern excluding a file, checking its directories first
    ///
    /// A file inside an ignored directory can never be re-included, so a
    /// matching ancestor wins over a file-level negation. This mirrors
    /// gitignore semantics and keeps pruned and unpruned walks consistent.
    fn excluded_by(&self, relative: &Path) -> Option<String> {
        for ancestor in relative.ancestors().skip(1) {
            if ancestor.as_os_str().is_empty() {
                break;
            }
            if let Some(pattern) = self.rules.matched_pattern(ancestor, true) {
                return Some(pattern.to_string());
            }
        }
        self.rules
            .matched_pattern(relative, false)
            .map(str::to_string)
    }

    fn is_always_skipped(&self, path: &Path) -> bool {
        if path
            .file_name()
            .map(|n| n == IGNORE_FILE_NAME)
            .unwrap_or(false)
        {
            return true;
        }
        self.skip_paths.iter().any(|skip| {
            if path == skip {
                return true;
            }
            // Skip paths may be spelled relative to the cwd while the
            // walker yields paths rooted at the target directory
            if path.file_name() != skip.file_name() {
                return false;
            }
            match (dunce::canonicalize(path), dunce::canonicalize(skip)) {
                (Ok(a), Ok(b)) => a == b,
                _ => false,
            }
        })
    }
}
