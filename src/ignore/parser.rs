//! .docignore file parser with gitignore-style pattern semantics

use crate::core::error::Result;
use glob::{Pattern, PatternError};
use std::fs;
use std::io;
use std::path::Path;
use tracing::warn;

/// Name of the ignore file read from the root of the packed directory
pub const IGNORE_FILE_NAME: &str = ".docignore";

/// What a matching pattern does to a path
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternKind {
    /// Normal pattern: exclude the path
    Exclude,
    /// Negation pattern (starts with !): re-include the path
    Reinclude,
}

/// A single compiled pattern from a .docignore file
#[derive(Debug, Clone)]
pub struct IgnorePattern {
    /// The original line as written in the ignore file
    pub original: String,
    /// What this pattern does when it matches
    pub kind: PatternKind,
    glob: Pattern,
    /// Anchored patterns (containing /) match from the root only
    anchored: bool,
    /// Patterns ending in / only match directories
    directory_only: bool,
}

impl IgnorePattern {
    /// Check whether this pattern matches a root-relative path
    fn matches(&self, relative: &Path, is_dir: bool) -> bool {
        if self.directory_only && !is_dir {
            return false;
        }

        let path_str = relative.to_string_lossy().replace('\\', "/");

        if self.anchored {
            return self.glob.matches(&path_str);
        }

        // Unanchored patterns can match the full path or any single component
        if self.glob.matches(&path_str) {
            return true;
        }
        relative
            .components()
            .any(|c| self.glob.matches(&c.as_os_str().to_string_lossy()))
    }
}

/// Ordered, immutable set of ignore rules loaded from a .docignore file
///
/// Patterns are applied in file order; a later match overrides an earlier
/// one, so `!important.tmp` after `*.tmp` re-includes that file.
#[derive(Debug, Clone, Default)]
pub struct IgnoreRuleSet {
    patterns: Vec<IgnorePattern>,
}

impl IgnoreRuleSet {
    /// Load the rule set from `<root>/.docignore`
    ///
    /// A missing ignore file yields an empty rule set, not an error.
    pub fn load(root: &Path) -> Result<Self> {
        let ignore_path = root.join(IGNORE_FILE_NAME);
        match fs::read_to_string(&ignore_path) {
            Ok(content) => Ok(Self::from_content(&content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(Self::default()),
            Err(e) => Err(e.into()),
        }
    }

    /// Build a rule set from ignore-file content
    ///
    /// Malformed patterns are skipped with a warning rather than failing
    /// the whole load.
    pub fn from_content(content: &str) -> Self {
        let mut patterns = Vec::new();

        for (line_num, line) in content.lines().enumerate() {
            match parse_line(line) {
                Ok(Some(pattern)) => patterns.push(pattern),
                Ok(None) => {}, // Empty line or comment
                Err(e) => {
                    warn!(
                        "invalid ignore pattern on line {}: {} ({})",
                        line_num + 1,
                        line,
                        e
                    );
                },
            }
        }

        Self { patterns }
    }

    /// Check whether a root-relative path is excluded by the rules
    pub fn is_ignored(&self, relative: &Path, is_dir: bool) -> bool {
        matches!(
            self.decide(relative, is_dir),
            Some(p) if p.kind == PatternKind::Exclude
        )
    }

    /// The pattern that excludes a path, if any (for reporting)
    pub fn matched_pattern(&self, relative: &Path, is_dir: bool) -> Option<&str> {
        match self.decide(relative, is_dir) {
            Some(p) if p.kind == PatternKind::Exclude => Some(&p.original),
            _ => None,
        }
    }

    /// Whether any negation patterns are present
    ///
    /// Directory pruning is only safe without them: a pruned subtree can
    /// never surface a re-included file.
    pub fn has_reincludes(&self) -> bool {
        self.patterns
            .iter()
            .any(|p| p.kind == PatternKind::Reinclude)
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Get all patterns (for debugging)
    pub fn patterns(&self) -> &[IgnorePattern] {
        &self.patterns
    }

    /// Find the last pattern that matches; later patterns override earlier ones
    fn decide(&self, relative: &Path, is_dir: bool) -> Option<&IgnorePattern> {
        self.patterns
            .iter()
            .rev()
            .find(|p| p.matches(relative, is_dir))
    }
}

/// Parse a single line from a .docignore file
fn parse_line(line: &str) -> std::result::Result<Option<IgnorePattern>, PatternError> {
    let line = line.trim();

    // Skip empty lines and comments
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (kind, pattern_str) = match line.strip_prefix('!') {
        Some(rest) => (PatternKind::Reinclude, rest.trim()),
        None => (PatternKind::Exclude, line),
    };
    if pattern_str.is_empty() {
        return Ok(None);
    }

    // Trailing slash marks a directory-only pattern
    let (directory_only, clean) = match pattern_str.strip_suffix('/') {
        Some(rest) => (true, rest),
        None => (false, pattern_str),
    };

    // A slash anywhere anchors the pattern to the root
    let anchored = clean.contains('/');

    let glob = Pattern::new(&normalize(clean, anchored))?;

    Ok(Some(IgnorePattern {
        original: line.to_string(),
        kind,
        glob,
        anchored,
        directory_only,
    }))
}

/// Normalize a pattern for glob matching
fn normalize(pattern: &str, anchored: bool) -> String {
    let mut normalized = pattern.replace('\\', "/");

    if let Some(rest) = normalized.strip_prefix("**/") {
        // **/ at the start already matches at any depth
        normalized = if rest.is_empty() {
            "**".to_string()
        } else {
            format!("**/{}", rest)
        };
    } else if !anchored && !normalized.starts_with('*') {
        // Unanchored literal names should match at any depth
        normalized = format!("**/{}", normalized);
    }

    normalized
}
