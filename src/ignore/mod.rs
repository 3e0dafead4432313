//! File exclusion via .docignore files
//!
//! A `.docignore` file at the root of the packed directory holds one glob
//! pattern per line, with gitignore-style extras: comments, negation, and
//! directory-only patterns. Missing file means nothing is excluded.

pub mod parser;
pub mod scanner;

// Re-export commonly used items
pub use parser::{IgnorePattern, IgnoreRuleSet, PatternKind, IGNORE_FILE_NAME};
pub use scanner::{ScanOutcome, ScanStats, TreeScanner};
