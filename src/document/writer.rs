//! Output path resolution and document serialization

use crate::core::types::FileEntry;
use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};

/// Suffix used for the default output file name
pub const DEFAULT_OUTPUT_SUFFIX: &str = "llms";

/// Default output path: `<dir>/<dirname>-<suffix>.log`
///
/// The directory name comes from the canonicalized path, so `to-doc .`
/// still produces a meaningful name.
pub fn default_output_path(root: &Path, suffix: &str) -> PathBuf {
    let resolved = dunce::canonicalize(root).unwrap_or_else(|_| root.to_path_buf());
    let dir_name = resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output".to_string());
    root.join(format!("{}-{}.log", dir_name, suffix))
}

/// Resolve the final output path from an optional explicit one
///
/// An explicit path without an extension gets `.log` appended.
pub fn resolve_output_path(root: &Path, explicit: Option<PathBuf>, suffix: &str) -> PathBuf {
    match explicit {
        Some(path) => {
            if path.extension().is_none() {
                path.with_extension("log")
            } else {
                path
            }
        },
        None => default_output_path(root, suffix),
    }
}

/// Render entries as the concatenated document
///
/// Each entry contributes a `<relative-path>\n<content>\n` block.
pub fn render(entries: &[FileEntry]) -> String {
    let mut out = String::new();
    for entry in entries {
        out.push_str(&entry.relative_path.display().to_string());
        out.push('\n');
        out.push_str(&entry.content);
        out.push('\n');
    }
    out
}

/// Write the rendered document to the output path
pub fn write_document(entries: &[FileEntry], output_path: &Path) -> Result<()> {
    fs::write(output_path, render(entries))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    fn entry(rel: &str, content: &str) -> FileEntry {
        FileEntry::new(
            PathBuf::from(rel),
            PathBuf::from("/unused").join(rel),
            content.to_string(),
        )
    }

    #[test]
    fn test_default_output_path_uses_directory_name() {
        let temp_dir = TempDir::new().unwrap();
        let root = temp_dir.path().join("project");
        fs::create_dir(&root).unwrap();

        let path = default_output_path(&root, DEFAULT_OUTPUT_SUFFIX);
        assert_eq!(path, root.join("project-llms.log"));
    }

    #[test]
    fn test_explicit_output_without_extension_gets_log() {
        let root = Path::new(".");
        let path = resolve_output_path(
            root,
            Some(PathBuf::from("context")),
            DEFAULT_OUTPUT_SUFFIX,
        );
        assert_eq!(path, PathBuf::from("context.log"));

        let path = resolve_output_path(
            root,
            Some(PathBuf::from("context.txt")),
            DEFAULT_OUTPUT_SUFFIX,
        );
        assert_eq!(path, PathBuf::from("context.txt"));
    }

    #[test]
    fn test_render_block_format() {
        let entries = vec![entry("a.txt", "hello\n"), entry("b.txt", "world\n")];
        assert_eq!(render(&entries), "a.txt\nhello\n\nb.txt\nworld\n\n");
    }

    #[test]
    fn test_render_is_deterministic() {
        let entries = vec![entry("x/y.rs", "fn f() {}\n")];
        assert_eq!(render(&entries), render(&entries));
    }

    #[test]
    fn test_write_document() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let output = temp_dir.path().join("out.log");

        write_document(&[entry("a.txt", "hi\n")], &output)?;

        assert_eq!(fs::read_to_string(&output)?, "a.txt\nhi\n\n");
        Ok(())
    }
}
