//! Global configuration management
//!
//! Optional defaults stored in the platform config directory, e.g.
//! `~/.config/to-doc/config.toml` on Linux. CLI flags always win over
//! config values; config values win over built-in defaults.

use crate::core::error::{Result, ToDocError};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::warn;

/// Global configuration for to-doc
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GlobalConfig {
    /// Core configuration
    pub core: CoreConfig,
    /// Filter configuration
    pub filter: FilterConfig,
}

/// Core configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CoreConfig {
    /// Default per-file line limit
    pub max_lines: Option<usize>,
    /// Suffix for the default output file name (`<dir>-<suffix>.log`)
    pub output_suffix: Option<String>,
}

/// Filter configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    /// Extensions always excluded from documents
    pub exclude: Vec<String>,
}

impl GlobalConfig {
    /// Path of the global config file
    pub fn config_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("", "", "to-doc")
            .ok_or(ToDocError::ConfigDirectoryNotFound)?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Load the global config, falling back to defaults
    ///
    /// A missing file is the normal case. An unreadable or unparsable file
    /// logs a warning and falls back to defaults rather than failing the
    /// run.
    pub fn load() -> Self {
        match Self::config_path() {
            Ok(path) => Self::load_from(&path),
            Err(_) => Self::default(),
        }
    }

    /// Load from an explicit path (used by tests)
    pub fn load_from(path: &std::path::Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::default(),
            Err(e) => {
                warn!("failed to read config {}: {}", path.display(), e);
                return Self::default();
            },
        };

        match toml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                warn!("invalid config {}: {}", path.display(), e);
                Self::default()
            },
        }
    }
}
