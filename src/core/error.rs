//! Error types for to-doc

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for to-doc operations
#[derive(Error, Debug)]
pub enum ToDocError {
    /// Directory argument errors
    #[error("Not a directory: {path}")]
    NotADirectory { path: PathBuf },

    /// Ignore pattern errors
    #[error("Invalid ignore pattern on line {line}: {pattern}")]
    InvalidPattern {
        line: usize,
        pattern: String,
        #[source]
        source: glob::PatternError,
    },

    /// Configuration errors
    #[error("Configuration error: {reason}")]
    ConfigurationError { reason: String },

    #[error("Config directory not found")]
    ConfigDirectoryNotFound,

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML parsing errors
    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    /// Generic error for unexpected conditions
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl ToDocError {
    /// Create a new not-a-directory error
    pub fn not_a_directory(path: PathBuf) -> Self {
        Self::NotADirectory { path }
    }

    /// Create a new configuration error
    pub fn configuration_error(reason: impl Into<String>) -> Self {
        Self::ConfigurationError {
            reason: reason.into(),
        }
    }

    /// Create a new internal error
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

/// Result type alias for to-doc operations
pub type Result<T> = std::result::Result<T, ToDocError>;
