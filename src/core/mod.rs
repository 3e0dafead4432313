//! Core types and utilities for to-doc
//!
//! This module contains the fundamental data types and error handling
//! used throughout the pipeline.

pub mod error;
pub mod types;

// Re-export commonly used items
pub use error::{Result, ToDocError};
pub use types::{DocumentStats, FileEntry};
