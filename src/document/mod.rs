//! Document assembly and output
//!
//! Turns the scanner's file list into an ordered sequence of
//! (path, content) blocks and writes them as one UTF-8 document.

pub mod assembler;
pub mod writer;

// Re-export commonly used items
pub use assembler::{assemble, normalize_extensions, AssembleOptions, AssembledDocument};
pub use writer::{
    default_output_path, render, resolve_output_path, write_document, DEFAULT_OUTPUT_SUFFIX,
};
