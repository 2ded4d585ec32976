//! Error types for catalog file operations.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while pseudo-localizing a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Input catalog missing.
    #[error("input message catalog not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Output catalog present and overwriting was not allowed.
    #[error("output message catalog already exists: {path}")]
    FileAlreadyExists { path: PathBuf },

    /// A character cannot be represented in the output encoding.
    #[error("line {line}: character {ch:?} cannot be encoded as {encoding}")]
    Unencodable {
        ch: char,
        line: usize,
        encoding: &'static str,
    },

    /// Input bytes are not valid in the input encoding.
    #[error("line {line}: input is not valid {encoding}")]
    InvalidInput { line: usize, encoding: &'static str },

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for catalog operations.
pub type Result<T> = std::result::Result<T, CatalogError>;
