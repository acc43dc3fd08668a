//! Error types

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while loading or analyzing measurement tables
#[derive(Debug, Error)]
pub enum DigestError {
    /// The input path does not resolve to a readable file
    #[error("File not found: {}", path.display())]
    InputNotFound {
        /// Path that was requested
        path: PathBuf,
    },

    /// The file exists but could not be read
    #[error("Failed to read {}", path.display())]
    Io {
        /// Path being read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// A row could not be parsed (missing column, non-numeric latency, ...)
    #[error("Failed to parse {} at row {row}", path.display())]
    Parse {
        /// Path being parsed
        path: PathBuf,
        /// 1-based data row (header excluded)
        row: usize,
        /// Underlying CSV failure
        #[source]
        source: csv::Error,
    },

    /// The header row lacks one of the required columns
    #[error("Missing column '{column}' in {}", path.display())]
    MissingColumn {
        /// Path being parsed
        path: PathBuf,
        /// Name of the absent column
        column: &'static str,
    },

    /// Selection was requested over zero implementations
    #[error("No implementations to select from")]
    EmptyResult,
}

/// Result alias used throughout perfdigest-core
pub type Result<T> = std::result::Result<T, DigestError>;
