//! Error types for grid operations
//!
//! Provides unified error handling for loading, parsing, persisting and
//! committing grid data.

use thiserror::Error;

// Re-export CSV limits from constants module for consistency
pub use crate::constants::{MAX_CSV_ROWS, MAX_CSV_SIZE_MB};

/// Errors that can occur during grid operations
#[derive(Error, Debug)]
pub enum DataError {
    /// IO error from std::io
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing error, carrying the parser's message
    #[error("Invalid CSV format: {0}")]
    Csv(String),

    /// JSON error from serde_json
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// File is too large to import
    #[error("File too large: {size_mb}MB (max {max_mb}MB)")]
    TooLarge { size_mb: u64, max_mb: usize },

    /// Too many rows to import
    #[error("Too many rows: {rows} (max {max_rows})")]
    TooManyRows { rows: usize, max_rows: usize },

    /// File is empty
    #[error("Empty file")]
    EmptyFile,

    /// No usable columns in the header row
    #[error("No columns found")]
    NoColumns,

    /// Commit refused while cells still fail validation
    #[error("{count} cell(s) failing validation")]
    ValidationFailed { count: usize },

    /// Column position outside the visible column list
    #[error("Column index {index} out of range ({len} visible columns)")]
    ColumnIndexOutOfRange { index: usize, len: usize },

    /// Confirmation requested with no import staged
    #[error("No import pending")]
    NoPendingImport,

    /// Confirmation requested with no delete staged
    #[error("No delete pending")]
    NoPendingDelete,

    /// Row identity or view index does not resolve to a row
    #[error("Row not found: {0}")]
    RowNotFound(String),

    /// Durable storage could not be read or written
    #[error("Storage error: {0}")]
    Storage(String),
}

/// Result type alias for grid operations
pub type DataResult<T> = Result<T, DataError>;

impl From<csv::Error> for DataError {
    fn from(e: csv::Error) -> Self {
        DataError::Csv(e.to_string())
    }
}

impl From<tempfile::PersistError> for DataError {
    fn from(e: tempfile::PersistError) -> Self {
        DataError::Storage(e.to_string())
    }
}
