//! Error types for oriole-excel

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using [`TabularError`]
pub type Result<T> = std::result::Result<T, TabularError>;

/// Errors that can occur while loading tabular data.
#[derive(Debug, Error)]
pub enum TabularError {
    /// The source file does not exist.
    #[error("file {0} does not exist")]
    FileNotFound(PathBuf),

    /// The file extension maps to no supported file type.
    #[error("file {path} with extension '{extension}' is not supported")]
    UnsupportedExtension { path: PathBuf, extension: String },

    /// Worksheet name missing for a file type that requires one.
    #[error("worksheet name is required for file {0}")]
    SheetNameRequired(PathBuf),

    /// A row produced more cells than there are columns.
    #[error("row {row} has {actual} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        actual: usize,
    },

    /// Error from the CSV cursor.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Error surfaced by an external cursor implementation.
    #[error("cursor error: {0}")]
    Cursor(String),
}
