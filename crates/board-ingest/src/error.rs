//! Error types for snapshot loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading an ambassador snapshot.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Snapshot file not found.
    #[error("snapshot file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is neither `.json` nor `.csv`.
    #[error("unsupported snapshot format for {path}; expected .json or .csv")]
    UnsupportedFormat { path: PathBuf },

    // === Parsing Errors ===
    #[error("failed to parse JSON {path}: {message}")]
    JsonParse { path: PathBuf, message: String },

    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required column not found in the CSV header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    #[error("invalid {field} value '{value}' on row {row} of {path}")]
    InvalidValue {
        field: String,
        value: String,
        row: usize,
        path: PathBuf,
    },

    // === Snapshot Invariants ===
    /// Record at `index` (zero-based) has a blank name.
    #[error("ambassador at index {index} has an empty name")]
    EmptyName { index: usize },

    /// Two records share an email, which must be unique per snapshot.
    #[error("duplicate email '{email}' at indices {first} and {second}")]
    DuplicateEmail {
        email: String,
        first: usize,
        second: usize,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
