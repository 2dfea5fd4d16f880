//! Error types for product import ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while reading import files.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// CSV file not found.
    #[error("CSV file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Malformed CSV content.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },

    /// Required column not found in the file header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Invalid value in an attribute definition.
    #[error("invalid {field} value '{value}' in {path}")]
    InvalidValue {
        field: String,
        value: String,
        path: PathBuf,
    },

    /// Attribute code defined twice.
    #[error("attribute '{code}' is defined more than once in {path}")]
    DuplicateAttribute { code: String, path: PathBuf },

    // === Column Errors ===
    /// Column header does not name a property or a known attribute.
    #[error("column '{header}' does not match any attribute or property")]
    UnknownColumn { header: String },

    /// Column qualifiers do not fit the attribute definition.
    #[error("column '{header}' is invalid: {reason}")]
    InvalidColumn { header: String, reason: String },

    /// Two columns share the same header.
    #[error("column '{header}' appears more than once")]
    DuplicateColumn { header: String },
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

impl IngestError {
    pub(crate) fn csv(path: &std::path::Path, error: &csv::Error) -> Self {
        Self::CsvParse {
            path: path.to_path_buf(),
            message: error.to_string(),
        }
    }

    pub(crate) fn open(path: &std::path::Path, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::NotFound {
            Self::FileNotFound {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileRead {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
