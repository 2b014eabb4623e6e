//! Error types for season input loading.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading race tables or the roster.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Directory not found or not readable.
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Input file not found.
    #[error("file not found: {path}")]
    FileNotFound { path: PathBuf },

    /// Failed to read directory entries.
    #[error("failed to read directory {path}: {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to read file.
    #[error("failed to read file {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File exceeds the size limit.
    #[error("file {path} is {size} bytes, exceeding the {max_size} byte limit")]
    FileTooLarge {
        path: PathBuf,
        size: u64,
        max_size: u64,
    },

    // === Encoding Errors ===
    /// File starts with a byte-order mark of an unsupported encoding.
    #[error("unsupported encoding {encoding} in {path} (expected UTF-8)")]
    UnsupportedEncoding {
        path: PathBuf,
        encoding: &'static str,
    },

    /// File content is not valid UTF-8.
    #[error("file {path} is not valid UTF-8")]
    InvalidUtf8 { path: PathBuf },

    // === Input Errors ===
    /// No race table was supplied.
    #[error("no race tables supplied")]
    NoTables,
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

pub(crate) fn file_error(path: &std::path::Path, error: std::io::Error) -> IngestError {
    if error.kind() == std::io::ErrorKind::NotFound {
        IngestError::FileNotFound {
            path: path.to_path_buf(),
        }
    } else {
        IngestError::FileRead {
            path: path.to_path_buf(),
            source: error,
        }
    }
}
