//! Error types for Archivist
//!
//! Library code returns `ArchivistResult`; the binary wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Archivist operations
pub type ArchivistResult<T> = Result<T, ArchivistError>;

/// Main error type for Archivist operations
#[derive(Error, Debug)]
pub enum ArchivistError {
    /// Target file is missing its begin or end marker
    #[error("markers {begin} / {end} not found in {file}")]
    MarkersNotFound {
        begin: String,
        end: String,
        file: PathBuf,
    },

    /// Docs root does not exist or is not a directory
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// Config file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
