//! Error types for revtag
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for revtag operations
pub type RevtagResult<T> = Result<T, RevtagError>;

/// Main error type for revtag operations
#[derive(Error, Debug)]
pub enum RevtagError {
    /// Reading or writing a file failed
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The output directory handed to the collector does not exist
    #[error("output directory not found: {path}")]
    OutputDirNotFound { path: PathBuf },

    /// An artifact's content could not be read, so it cannot be fingerprinted
    #[error("cannot fingerprint artifact '{file_name}': {message}")]
    Fingerprint { file_name: String, message: String },

    /// Two collected artifacts resolved to the same output file name
    #[error("duplicate output file '{file_name}' in artifact set")]
    DuplicateFileName { file_name: String },

    /// The output directory was already stamped by a previous build
    #[error("'{file_name}' already carries its published version tag; stamp expects fresh build output, rebuild before stamping again")]
    AlreadyStamped { file_name: String },

    /// The build manifest exists but is not valid
    #[error("invalid build manifest {path}: {message}")]
    InvalidManifest { path: PathBuf, message: String },

    /// Candidate version token is not usable as a tag
    #[error("invalid build version '{value}': {reason}")]
    InvalidVersion { value: String, reason: String },

    /// Configuration file could not be parsed
    #[error("invalid configuration in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// The staged ledger could not be written at the end of the build
    #[error("failed to persist version ledger to {path}: {message} (artifacts were written; the next build may lose name stability)")]
    LedgerPersist { path: PathBuf, message: String },
}

impl RevtagError {
    /// Wrap an I/O error with the path it happened at
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        RevtagError::Io {
            path: path.into(),
            source,
        }
    }
}
