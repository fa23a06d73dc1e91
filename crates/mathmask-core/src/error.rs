//! Error types for mathmask

use std::path::PathBuf;
use std::string::FromUtf8Error;
use thiserror::Error;

/// Main error type for mathmask operations.
///
/// Replacement itself never fails; these cover the edges around it
/// (reading documents, loading configuration).
#[derive(Error, Debug)]
pub enum MathmaskError {
    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// A document could not be opened or read
    #[error("Error opening file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A document is not valid UTF-8
    #[error("Error decoding file {} as UTF-8: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: FromUtf8Error,
    },

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// An equation kind name that is not recognized
    #[error("Unknown equation kind: {0} (expected inline, equation, or align)")]
    UnknownKind(String),
}

/// Result type alias for mathmask operations
pub type Result<T> = std::result::Result<T, MathmaskError>;
