//! Error types for revid-config

use std::path::PathBuf;

/// Result type for revid-config operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in revid-config operations.
///
/// Parsing and lookups never fail; only reading the option file from disk
/// can.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O error at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
