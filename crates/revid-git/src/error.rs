//! Error types for revid-git

use std::path::PathBuf;

/// Result type for revid-git operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in revid-git operations.
///
/// Running commands never produces one of these; a failed command simply
/// yields empty output.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Option file error: {0}")]
    Config(#[from] revid_config::Error),

    #[error("{setting} `{value}` is not a valid Rust identifier")]
    InvalidIdentifier { setting: &'static str, value: String },

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
