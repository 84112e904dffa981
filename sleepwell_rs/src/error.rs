//! Error types shared by the backend client, configuration and site builder.

use std::path::PathBuf;

/// Errors surfaced by the storefront library.
///
/// Fetch errors never reach a rendered page: the loaders in
/// [`crate::loader`] log them and fall back to empty results.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Transport-level failure talking to the backend
    #[error("backend request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status
    #[error("backend returned {status} for {url}")]
    Status { status: u16, url: String },

    /// Response or fixture body could not be decoded
    #[error("failed to decode {what}: {source}")]
    Decode {
        what: String,
        #[source]
        source: serde_json::Error,
    },

    /// Filesystem failure (fixtures, output directory)
    #[error("{action} {}: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file unreadable or malformed
    #[error("invalid configuration {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// A backend record failed boundary validation
    #[error("invalid {kind} record {id:?}: {reason}")]
    InvalidRecord {
        kind: &'static str,
        id: String,
        reason: String,
    },
}

impl StoreError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StoreError::Io {
            action,
            path: path.into(),
            source,
        }
    }
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, StoreError>;
