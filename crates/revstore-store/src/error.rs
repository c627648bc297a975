use std::path::PathBuf;

use revstore_types::{ResourceKey, VersionLabel};

/// Errors from versioned store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No history exists for the key.
    #[error("resource not found: {0}")]
    NotFound(ResourceKey),

    /// The history exists but no revision carries the label.
    #[error("unknown version: {key}/_history/{version}")]
    VersionNotFound {
        key: ResourceKey,
        version: VersionLabel,
    },

    /// The store configuration could not be read or parsed.
    #[error("config error in {path:?}: {reason}")]
    Config { path: Option<PathBuf>, reason: String },

    /// I/O error while reading a config file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl StoreError {
    /// `true` for both missing-key and missing-version errors.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_) | Self::VersionNotFound { .. })
    }
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
