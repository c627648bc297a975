use thiserror::Error;

/// Errors produced by type operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum IdError {
    /// The identifier string could not be decoded into a key and version.
    ///
    /// This is a malformed-input condition, never a missing-resource one.
    #[error("invalid identifier {raw:?}: {reason}")]
    InvalidIdentifier { raw: String, reason: String },
}

impl IdError {
    pub(crate) fn invalid(raw: &str, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            raw: raw.to_string(),
            reason: reason.into(),
        }
    }
}
