use revstore_store::StoreError;
use revstore_types::IdError;
use serde::Serialize;
use thiserror::Error;

/// Status reported for both malformed and missing resources.
pub const NOT_FOUND_STATUS: u16 = 404;

/// Status reported for store failures unrelated to the request.
pub const INTERNAL_STATUS: u16 = 500;

#[derive(Debug, Error)]
pub enum ProviderError {
    #[error(transparent)]
    InvalidIdentifier(#[from] IdError),

    #[error(transparent)]
    NotFound(StoreError),

    #[error("store error: {0}")]
    Store(StoreError),
}

impl From<StoreError> for ProviderError {
    fn from(err: StoreError) -> Self {
        if err.is_not_found() {
            Self::NotFound(err)
        } else {
            Self::Store(err)
        }
    }
}

impl ProviderError {
    /// Short machine-readable code for the failure.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidIdentifier(_) => "invalid-id",
            Self::NotFound(_) => "not-found",
            Self::Store(_) => "exception",
        }
    }

    pub fn status(&self) -> u16 {
        match self {
            Self::InvalidIdentifier(_) | Self::NotFound(_) => NOT_FOUND_STATUS,
            Self::Store(_) => INTERNAL_STATUS,
        }
    }

    /// Protocol-level description of the failure.
    ///
    /// Malformed and missing ids both surface as not-found responses; `code`
    /// keeps them apart.
    pub fn outcome(&self) -> Outcome {
        Outcome {
            status: self.status(),
            code: self.code(),
            diagnostics: self.to_string(),
        }
    }
}

/// Serializable failure report handed to the request layer.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Outcome {
    pub status: u16,
    pub code: &'static str,
    pub diagnostics: String,
}

pub type ProviderResult<T> = Result<T, ProviderError>;

#[cfg(test)]
mod tests {
    use super::*;
    use revstore_types::{parse_identifier, ResourceKey};

    #[test]
    fn invalid_identifier_outcome() {
        let err: ProviderError = parse_identifier("abc").unwrap_err().into();
        let outcome = err.outcome();
        assert_eq!(outcome.status, 404);
        assert_eq!(outcome.code, "invalid-id");
        assert!(outcome.diagnostics.contains("abc"));
    }

    #[test]
    fn store_errors_split_by_kind() {
        let err: ProviderError = StoreError::NotFound(ResourceKey::new(2)).into();
        assert!(matches!(err, ProviderError::NotFound(_)));

        let err: ProviderError = StoreError::Config { path: None, reason: "bad".into() }.into();
        assert!(matches!(err, ProviderError::Store(_)));
        assert_eq!(err.outcome().status, 500);
        assert_eq!(err.code(), "exception");
    }

    #[test]
    fn not_found_outcome() {
        let err: ProviderError = StoreError::NotFound(ResourceKey::new(2)).into();
        let outcome = err.outcome();
        assert_eq!(outcome.status, 404);
        assert_eq!(outcome.code, "not-found");
        assert_eq!(outcome.diagnostics, "resource not found: 2");
    }
}
