//! Request boundary for revstore.
//!
//! Callers describe an operation as a typed [`Request`] (read, versioned
//! read, name search, listing, history, create, update) and hand it to a
//! [`ResourceProvider`], which runs it against any
//! [`VersionedStore`](revstore_store::VersionedStore) and returns a plain
//! [`Response`] or a [`ProviderError`].
//!
//! Malformed identifiers and missing resources stay distinct error kinds;
//! [`ProviderError::outcome`] renders either as a not-found [`Outcome`].

pub mod error;
pub mod provider;
pub mod request;

pub use error::{Outcome, ProviderError, ProviderResult};
pub use provider::ResourceProvider;
pub use request::{Request, Response};
