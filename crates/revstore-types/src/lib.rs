//! Foundation types for revstore.
//!
//! Every other revstore crate depends on `revstore-types`.
//!
//! # Key Types
//!
//! - [`ResourceKey`] — numeric key naming one version history
//! - [`VersionLabel`] — opaque label of one revision within a history
//! - [`ResourceId`] — key plus optional version label
//! - [`Resource`] — the immutable record kept in each history
//!
//! The [`id`] module also holds the identifier codec:
//! [`parse_identifier`] and [`format_identifier`].

pub mod error;
pub mod id;
pub mod resource;

pub use error::IdError;
pub use id::{format_identifier, parse_identifier, ResourceId, ResourceKey, VersionLabel};
pub use resource::{BusinessIdentifier, Resource, RESOURCE_TYPE};
