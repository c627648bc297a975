//! Versioned, in-memory resource storage for revstore.
//!
//! Each [`ResourceKey`](revstore_types::ResourceKey) owns a
//! [`VersionHistory`]: an append-only list of every revision written to that
//! key. Reads default to the latest revision; any earlier revision stays
//! addressable by its version label.
//!
//! # Storage Backends
//!
//! All backends implement the [`VersionedStore`] trait:
//!
//! - [`InMemoryVersionedStore`] -- `BTreeMap`-based store behind one `RwLock`
//!
//! # Design Rules
//!
//! 1. Histories are never empty and never shrink; revisions are immutable.
//! 2. Keys come from one monotonic counter, seeds included, and are never reused.
//! 3. Concurrent reads are always safe; appends and key allocation are exclusive.
//! 4. Name search looks at latest revisions only.
//! 5. Empty search results are not errors.

pub mod config;
pub mod error;
pub mod history;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use config::{default_seed, SearchPolicy, StoreConfig};
pub use error::{StoreError, StoreResult};
pub use history::VersionHistory;
pub use memory::InMemoryVersionedStore;
pub use traits::VersionedStore;
