use std::sync::Arc;

use revstore_types::{Resource, ResourceKey, VersionLabel};

use crate::error::StoreResult;

/// Versioned resource store.
///
/// All implementations must satisfy these invariants:
/// - Histories are append-only; revisions are never modified or removed.
/// - `read_latest` returns the most recently appended revision.
/// - Keys from `next_identifier` strictly increase and are never reused.
/// - Readers never observe a partially appended history.
/// - Searches and listings report "nothing" as an empty vector, not an error.
pub trait VersionedStore: Send + Sync {
    /// Allocate a fresh key.
    fn next_identifier(&self) -> ResourceKey;

    /// The current revision of `key`.
    ///
    /// Returns `Err(NotFound)` if `key` has no history.
    fn read_latest(&self, key: ResourceKey) -> StoreResult<Resource>;

    /// The revision of `key` labelled `version`.
    ///
    /// Returns `Err(NotFound)` if `key` has no history and
    /// `Err(VersionNotFound)` if no revision carries the label.
    fn read_version(&self, key: ResourceKey, version: &VersionLabel) -> StoreResult<Resource>;

    /// Latest revisions whose name equals `name` exactly.
    ///
    /// Historical revisions are never matched.
    fn search_by_exact_name(&self, name: &str) -> StoreResult<Vec<Resource>>;

    /// The latest revision of every stored key.
    fn list_all_latest(&self) -> StoreResult<Vec<Resource>>;

    /// Every revision of `key`, oldest first.
    fn history(&self, key: ResourceKey) -> StoreResult<Vec<Resource>>;

    /// Store `resource` under a freshly allocated key as its first revision.
    fn create(&self, resource: &Resource) -> StoreResult<Resource>;

    /// Append `resource` as the new current revision of an existing `key`.
    fn update(&self, key: ResourceKey, resource: &Resource) -> StoreResult<Resource>;
}

/// Shared handles forward to the underlying store.
impl<T: VersionedStore + ?Sized> VersionedStore for Arc<T> {
    fn next_identifier(&self) -> ResourceKey {
        (**self).next_identifier()
    }

    fn read_latest(&self, key: ResourceKey) -> StoreResult<Resource> {
        (**self).read_latest(key)
    }

    fn read_version(&self, key: ResourceKey, version: &VersionLabel) -> StoreResult<Resource> {
        (**self).read_version(key, version)
    }

    fn search_by_exact_name(&self, name: &str) -> StoreResult<Vec<Resource>> {
        (**self).search_by_exact_name(name)
    }

    fn list_all_latest(&self) -> StoreResult<Vec<Resource>> {
        (**self).list_all_latest()
    }

    fn history(&self, key: ResourceKey) -> StoreResult<Vec<Resource>> {
        (**self).history(key)
    }

    fn create(&self, resource: &Resource) -> StoreResult<Resource> {
        (**self).create(resource)
    }

    fn update(&self, key: ResourceKey, resource: &Resource) -> StoreResult<Resource> {
        (**self).update(key, resource)
    }
}
