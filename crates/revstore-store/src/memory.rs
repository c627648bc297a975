use std::collections::BTreeMap;

use parking_lot::RwLock;
use revstore_types::{Resource, ResourceKey, VersionLabel};
use tracing::{debug, info};

use crate::config::{SearchPolicy, StoreConfig};
use crate::error::{StoreError, StoreResult};
use crate::history::VersionHistory;
use crate::traits::VersionedStore;

/// Key counter and histories, guarded together.
struct State {
    next_id: u64,
    histories: BTreeMap<ResourceKey, VersionHistory>,
}

impl State {
    fn allocate(&mut self) -> ResourceKey {
        let key = ResourceKey::new(self.next_id);
        self.next_id += 1;
        key
    }

    fn insert_new(&mut self, resource: &Resource) -> Resource {
        let key = self.allocate();
        let history = VersionHistory::new(key, resource);
        let stored = history.latest().clone();
        self.histories.insert(key, history);
        debug!(%key, name = %stored.name, "history created");
        stored
    }
}

/// In-memory, `BTreeMap`-based versioned store.
///
/// The counter and every history sit behind one `RwLock`: reads share it,
/// key allocation and appends take it exclusively. Resources are cloned on
/// the way in and out. Iteration is in ascending key order.
pub struct InMemoryVersionedStore {
    state: RwLock<State>,
    search_policy: SearchPolicy,
}

impl InMemoryVersionedStore {
    /// Create a store holding the default seed entry (key 1, name "Test").
    pub fn new() -> Self {
        Self::with_config(&StoreConfig::default())
    }

    /// Create a store with no entries. The first allocated key is 1.
    pub fn empty() -> Self {
        Self::with_config(&StoreConfig::unseeded())
    }

    /// Create a store seeded from `config`.
    ///
    /// Seeds take keys from the same counter as later inserts, in the order
    /// they appear.
    pub fn with_config(config: &StoreConfig) -> Self {
        let mut state = State {
            next_id: 1,
            histories: BTreeMap::new(),
        };
        for seed in &config.seeds {
            state.insert_new(seed);
        }
        info!(
            seeds = config.seeds.len(),
            policy = ?config.search_policy,
            "versioned store initialized"
        );
        Self {
            state: RwLock::new(state),
            search_policy: config.search_policy,
        }
    }

    pub fn search_policy(&self) -> SearchPolicy {
        self.search_policy
    }

    /// Number of stored keys.
    pub fn len(&self) -> usize {
        self.state.read().histories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.state.read().histories.is_empty()
    }

    pub fn contains(&self, key: ResourceKey) -> bool {
        self.state.read().histories.contains_key(&key)
    }

    /// Total revisions across all histories.
    pub fn revision_count(&self) -> usize {
        self.state.read().histories.values().map(VersionHistory::len).sum()
    }
}

impl Default for InMemoryVersionedStore {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionedStore for InMemoryVersionedStore {
    fn next_identifier(&self) -> ResourceKey {
        let key = self.state.write().allocate();
        debug!(%key, "identifier allocated");
        key
    }

    fn read_latest(&self, key: ResourceKey) -> StoreResult<Resource> {
        let state = self.state.read();
        state
            .histories
            .get(&key)
            .map(|h| h.latest().clone())
            .ok_or(StoreError::NotFound(key))
    }

    fn read_version(&self, key: ResourceKey, version: &VersionLabel) -> StoreResult<Resource> {
        let state = self.state.read();
        let history = state.histories.get(&key).ok_or(StoreError::NotFound(key))?;
        history
            .version(version)
            .cloned()
            .ok_or_else(|| StoreError::VersionNotFound {
                key,
                version: version.clone(),
            })
    }

    fn search_by_exact_name(&self, name: &str) -> StoreResult<Vec<Resource>> {
        let state = self.state.read();
        let mut matches = state
            .histories
            .values()
            .map(VersionHistory::latest)
            .filter(|r| r.name == name);
        let found: Vec<Resource> = match self.search_policy {
            SearchPolicy::All => matches.cloned().collect(),
            SearchPolicy::First => matches.next().cloned().into_iter().collect(),
        };
        Ok(found)
    }

    fn list_all_latest(&self) -> StoreResult<Vec<Resource>> {
        let state = self.state.read();
        Ok(state
            .histories
            .values()
            .map(|h| h.latest().clone())
            .collect())
    }

    fn history(&self, key: ResourceKey) -> StoreResult<Vec<Resource>> {
        let state = self.state.read();
        state
            .histories
            .get(&key)
            .map(|h| h.revisions().to_vec())
            .ok_or(StoreError::NotFound(key))
    }

    fn create(&self, resource: &Resource) -> StoreResult<Resource> {
        Ok(self.state.write().insert_new(resource))
    }

    fn update(&self, key: ResourceKey, resource: &Resource) -> StoreResult<Resource> {
        let mut state = self.state.write();
        let history = state
            .histories
            .get_mut(&key)
            .ok_or(StoreError::NotFound(key))?;
        let stored = history.append(resource);
        debug!(%key, revisions = history.len(), "revision appended");
        Ok(stored)
    }
}

impl std::fmt::Debug for InMemoryVersionedStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.state.read();
        f.debug_struct("InMemoryVersionedStore")
            .field("key_count", &state.histories.len())
            .field("next_id", &state.next_id)
            .field("search_policy", &self.search_policy)
            .finish()
    }
}
