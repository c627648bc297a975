use std::path::Path;

use revstore_types::{BusinessIdentifier, Resource};
use serde::{Deserialize, Serialize};

use crate::error::{StoreError, StoreResult};

/// How `search_by_exact_name` treats multiple matches.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SearchPolicy {
    /// Return every matching resource, in ascending key order.
    #[default]
    All,
    /// Stop at the first match in ascending key order.
    First,
}

/// Store construction settings, loadable from TOML.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreConfig {
    #[serde(default)]
    pub search_policy: SearchPolicy,
    /// Resources inserted at construction, each under a fresh key.
    #[serde(default, rename = "seed")]
    pub seeds: Vec<Resource>,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            search_policy: SearchPolicy::default(),
            seeds: vec![default_seed()],
        }
    }
}

impl StoreConfig {
    /// A config with no seed entries.
    pub fn unseeded() -> Self {
        Self {
            search_policy: SearchPolicy::default(),
            seeds: Vec::new(),
        }
    }

    pub fn from_toml_str(s: &str) -> StoreResult<Self> {
        toml::from_str(s).map_err(|e| StoreError::Config {
            path: None,
            reason: e.to_string(),
        })
    }

    pub fn load(path: impl AsRef<Path>) -> StoreResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        toml::from_str(&text).map_err(|e| StoreError::Config {
            path: Some(path.to_path_buf()),
            reason: e.to_string(),
        })
    }
}

/// The single entry a default store starts with.
pub fn default_seed() -> Resource {
    Resource::named("Test").with_identifier(BusinessIdentifier::new("00002"))
}
