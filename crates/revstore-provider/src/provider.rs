use revstore_store::VersionedStore;
use revstore_types::RESOURCE_TYPE;
use tracing::debug;

use crate::error::ProviderResult;
use crate::request::{Request, Response};

/// Dispatches typed [`Request`]s to a [`VersionedStore`].
#[derive(Debug)]
pub struct ResourceProvider<S> {
    store: S,
}

impl<S: VersionedStore> ResourceProvider<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Resource type served by this provider.
    pub fn resource_type(&self) -> &'static str {
        RESOURCE_TYPE
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Execute `request` against the store.
    ///
    /// Single-resource reads fail with a not-found error; searches and
    /// listings return an empty bundle instead.
    pub fn handle(&self, request: &Request) -> ProviderResult<Response> {
        debug!(op = request.name(), "handling request");
        let response = match request {
            Request::ReadLatest { key } => Response::Resource(self.store.read_latest(*key)?),
            Request::ReadVersion { key, version } => {
                Response::Resource(self.store.read_version(*key, version)?)
            }
            Request::SearchByName { name } => {
                Response::Bundle(self.store.search_by_exact_name(name)?)
            }
            Request::ListAll => Response::Bundle(self.store.list_all_latest()?),
            Request::History { key } => Response::Bundle(self.store.history(*key)?),
            Request::Create { resource } => Response::Resource(self.store.create(resource)?),
            Request::Update { key, resource } => {
                Response::Resource(self.store.update(*key, resource)?)
            }
        };
        Ok(response)
    }

    /// Parse `raw` and read the addressed revision.
    pub fn read(&self, raw: &str) -> ProviderResult<Response> {
        let request = Request::read(raw)?;
        self.handle(&request)
    }
}
