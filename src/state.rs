//! Shared application state for all routes. The store handle is injected, never global.

use crate::config::Settings;
use crate::error::StorageError;
use crate::store::DocumentStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    /// `None` when the database is unconfigured or the client could not be built.
    pub store: Option<Arc<dyn DocumentStore>>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(store: Option<Arc<dyn DocumentStore>>, settings: Settings) -> Self {
        Self {
            store,
            settings: Arc::new(settings),
        }
    }

    pub fn store(&self) -> Result<&dyn DocumentStore, StorageError> {
        self.store
            .as_deref()
            .ok_or_else(|| StorageError::Unavailable("database is not configured".into()))
    }
}
