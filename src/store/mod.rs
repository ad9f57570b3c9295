//! Document store seam: a schemaless store of JSON-like documents grouped into named collections.

mod memory;
mod mongo;

pub use memory::MemoryStore;
pub use mongo::MongoStore;

use crate::config::Settings;
use crate::error::StorageError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::sync::Arc;

/// Field name of the store-assigned identity on every document.
pub const ID_FIELD: &str = "_id";

/// One stored document as a field map.
pub type RawDocument = Map<String, Value>;

/// Exact-match filter: every (field, value) pair must match. Empty matches all.
pub type EqualityFilter = [(String, Value)];

#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Database name, for diagnostics.
    fn name(&self) -> &str;

    /// Insert one document and return its identifier as a string.
    async fn insert_one(&self, collection: &str, doc: RawDocument) -> Result<String, StorageError>;

    /// At most `limit` documents matching `filter`, in store-native order.
    async fn find(
        &self,
        collection: &str,
        filter: &EqualityFilter,
        limit: u32,
    ) -> Result<Vec<RawDocument>, StorageError>;

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError>;
}

/// Open the process-wide store from settings. Missing configuration or a client that cannot be
/// built leaves the server running without a store.
pub async fn connect_store(settings: &Settings) -> Option<Arc<dyn DocumentStore>> {
    let db = match settings.database() {
        Ok(db) => db,
        Err(e) => {
            tracing::warn!("{}; starting without a database", e);
            return None;
        }
    };
    match MongoStore::connect(&db.url, &db.name, db.timeout).await {
        Ok(store) => {
            tracing::info!(database = %db.name, "document store ready");
            Some(Arc::new(store))
        }
        Err(e) => {
            tracing::error!(error = %e, "could not initialise document store");
            None
        }
    }
}
