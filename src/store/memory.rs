use super::{DocumentStore, EqualityFilter, RawDocument, ID_FIELD};
use crate::error::StorageError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// In-process document store. Documents keep insertion order within a collection.
pub struct MemoryStore {
    name: String,
    collections: RwLock<BTreeMap<String, Vec<RawDocument>>>,
}

impl MemoryStore {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            collections: RwLock::new(BTreeMap::new()),
        }
    }

    /// Number of documents in `collection` (0 if it does not exist).
    pub async fn count(&self, collection: &str) -> usize {
        self.collections
            .read()
            .await
            .get(collection)
            .map(Vec::len)
            .unwrap_or(0)
    }
}

fn matches(doc: &RawDocument, filter: &EqualityFilter) -> bool {
    filter.iter().all(|(field, want)| doc.get(field) == Some(want))
}

#[async_trait]
impl DocumentStore for MemoryStore {
    fn name(&self) -> &str {
        &self.name
    }

    async fn insert_one(&self, collection: &str, mut doc: RawDocument) -> Result<String, StorageError> {
        let id = uuid::Uuid::new_v4().simple().to_string();
        doc.insert(ID_FIELD.to_string(), Value::String(id.clone()));
        self.collections
            .write()
            .await
            .entry(collection.to_string())
            .or_default()
            .push(doc);
        Ok(id)
    }

    async fn find(
        &self,
        collection: &str,
        filter: &EqualityFilter,
        limit: u32,
    ) -> Result<Vec<RawDocument>, StorageError> {
        let guard = self.collections.read().await;
        let Some(docs) = guard.get(collection) else {
            return Ok(Vec::new());
        };
        Ok(docs
            .iter()
            .filter(|d| matches(d, filter))
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.collections.read().await.keys().cloned().collect())
    }
}
