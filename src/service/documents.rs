//! Generic document access over any `DocumentStore`.

use crate::error::StorageError;
use crate::store::{DocumentStore, EqualityFilter, RawDocument};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use serde_json::Value;

pub struct DocumentService;

impl DocumentService {
    /// Serialize `record`, stamp `created_at`/`updated_at`, insert into `collection`. Returns the store id.
    pub async fn create_document<T: Serialize>(
        store: &dyn DocumentStore,
        collection: &str,
        record: &T,
    ) -> Result<String, StorageError> {
        let mut doc = match serde_json::to_value(record)? {
            Value::Object(map) => map,
            other => {
                return Err(StorageError::Serialization(format!(
                    "record must serialize to an object, got {}",
                    other
                )))
            }
        };
        let now = Value::String(Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true));
        doc.insert("created_at".into(), now.clone());
        doc.insert("updated_at".into(), now);
        let id = store.insert_one(collection, doc).await?;
        tracing::debug!(collection = %collection, id = %id, "document created");
        Ok(id)
    }

    /// Up to `limit` raw documents from `collection` matching `filter`.
    pub async fn get_documents(
        store: &dyn DocumentStore,
        collection: &str,
        filter: &EqualityFilter,
        limit: u32,
    ) -> Result<Vec<RawDocument>, StorageError> {
        tracing::debug!(collection = %collection, filter = ?filter, limit, "get_documents");
        store.find(collection, filter, limit).await
    }
}
