//! MongoDB-backed document store.

use super::{DocumentStore, EqualityFilter, RawDocument, ID_FIELD};
use crate::error::StorageError;
use async_trait::async_trait;
use futures_util::TryStreamExt;
use mongodb::bson::{self, Bson, Document};
use mongodb::options::ClientOptions;
use mongodb::{Client, Database};
use serde_json::Value;
use std::time::Duration;

pub struct MongoStore {
    db: Database,
}

impl MongoStore {
    /// Build the long-lived client handle. The driver connects lazily, so an unreachable
    /// server surfaces on the first operation (after `timeout`), not here.
    pub async fn connect(url: &str, name: &str, timeout: Duration) -> Result<Self, StorageError> {
        let mut options = ClientOptions::parse(url)
            .await
            .map_err(|e| StorageError::Unavailable(e.to_string()))?;
        options.app_name = Some(env!("CARGO_PKG_NAME").to_string());
        options.server_selection_timeout = Some(timeout);
        let client = Client::with_options(options).map_err(|e| StorageError::Unavailable(e.to_string()))?;
        Ok(Self {
            db: client.database(name),
        })
    }

    fn collection(&self, name: &str) -> mongodb::Collection<Document> {
        self.db.collection::<Document>(name)
    }
}

fn to_filter(filter: &EqualityFilter) -> Result<Document, StorageError> {
    let mut doc = Document::new();
    for (field, value) in filter {
        doc.insert(field.clone(), bson::to_bson(value)?);
    }
    Ok(doc)
}

fn id_string(id: &Bson) -> String {
    match id {
        Bson::ObjectId(oid) => oid.to_hex(),
        Bson::String(s) => s.clone(),
        other => other.to_string(),
    }
}

fn to_raw(mut doc: Document) -> RawDocument {
    if let Some(id) = doc.get(ID_FIELD).map(id_string) {
        doc.insert(ID_FIELD, Bson::String(id));
    }
    match Bson::Document(doc).into_relaxed_extjson() {
        Value::Object(map) => map,
        _ => RawDocument::new(),
    }
}

#[async_trait]
impl DocumentStore for MongoStore {
    fn name(&self) -> &str {
        self.db.name()
    }

    async fn insert_one(&self, collection: &str, doc: RawDocument) -> Result<String, StorageError> {
        let doc = bson::to_document(&doc)?;
        tracing::debug!(collection = %collection, "insert_one");
        let result = self.collection(collection).insert_one(doc).await?;
        Ok(id_string(&result.inserted_id))
    }

    async fn find(
        &self,
        collection: &str,
        filter: &EqualityFilter,
        limit: u32,
    ) -> Result<Vec<RawDocument>, StorageError> {
        let filter = to_filter(filter)?;
        tracing::debug!(collection = %collection, filter = %filter, limit, "find");
        let cursor = self
            .collection(collection)
            .find(filter)
            .limit(i64::from(limit))
            .await?;
        let docs: Vec<Document> = cursor.try_collect().await?;
        Ok(docs.into_iter().map(to_raw).collect())
    }

    async fn list_collection_names(&self) -> Result<Vec<String>, StorageError> {
        Ok(self.db.list_collection_names().await?)
    }
}
