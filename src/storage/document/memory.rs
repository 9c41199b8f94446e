//! In-memory document store: collections held in a process-local map.
//!
//! Used by the test suite and as an ephemeral backend. Documents are kept in
//! insertion order so listings are deterministic.

use crate::storage::document::store::{Document, DocumentStore, StoreError};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use std::collections::HashMap;
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<HashMap<String, Vec<Document>>>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn ensure_collection(&self, collection: &str) -> Result<bool, StoreError> {
        let mut collections = self.collections.write().await;
        if collections.contains_key(collection) {
            return Ok(false);
        }
        collections.insert(collection.to_string(), Vec::new());
        Ok(true)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections.get(collection).cloned().unwrap_or_default())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Document>, StoreError> {
        let collections = self.collections.read().await;
        Ok(collections
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id).cloned()))
    }

    async fn insert(&self, collection: &str, fields: JsonValue) -> Result<Document, StoreError> {
        let mut collections = self.collections.write().await;
        let doc = Document::new(Uuid::new_v4(), fields);
        collections
            .entry(collection.to_string())
            .or_default()
            .push(doc.clone());
        Ok(doc)
    }

    async fn replace(
        &self,
        collection: &str,
        id: Uuid,
        fields: JsonValue,
    ) -> Result<Option<Document>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(None);
        };
        match docs.iter_mut().find(|d| d.id == id) {
            Some(doc) => {
                doc.fields = fields;
                Ok(Some(doc.clone()))
            }
            None => Ok(None),
        }
    }

    async fn remove(&self, collection: &str, id: Uuid) -> Result<Option<Document>, StoreError> {
        let mut collections = self.collections.write().await;
        let Some(docs) = collections.get_mut(collection) else {
            return Ok(None);
        };
        match docs.iter().position(|d| d.id == id) {
            Some(idx) => Ok(Some(docs.remove(idx))),
            None => Ok(None),
        }
    }

    async fn ping(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
