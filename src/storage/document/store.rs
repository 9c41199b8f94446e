//! The storage collaborator: schema-less collections of JSON documents.

use async_trait::async_trait;
use serde_json::Value as JsonValue;
use thiserror::Error;
use uuid::Uuid;

/// A stored document: the id assigned by the storage layer plus the
/// caller-supplied JSON fields (always an object).
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub fields: JsonValue,
}

impl Document {
    pub fn new(id: Uuid, fields: JsonValue) -> Self {
        Self { id, fields }
    }

    /// Wire shape: the fields object with the storage id merged in as a string.
    pub fn to_wire(&self) -> JsonValue {
        let mut obj = match &self.fields {
            JsonValue::Object(map) => map.clone(),
            _ => serde_json::Map::new(),
        };
        obj.insert("id".to_string(), JsonValue::String(self.id.to_string()));
        JsonValue::Object(obj)
    }
}

#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend could not be reached.
    #[error("storage unavailable: {0}")]
    Unavailable(anyhow::Error),
    /// Any other backend failure.
    #[error("storage error: {0}")]
    Backend(anyhow::Error),
}

/// Persistence primitives the resource engine is built on.
///
/// Collections are named groupings of schema-less documents. All write
/// operations are last-writer-wins: correctness under concurrent calls
/// relies on the backend's per-document atomicity, with no version check
/// at this layer. Each method issues a single storage round-trip.
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Creates the collection if it does not exist yet.
    /// Returns true when the collection was newly created.
    async fn ensure_collection(&self, collection: &str) -> Result<bool, StoreError>;

    /// Fetches every document in the collection, with no filter or pagination.
    /// A missing or empty collection yields an empty list.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError>;

    /// Fetches a single document by id.
    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Document>, StoreError>;

    /// Inserts the fields verbatim as a new document and assigns it an id.
    async fn insert(&self, collection: &str, fields: JsonValue) -> Result<Document, StoreError>;

    /// Replaces the document's fields wholesale. Returns the stored
    /// post-update document, or None when no document has that id.
    async fn replace(
        &self,
        collection: &str,
        id: Uuid,
        fields: JsonValue,
    ) -> Result<Option<Document>, StoreError>;

    /// Removes the document, returning its prior state, or None when absent.
    async fn remove(&self, collection: &str, id: Uuid) -> Result<Option<Document>, StoreError>;

    /// Cheap liveness probe for the health endpoint.
    async fn ping(&self) -> Result<(), StoreError>;
}
