//! The generic CRUD resource engine.
//!
//! This module is the intermediary between the HTTP layer and the document
//! store. One `ResourceService` serves every resource in its catalog; the
//! per-resource differences (collection name, seed template) live entirely
//! in the `ResourceModel` implementations. It is responsible for:
//! 1.  Resolving wire resource names against the catalog.
//! 2.  Parsing externally supplied identifier strings into storage ids.
//! 3.  The one-time collection bootstrap/seeding step.

use crate::domain::resource::{ResourceCatalog, ResourceModel};
use crate::storage::document::{Document, DocumentStore, StoreError};
use serde_json::Value as JsonValue;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, info};
use uuid::Uuid;

/// Failure taxonomy surfaced by every resource operation.
#[derive(Debug, Error)]
pub enum ResourceError {
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Validation(String),
    #[error("{0}")]
    Conflict(String),
    #[error("storage unavailable: {0}")]
    StorageUnavailable(#[source] StoreError),
    #[error("storage operation failed: {0}")]
    Internal(#[source] StoreError),
}

impl ResourceError {
    /// Stable machine-readable kind carried in error response bodies.
    pub fn kind(&self) -> &'static str {
        match self {
            ResourceError::NotFound(_) => "not_found",
            ResourceError::Validation(_) => "validation",
            ResourceError::Conflict(_) => "conflict",
            ResourceError::StorageUnavailable(_) => "storage_unavailable",
            ResourceError::Internal(_) => "internal",
        }
    }
}

impl From<StoreError> for ResourceError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Unavailable(_) => ResourceError::StorageUnavailable(e),
            StoreError::Backend(_) => ResourceError::Internal(e),
        }
    }
}

/// The service that executes CRUD operations against the injected store.
pub struct ResourceService {
    store: Arc<dyn DocumentStore>,
    catalog: ResourceCatalog,
}

impl ResourceService {
    pub fn new(store: Arc<dyn DocumentStore>, catalog: ResourceCatalog) -> Self {
        Self { store, catalog }
    }

    pub fn catalog(&self) -> &ResourceCatalog {
        &self.catalog
    }

    /// Checks every cataloged collection and seeds the ones that did not
    /// exist yet with their example document. Runs at most one seed insert
    /// per collection lifetime: an already-present collection is left alone.
    pub async fn bootstrap(&self) -> Result<(), StoreError> {
        for model in self.catalog.models() {
            let created = self.store.ensure_collection(model.collection()).await?;
            if created {
                info!(
                    collection = model.collection(),
                    "collection missing, inserting seed document"
                );
                self.store
                    .insert(model.collection(), model.seed_document())
                    .await?;
            } else {
                debug!(collection = model.collection(), "collection already present");
            }
        }
        Ok(())
    }

    /// Liveness probe, delegated to the store.
    pub async fn ping(&self) -> Result<(), StoreError> {
        self.store.ping().await
    }

    fn model(&self, resource: &str) -> Result<Arc<dyn ResourceModel>, ResourceError> {
        self.catalog.get(resource).ok_or_else(|| {
            ResourceError::NotFound(format!("Resource '{}' is not registered", resource))
        })
    }

    fn parse_id(id: &str) -> Result<Uuid, ResourceError> {
        Uuid::parse_str(id.trim())
            .map_err(|_| ResourceError::Validation(format!("Invalid document id '{}'", id)))
    }

    fn ensure_object(body: &JsonValue) -> Result<(), ResourceError> {
        if body.is_object() {
            Ok(())
        } else {
            Err(ResourceError::Validation(
                "Payload must be a JSON object".to_string(),
            ))
        }
    }

    /// Fetches every document in the resource's collection. An empty
    /// collection is an empty list, not an error.
    pub async fn list(&self, resource: &str) -> Result<Vec<Document>, ResourceError> {
        let model = self.model(resource)?;
        let docs = self.store.find_all(model.collection()).await?;
        debug!(
            collection = model.collection(),
            count = docs.len(),
            "listed collection"
        );
        Ok(docs)
    }

    /// Fetches one document by its wire id string.
    pub async fn fetch(&self, resource: &str, id: &str) -> Result<Document, ResourceError> {
        let model = self.model(resource)?;
        let id = Self::parse_id(id)?;
        self.store
            .find_by_id(model.collection(), id)
            .await?
            .ok_or_else(|| {
                ResourceError::NotFound(format!(
                    "No document with id '{}' in '{}'",
                    id,
                    model.collection()
                ))
            })
    }

    /// Inserts the body verbatim as a new document and returns it with its
    /// assigned id.
    pub async fn create(
        &self,
        resource: &str,
        body: JsonValue,
    ) -> Result<Document, ResourceError> {
        let model = self.model(resource)?;
        Self::ensure_object(&body)?;
        let doc = self.store.insert(model.collection(), body).await?;
        debug!(collection = model.collection(), id = %doc.id, "inserted document");
        Ok(doc)
    }

    /// Replaces the document wholesale: fields absent from the new body do
    /// not survive. Returns the stored post-update document.
    pub async fn replace(
        &self,
        resource: &str,
        id: &str,
        body: JsonValue,
    ) -> Result<Document, ResourceError> {
        let model = self.model(resource)?;
        let id = Self::parse_id(id)?;
        Self::ensure_object(&body)?;
        let doc = self
            .store
            .replace(model.collection(), id, body)
            .await?
            .ok_or_else(|| {
                ResourceError::NotFound(format!(
                    "No document with id '{}' in '{}'",
                    id,
                    model.collection()
                ))
            })?;
        debug!(collection = model.collection(), id = %doc.id, "replaced document");
        Ok(doc)
    }

    /// Removes the document and returns its prior state as deletion
    /// confirmation. Deleting an absent id reports NotFound, consistently
    /// on every attempt.
    pub async fn delete(&self, resource: &str, id: &str) -> Result<Document, ResourceError> {
        let model = self.model(resource)?;
        let id = Self::parse_id(id)?;
        let doc = self
            .store
            .remove(model.collection(), id)
            .await?
            .ok_or_else(|| {
                ResourceError::NotFound(format!(
                    "No document with id '{}' in '{}'",
                    id,
                    model.collection()
                ))
            })?;
        debug!(collection = model.collection(), id = %doc.id, "removed document");
        Ok(doc)
    }
}
