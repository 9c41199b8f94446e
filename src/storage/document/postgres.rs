//! Document store backend using PostgreSQL: one `(id UUID, doc JSONB)` table
//! per collection.

use crate::storage::document::store::{Document, DocumentStore, StoreError};
use async_trait::async_trait;
use serde_json::Value as JsonValue;
use sqlx::postgres::PgPoolOptions;
use sqlx::{PgPool, Row};
use uuid::Uuid;

/// A document store backed by a PostgreSQL connection pool.
#[derive(Clone)]
pub struct PostgresDocumentStore {
    pool: PgPool,
}

impl PostgresDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Builds the store over a lazily-connecting pool: startup never blocks on
    /// an unreachable database, operations fail individually instead.
    pub fn connect_lazy(database_url: &str) -> Result<Self, StoreError> {
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_lazy(database_url)
            .map_err(|e| StoreError::Backend(e.into()))?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }
}

// Collection names are interpolated into SQL, so they must be plain identifiers.
fn ensure_ident(collection: &str) -> Result<(), StoreError> {
    let mut chars = collection.chars();
    let valid = matches!(chars.next(), Some(c) if c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if valid {
        Ok(())
    } else {
        Err(StoreError::Backend(anyhow::anyhow!(
            "invalid collection name '{}'",
            collection
        )))
    }
}

fn map_sqlx(e: sqlx::Error) -> StoreError {
    match e {
        sqlx::Error::Io(_)
        | sqlx::Error::Tls(_)
        | sqlx::Error::PoolTimedOut
        | sqlx::Error::PoolClosed => StoreError::Unavailable(e.into()),
        other => StoreError::Backend(other.into()),
    }
}

fn row_to_document(row: &sqlx::postgres::PgRow) -> Result<Document, StoreError> {
    let id: Uuid = row.try_get("id").map_err(map_sqlx)?;
    let fields: JsonValue = row.try_get("doc").map_err(map_sqlx)?;
    Ok(Document::new(id, fields))
}

#[async_trait]
impl DocumentStore for PostgresDocumentStore {
    async fn ensure_collection(&self, collection: &str) -> Result<bool, StoreError> {
        ensure_ident(collection)?;
        let exists: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM information_schema.tables
                WHERE table_schema = current_schema() AND table_name = $1
            )",
        )
        .bind(collection)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx)?;

        if exists {
            return Ok(false);
        }

        sqlx::query(&format!(
            "CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY,
                doc JSONB NOT NULL
            )",
            collection
        ))
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(true)
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, StoreError> {
        ensure_ident(collection)?;
        let rows = sqlx::query(&format!("SELECT id, doc FROM {}", collection))
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx)?;
        rows.iter().map(row_to_document).collect()
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Document>, StoreError> {
        ensure_ident(collection)?;
        let row = sqlx::query(&format!("SELECT id, doc FROM {} WHERE id = $1", collection))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx)?;
        row.as_ref().map(row_to_document).transpose()
    }

    async fn insert(&self, collection: &str, fields: JsonValue) -> Result<Document, StoreError> {
        ensure_ident(collection)?;
        let id = Uuid::new_v4();
        sqlx::query(&format!(
            "INSERT INTO {} (id, doc) VALUES ($1, $2)",
            collection
        ))
        .bind(id)
        .bind(&fields)
        .execute(&self.pool)
        .await
        .map_err(map_sqlx)?;
        Ok(Document::new(id, fields))
    }

    async fn replace(
        &self,
        collection: &str,
        id: Uuid,
        fields: JsonValue,
    ) -> Result<Option<Document>, StoreError> {
        ensure_ident(collection)?;
        let row = sqlx::query(&format!(
            "UPDATE {} SET doc = $2 WHERE id = $1 RETURNING id, doc",
            collection
        ))
        .bind(id)
        .bind(&fields)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.as_ref().map(row_to_document).transpose()
    }

    async fn remove(&self, collection: &str, id: Uuid) -> Result<Option<Document>, StoreError> {
        ensure_ident(collection)?;
        let row = sqlx::query(&format!(
            "DELETE FROM {} WHERE id = $1 RETURNING id, doc",
            collection
        ))
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx)?;
        row.as_ref().map(row_to_document).transpose()
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx)?;
        Ok(())
    }
}
