//! Document store abstraction and its backends.

pub mod memory;
pub mod postgres;
pub mod store;

pub use memory::MemoryDocumentStore;
pub use postgres::PostgresDocumentStore;
pub use store::{Document, DocumentStore, StoreError};
