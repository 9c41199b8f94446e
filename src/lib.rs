pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::resource_service::{ResourceError, ResourceService};
pub use domain::resource::{
    NotificationModel, QrCodeModel, RedemptionModel, ResourceCatalog, ResourceModel,
};
pub use storage::document::{
    Document, DocumentStore, MemoryDocumentStore, PostgresDocumentStore, StoreError,
};
