//! Domain definitions for the CRUD resources served by this API.

use serde_json::Value as JsonValue;

pub mod catalog;
pub mod models;

pub use catalog::ResourceCatalog;
pub use models::{Notification, NotificationModel, QrCode, QrCodeModel, Redemption, RedemptionModel};

/// Trait that defines the contract for any CRUD resource.
///
/// This trait lets the service and the HTTP layer work with any resource
/// without knowing its specific schema. Each implementation provides:
/// - The backing collection name
/// - The example document inserted when the collection is first created
pub trait ResourceModel: Send + Sync {
    /// Returns the name of the backing collection for this resource.
    fn collection(&self) -> &str;

    /// Returns the example document used to seed a freshly created collection.
    ///
    /// The seed is illustrative data, not a schema enforced on writes:
    /// arbitrary JSON objects may be inserted into the collection afterwards.
    fn seed_document(&self) -> JsonValue;
}
