//! ResourceCatalog for mapping wire names to ResourceModel implementations.

use crate::domain::resource::models::{NotificationModel, QrCodeModel, RedemptionModel};
use crate::domain::resource::ResourceModel;
use std::collections::HashMap;
use std::sync::Arc;

/// A registry that maps resource names (as they appear in request paths)
/// to their ResourceModel implementations.
pub struct ResourceCatalog {
    resources: HashMap<String, Arc<dyn ResourceModel>>,
}

impl ResourceCatalog {
    /// Creates a new empty ResourceCatalog.
    pub fn new() -> Self {
        Self {
            resources: HashMap::new(),
        }
    }

    /// The catalog served by the stock API: notifications, qrcodes, redemptions.
    pub fn standard() -> Self {
        let mut catalog = Self::new();
        catalog.register("notifications", NotificationModel);
        catalog.register("qrcodes", QrCodeModel);
        catalog.register("redemptions", RedemptionModel);
        catalog
    }

    /// Registers a resource implementation under the given wire name.
    pub fn register<M: ResourceModel + 'static>(&mut self, name: &str, model: M) {
        self.resources.insert(name.to_string(), Arc::new(model));
    }

    /// Retrieves a resource implementation by wire name.
    /// Returns None if the resource is not registered.
    pub fn get(&self, name: &str) -> Option<Arc<dyn ResourceModel>> {
        self.resources.get(name).cloned()
    }

    /// Returns all registered resource names.
    pub fn list(&self) -> Vec<String> {
        self.resources.keys().cloned().collect()
    }

    /// Iterates over all registered resource models.
    pub fn models(&self) -> impl Iterator<Item = &Arc<dyn ResourceModel>> {
        self.resources.values()
    }
}

impl Default for ResourceCatalog {
    fn default() -> Self {
        Self::new()
    }
}
