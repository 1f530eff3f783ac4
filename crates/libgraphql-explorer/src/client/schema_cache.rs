use crate::schema::SchemaModel;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;

/// Introspected schemas keyed by endpoint. Entries live until they are
/// replaced or explicitly cleared.
#[derive(Debug, Default)]
pub struct SchemaCache {
    schemas: RwLock<HashMap<String, Arc<SchemaModel>>>,
}
impl SchemaCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop the schema cached for `endpoint`. Returns `true` if one was
    /// cached.
    pub fn clear(&self, endpoint: &str) -> bool {
        let removed = self.schemas.write().remove(endpoint).is_some();
        log::info!("Cleared schema cache for endpoint: {endpoint}");
        removed
    }

    pub fn clear_all(&self) {
        self.schemas.write().clear();
        log::info!("Cleared all schema caches.");
    }

    pub fn get(&self, endpoint: &str) -> Option<Arc<SchemaModel>> {
        self.schemas.read().get(endpoint).cloned()
    }

    /// Cache `schema` for `endpoint`, returning the schema it replaced.
    pub fn insert(
        &self,
        endpoint: impl Into<String>,
        schema: Arc<SchemaModel>,
    ) -> Option<Arc<SchemaModel>> {
        self.schemas.write().insert(endpoint.into(), schema)
    }

    pub fn is_empty(&self) -> bool {
        self.schemas.read().is_empty()
    }

    pub fn len(&self) -> usize {
        self.schemas.read().len()
    }
}
