use std::{collections::HashMap, sync::Arc};

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::debug;

use crate::error::{StoreError, StoreResult};
use crate::id;

/// Reserved field carrying the generated identifier.
pub const ID_FIELD: &str = "_id";

/// A single structured record. The payload is an opaque JSON object; the
/// store only interprets the reserved `_id` field.
pub type Item = serde_json::Map<String, Value>;

/// Full store contents: resource name -> insertion-ordered items.
pub type Collections = HashMap<String, Vec<Item>>;

/// Authoritative in-memory holder of all collections for the process.
///
/// Cloning is cheap; clones share the same underlying data, so one instance
/// can be handed to every request handler. A single read-write lock guards
/// the whole map, which serializes mutations against each other and against
/// reads — enough for the expected low contention. Construct a fresh store
/// per test for isolation.
#[derive(Clone, Debug, Default)]
pub struct ResourceStore {
    inner: Arc<RwLock<Collections>>,
}

impl ResourceStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Full ordered contents of the named collection.
    pub async fn list(&self, resource: &str) -> StoreResult<Vec<Item>> {
        let map = self.inner.read().await;
        map.get(resource)
            .cloned()
            .ok_or_else(|| StoreError::CollectionNotFound(resource.to_string()))
    }

    /// Single item by id.
    pub async fn get(&self, resource: &str, id: &str) -> StoreResult<Item> {
        let map = self.inner.read().await;
        let items = map
            .get(resource)
            .ok_or_else(|| StoreError::CollectionNotFound(resource.to_string()))?;
        items
            .iter()
            .find(|item| item_id(item) == Some(id))
            .cloned()
            .ok_or_else(|| StoreError::ItemNotFound(resource.to_string(), id.to_string()))
    }

    /// Append a new item built from `payload`, assigning a fresh `_id` that
    /// overwrites any id the payload may carry. The collection is created on
    /// first use. The generated id is deliberately not returned; callers
    /// observe the new item via [`ResourceStore::list`].
    pub async fn create(&self, resource: &str, payload: Item) {
        let mut item = payload;
        item.insert(ID_FIELD.to_string(), Value::String(id::generate()));
        let mut map = self.inner.write().await;
        map.entry(resource.to_string()).or_default().push(item);
        debug!(resource, "item created");
    }

    /// Merge `payload` on top of the existing item's fields: payload fields
    /// overwrite same-named ones, everything else is preserved, and `_id` is
    /// forced back to `id` no matter what the payload carries.
    pub async fn update(&self, resource: &str, id: &str, payload: Item) -> StoreResult<()> {
        let mut map = self.inner.write().await;
        let items = map
            .get_mut(resource)
            .ok_or_else(|| StoreError::CollectionNotFound(resource.to_string()))?;
        let item = items
            .iter_mut()
            .find(|item| item_id(item) == Some(id))
            .ok_or_else(|| StoreError::ItemNotFound(resource.to_string(), id.to_string()))?;
        for (field, value) in payload {
            item.insert(field, value);
        }
        item.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
        debug!(resource, id, "item updated");
        Ok(())
    }

    /// Remove exactly the matching item, keeping the rest in order.
    pub async fn delete(&self, resource: &str, id: &str) -> StoreResult<()> {
        let mut map = self.inner.write().await;
        let items = map
            .get_mut(resource)
            .ok_or_else(|| StoreError::CollectionNotFound(resource.to_string()))?;
        let pos = items
            .iter()
            .position(|item| item_id(item) == Some(id))
            .ok_or_else(|| StoreError::ItemNotFound(resource.to_string(), id.to_string()))?;
        items.remove(pos);
        debug!(resource, id, "item deleted");
        Ok(())
    }

    /// Snapshot of the entire store, for the debug dump endpoint.
    pub async fn dump(&self) -> Collections {
        self.inner.read().await.clone()
    }
}

fn item_id(item: &Item) -> Option<&str> {
    item.get(ID_FIELD).and_then(Value::as_str)
}
