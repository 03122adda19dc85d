use std::{collections::BTreeMap, sync::Arc};

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Item record: immutable `id`, opaque `name`, arbitrary JSON `value`.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Item {
    pub id: u64,
    pub name: String,
    pub value: serde_json::Value,
}

/// Create/update input model: no `id`, that is assigned by the store.
/// `value` may be any JSON value including `null`, but the key must exist.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct ItemInput {
    pub name: String,
    pub value: serde_json::Value,
}

impl ItemInput {
    /// Parse a raw request body into a validated input.
    ///
    /// Key presence is the contract: an absent body, a non-object body,
    /// or a missing `name`/`value` key is `InvalidInput`. Falsy values
    /// (`""`, `0`, `null` for `value`) pass as long as the key exists.
    pub fn from_body(body: Option<serde_json::Value>) -> Result<Self, ServiceError> {
        let body = body.ok_or(ServiceError::InvalidInput)?;
        serde_json::from_value(body).map_err(|_| ServiceError::InvalidInput)
    }
}

/// In-memory item store with an auto-incrementing id counter.
///
/// Map and counter live behind a single `RwLock`, so id allocation and
/// insertion are one atomic step with respect to concurrent requests.
/// A `BTreeMap` keyed by id yields items in creation order on list.
#[derive(Clone, Default)]
pub struct ItemStore {
    inner: Arc<RwLock<StoreInner>>,
}

struct StoreInner {
    items: BTreeMap<u64, Item>,
    next_id: u64,
}

impl Default for StoreInner {
    fn default() -> Self {
        Self { items: BTreeMap::new(), next_id: 1 }
    }
}

impl ItemStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// List all items in creation order.
    pub async fn list(&self) -> Vec<Item> {
        let inner = self.inner.read().await;
        inner.items.values().cloned().collect()
    }

    /// Get an item by id.
    pub async fn get(&self, id: u64) -> Option<Item> {
        let inner = self.inner.read().await;
        inner.items.get(&id).cloned()
    }

    /// Create a new item, allocating the next id.
    /// The counter advances only here; ids start at 1 and are never reused.
    pub async fn create(&self, input: ItemInput) -> Item {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let item = Item { id, name: input.name, value: input.value };
        inner.items.insert(id, item.clone());
        item
    }

    /// Replace `name`/`value` of an existing item, keeping its id.
    pub async fn update(&self, id: u64, input: ItemInput) -> Result<Item, ServiceError> {
        let mut inner = self.inner.write().await;
        let item = inner.items.get_mut(&id).ok_or(ServiceError::NotFound)?;
        item.name = input.name;
        item.value = input.value;
        Ok(item.clone())
    }

    /// Remove an item by id; returns whether it existed.
    /// The id counter is untouched, so deleted ids stay dead.
    pub async fn delete(&self, id: u64) -> bool {
        let mut inner = self.inner.write().await;
        inner.items.remove(&id).is_some()
    }
}
