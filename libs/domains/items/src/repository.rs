use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemFilter, ItemInput};

/// Data access for items.
///
/// Implementations own every read and write of persisted item state.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Persists a new item; the id is assigned here
    async fn create(&self, input: ItemInput) -> ItemResult<Item>;

    /// Fails with [`ItemError::NotFound`] for an unknown id
    async fn get_by_id(&self, id: i32) -> ItemResult<Item>;

    /// Items in id order, narrowed by the name filter when one is set
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>>;

    /// Replaces name, desired and actual of an existing item
    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<Item>;

    /// Removes the item; an unknown id is not an error
    async fn delete(&self, id: i32) -> ItemResult<()>;
}

#[derive(Debug, Default)]
struct Store {
    items: BTreeMap<i32, Item>,
    last_id: i32,
}

/// In-process repository for tests and local runs
#[derive(Clone, Default)]
pub struct InMemoryItemRepository {
    store: Arc<RwLock<Store>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn create(&self, input: ItemInput) -> ItemResult<Item> {
        let mut store = self.store.write().await;

        let id = store
            .last_id
            .checked_add(1)
            .ok_or_else(|| ItemError::Storage("item id space exhausted".to_string()))?;
        store.last_id = id;

        let item = Item {
            id,
            name: input.name,
            desired: input.desired,
            actual: input.actual,
        };
        store.items.insert(id, item.clone());

        tracing::info!(item_id = id, "Created item");
        Ok(item)
    }

    async fn get_by_id(&self, id: i32) -> ItemResult<Item> {
        let store = self.store.read().await;
        store.items.get(&id).cloned().ok_or(ItemError::NotFound(id))
    }

    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let store = self.store.read().await;
        Ok(store
            .items
            .values()
            .filter(|item| filter.matches(item))
            .cloned()
            .collect())
    }

    async fn update(&self, id: i32, input: ItemInput) -> ItemResult<Item> {
        let mut store = self.store.write().await;
        let item = store.items.get_mut(&id).ok_or(ItemError::NotFound(id))?;

        item.name = input.name;
        item.desired = input.desired;
        item.actual = input.actual;

        tracing::info!(item_id = id, "Updated item");
        Ok(item.clone())
    }

    async fn delete(&self, id: i32) -> ItemResult<()> {
        let removed = self.store.write().await.items.remove(&id).is_some();
        tracing::info!(item_id = id, removed, "Deleted item");
        Ok(())
    }
}
