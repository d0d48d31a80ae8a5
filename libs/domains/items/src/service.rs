//! Item Service - business rules on top of a repository

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{Item, ItemFilter, ItemInput};
use crate::repository::ItemRepository;

pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: ItemInput) -> ItemResult<Item> {
        input.validate()?;
        self.repository.create(input).await
    }

    #[instrument(skip(self))]
    pub async fn get_item(&self, id: i32) -> ItemResult<Item> {
        self.repository.get_by_id(id).await
    }

    #[instrument(skip(self))]
    pub async fn list_items(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        self.repository.list(filter).await
    }

    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: i32, input: ItemInput) -> ItemResult<Item> {
        input.validate()?;
        self.repository.update(id, input).await
    }

    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: i32) -> ItemResult<()> {
        self.repository.delete(id).await
    }

    /// Removes one unit from stock, never going below zero.
    ///
    /// Read and write are separate repository calls, so two concurrent withdraws
    /// on the same item may both read the same level and one decrement is lost.
    /// The stored level still never drops below zero.
    ///
    /// Only the read can report [`ItemError::NotFound`]; an item deleted between
    /// read and write surfaces as a storage failure.
    #[instrument(skip(self))]
    pub async fn withdraw_item(&self, id: i32) -> ItemResult<Item> {
        let mut item = self.repository.get_by_id(id).await?;
        item.withdraw();
        self.repository
            .update(id, item.into())
            .await
            .map_err(ItemError::not_found_as_storage)
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
