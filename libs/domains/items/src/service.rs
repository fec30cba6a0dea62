//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreatedItem, Item, ItemFilter, ItemId, ItemPatch};
use crate::repository::ItemRepository;

/// Item service providing the catalog operations
///
/// Translates "absent" results from the repository into [`ItemError::NotFound`].
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// Items in catalog order starting at `skip`, at most `limit`
    #[instrument(skip(self))]
    pub async fn list_items(&self, skip: usize, limit: usize) -> ItemResult<Vec<Item>> {
        self.repository
            .list(ItemFilter {
                min_price: None,
                skip,
                limit: Some(limit),
            })
            .await
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: ItemId) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Create a new item; names must be unique
    #[instrument(skip(self, item), fields(item_name = %item.name))]
    pub async fn create_item(&self, item: Item) -> ItemResult<CreatedItem> {
        self.repository.create(item).await
    }

    /// Apply a partial update to an existing item
    #[instrument(skip(self, patch))]
    pub async fn update_item(&self, id: ItemId, patch: ItemPatch) -> ItemResult<Item> {
        self.repository.update(id, patch).await
    }

    /// Delete an item, returning what was removed
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: ItemId) -> ItemResult<Item> {
        self.repository.delete(id).await
    }

    /// Every item priced at or above `min_price` (all items when `None`)
    #[instrument(skip(self))]
    pub async fn filter_items(&self, min_price: Option<f64>) -> ItemResult<Vec<Item>> {
        self.repository
            .list(ItemFilter {
                min_price,
                ..Default::default()
            })
            .await
    }

    /// Price filter followed by pagination
    #[instrument(skip(self))]
    pub async fn query_items(
        &self,
        skip: usize,
        limit: usize,
        min_price: Option<f64>,
    ) -> ItemResult<Vec<Item>> {
        self.repository
            .list(ItemFilter {
                min_price,
                skip,
                limit: Some(limit),
            })
            .await
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}
