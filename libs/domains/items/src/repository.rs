use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreatedItem, Item, ItemFilter, ItemId, ItemPatch};

/// Repository trait for the item catalog
///
/// Implementations must keep catalog order stable (insertion order) and make
/// each method atomic with respect to the others.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Insert an item unless its name is already taken
    async fn create(&self, item: Item) -> ItemResult<CreatedItem>;

    /// Get an item by ID
    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>>;

    /// List items matching a filter, in catalog order
    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>>;

    /// Apply a partial update to an existing item
    async fn update(&self, id: ItemId, patch: ItemPatch) -> ItemResult<Item>;

    /// Remove an item, returning it
    async fn delete(&self, id: ItemId) -> ItemResult<Item>;
}
