//! In-memory implementation of ItemRepository

use async_trait::async_trait;
use std::collections::BTreeMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::instrument;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreatedItem, Item, ItemFilter, ItemId, ItemPatch, seed_items};
use crate::repository::ItemRepository;

#[derive(Debug, Default)]
struct Catalog {
    // Ids only grow, so key order is insertion order.
    items: BTreeMap<ItemId, Item>,
    next_id: ItemId,
}

impl Catalog {
    fn snapshot(&self) -> Vec<Item> {
        self.items.values().cloned().collect()
    }
}

/// Process-local catalog guarded by a single lock.
///
/// Cloning shares the same underlying catalog.
#[derive(Debug, Default, Clone)]
pub struct InMemoryItemRepository {
    catalog: Arc<RwLock<Catalog>>,
}

impl InMemoryItemRepository {
    /// Empty catalog; the first item gets id 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Catalog holding `items` under ids `0..n`.
    pub fn with_items(items: impl IntoIterator<Item = Item>) -> Self {
        let items: BTreeMap<ItemId, Item> = (0..).zip(items).collect();
        let next_id = items.len() as ItemId;
        Self {
            catalog: Arc::new(RwLock::new(Catalog { items, next_id })),
        }
    }

    /// Catalog pre-populated with the five seed products.
    pub fn seeded() -> Self {
        Self::with_items(seed_items())
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    #[instrument(skip(self, item), fields(item_name = %item.name))]
    async fn create(&self, item: Item) -> ItemResult<CreatedItem> {
        let mut catalog = self.catalog.write().await;

        if catalog.items.values().any(|existing| existing.name == item.name) {
            return Err(ItemError::DuplicateName(item.name));
        }

        let id = catalog.next_id;
        catalog.next_id += 1;
        catalog.items.insert(id, item);

        tracing::info!(item_id = id, "Created item");
        Ok(CreatedItem {
            id,
            items: catalog.snapshot(),
        })
    }

    async fn get_by_id(&self, id: ItemId) -> ItemResult<Option<Item>> {
        let catalog = self.catalog.read().await;
        Ok(catalog.items.get(&id).cloned())
    }

    async fn list(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let catalog = self.catalog.read().await;

        let matching = catalog
            .items
            .values()
            .filter(|item| filter.matches(item))
            .skip(filter.skip);

        let result: Vec<Item> = match filter.limit {
            Some(limit) => matching.take(limit).cloned().collect(),
            None => matching.cloned().collect(),
        };

        Ok(result)
    }

    #[instrument(skip(self, patch))]
    async fn update(&self, id: ItemId, patch: ItemPatch) -> ItemResult<Item> {
        let mut catalog = self.catalog.write().await;
        let item = catalog.items.get_mut(&id).ok_or(ItemError::NotFound(id))?;

        item.apply_patch(patch);

        tracing::info!(item_id = id, "Updated item");
        Ok(item.clone())
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: ItemId) -> ItemResult<Item> {
        let mut catalog = self.catalog.write().await;
        let removed = catalog.items.remove(&id).ok_or(ItemError::NotFound(id))?;

        tracing::info!(item_id = id, "Deleted item");
        Ok(removed)
    }
}
