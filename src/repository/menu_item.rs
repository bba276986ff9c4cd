//! Menu item repository

use crate::domain::MenuItem;
use crate::error::Result;
use crate::store::MemoryCollection;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait MenuItemRepository: Send + Sync {
    async fn insert(&self, item: &MenuItem) -> Result<()>;
    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>>;
    /// List every item on a restaurant's menu, available or not
    async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<MenuItem>>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryMenuItemRepository {
    collection: MemoryCollection<MenuItem>,
}

impl MemoryMenuItemRepository {
    pub fn new() -> Self {
        Self {
            collection: MemoryCollection::new(),
        }
    }
}

#[async_trait]
impl MenuItemRepository for MemoryMenuItemRepository {
    async fn insert(&self, item: &MenuItem) -> Result<()> {
        self.collection.insert(&item.id, item.clone()).await;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<MenuItem>> {
        Ok(self.collection.find_by_id(id).await)
    }

    async fn list_by_restaurant(&self, restaurant_id: &str) -> Result<Vec<MenuItem>> {
        let mut items = self
            .collection
            .find(|item| item.restaurant_id == restaurant_id)
            .await;
        items.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(items)
    }
}
