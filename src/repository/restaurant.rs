//! Restaurant repository

use crate::domain::{Country, Restaurant};
use crate::error::Result;
use crate::store::MemoryCollection;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    async fn insert(&self, restaurant: &Restaurant) -> Result<()>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>>;
    /// List restaurants, optionally filtered by country
    async fn list(&self, country: Option<Country>) -> Result<Vec<Restaurant>>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryRestaurantRepository {
    collection: MemoryCollection<Restaurant>,
}

impl MemoryRestaurantRepository {
    pub fn new() -> Self {
        Self {
            collection: MemoryCollection::new(),
        }
    }
}

#[async_trait]
impl RestaurantRepository for MemoryRestaurantRepository {
    async fn insert(&self, restaurant: &Restaurant) -> Result<()> {
        self.collection
            .insert(&restaurant.id, restaurant.clone())
            .await;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Restaurant>> {
        Ok(self.collection.find_by_id(id).await)
    }

    async fn list(&self, country: Option<Country>) -> Result<Vec<Restaurant>> {
        let mut restaurants = self
            .collection
            .find(|r| country.map(|c| r.country == c).unwrap_or(true))
            .await;
        restaurants.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(restaurants)
    }
}
