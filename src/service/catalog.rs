//! Restaurant and menu browsing, scoped by country

use crate::domain::{MenuItem, Restaurant};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::policy;
use crate::repository::{MenuItemRepository, RestaurantRepository};
use std::sync::Arc;

pub struct CatalogService<R: RestaurantRepository, M: MenuItemRepository> {
    restaurant_repo: Arc<R>,
    menu_item_repo: Arc<M>,
}

impl<R: RestaurantRepository, M: MenuItemRepository> CatalogService<R, M> {
    pub fn new(restaurant_repo: Arc<R>, menu_item_repo: Arc<M>) -> Self {
        Self {
            restaurant_repo,
            menu_item_repo,
        }
    }

    /// List restaurants visible to the caller: everything for ADMIN, the
    /// caller's own country otherwise.
    pub async fn list_restaurants(&self, auth: &AuthUser) -> Result<Vec<Restaurant>> {
        let country = match auth.role {
            crate::domain::Role::Admin => None,
            _ => Some(auth.country),
        };
        self.restaurant_repo.list(country).await
    }

    /// Fetch one restaurant, applying the country gate
    pub async fn get_restaurant(&self, auth: &AuthUser, id: &str) -> Result<Restaurant> {
        let restaurant = self
            .restaurant_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Restaurant not found".to_string()))?;

        if !policy::country_visible(auth, restaurant.country) {
            return Err(AppError::Forbidden(
                "Access denied to this restaurant".to_string(),
            ));
        }

        Ok(restaurant)
    }

    /// Fetch a restaurant's full menu. Unavailable items are still listed
    /// with `is_available = false`.
    pub async fn menu(&self, auth: &AuthUser, restaurant_id: &str) -> Result<Vec<MenuItem>> {
        // Resolving the restaurant applies the not-found and country checks
        self.get_restaurant(auth, restaurant_id).await?;
        self.menu_item_repo.list_by_restaurant(restaurant_id).await
    }
}
