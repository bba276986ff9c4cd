//! Order repository

use crate::domain::{Country, Order, OrderStatus};
use crate::error::{AppError, Result};
use crate::store::MemoryCollection;
use async_trait::async_trait;

/// Visibility scope for order listings, derived from the caller's role
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderFilter {
    /// All orders (ADMIN)
    All,
    /// Orders placed in a country (MANAGER)
    Country(Country),
    /// Orders placed by one user (MEMBER)
    User(String),
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OrderRepository: Send + Sync {
    async fn insert(&self, order: &Order) -> Result<()>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Order>>;
    /// List orders in scope, most recent first
    async fn list(&self, filter: OrderFilter) -> Result<Vec<Order>>;
    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryOrderRepository {
    collection: MemoryCollection<Order>,
}

impl MemoryOrderRepository {
    pub fn new() -> Self {
        Self {
            collection: MemoryCollection::new(),
        }
    }
}

#[async_trait]
impl OrderRepository for MemoryOrderRepository {
    async fn insert(&self, order: &Order) -> Result<()> {
        self.collection.insert(&order.id, order.clone()).await;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Order>> {
        Ok(self.collection.find_by_id(id).await)
    }

    async fn list(&self, filter: OrderFilter) -> Result<Vec<Order>> {
        let mut orders = self
            .collection
            .find(|order| match &filter {
                OrderFilter::All => true,
                OrderFilter::Country(country) => order.country == *country,
                OrderFilter::User(user_id) => order.user_id == *user_id,
            })
            .await;
        orders.sort_by(|a, b| b.order_date.cmp(&a.order_date));
        Ok(orders)
    }

    async fn update_status(&self, id: &str, status: OrderStatus) -> Result<Order> {
        let mut order = self
            .collection
            .find_by_id(id)
            .await
            .ok_or_else(|| AppError::NotFound("Order not found".to_string()))?;
        order.status = status;
        self.collection.replace(id, order.clone()).await;
        Ok(order)
    }
}
