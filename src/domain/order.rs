//! Order domain model and status lifecycle

use super::common::Country;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Order lifecycle status.
///
/// PENDING is the only initial state; COMPLETED and CANCELLED are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Pending,
    Completed,
    Cancelled,
}

/// A single order line, snapshotted at order-creation time.
///
/// `menu_item_name` and `price` are copies, not live references: later
/// catalog edits never retroactively alter historical orders.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderItem {
    pub id: String,
    pub menu_item_id: String,
    pub menu_item_name: String,
    pub quantity: u32,
    pub price: f64,
}

/// Order document. `country` and `user_name` are snapshots of the ordering
/// user at creation time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    pub id: String,
    pub user_id: String,
    pub user_name: String,
    pub order_date: DateTime<Utc>,
    pub total_amount: f64,
    pub status: OrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_method_id: Option<String>,
    pub country: Country,
    pub items: Vec<OrderItem>,
}

/// A requested order line. The unit price is supplied by the caller and is
/// trusted as-is (see `OrderService::create`).
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct OrderItemInput {
    pub menu_item_id: String,
    #[validate(range(min = 1))]
    pub quantity: u32,
    pub price: f64,
}

/// Input for creating an order
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateOrderInput {
    #[validate(length(min = 1), nested)]
    pub items: Vec<OrderItemInput>,
    pub payment_method_id: Option<String>,
}

/// Round a monetary amount to 2 decimal places
pub fn round2(amount: f64) -> f64 {
    (amount * 100.0).round() / 100.0
}
