//! Data access layer (Repository pattern)
//!
//! Each repository is a trait over one document collection, keyed by the
//! entity's `id` field. The memory-backed implementations are the crate's
//! store; a driver for an external document database would slot in behind
//! the same traits.

pub mod menu_item;
pub mod order;
pub mod payment_method;
pub mod restaurant;
pub mod user;

pub use menu_item::{MemoryMenuItemRepository, MenuItemRepository};
pub use order::{MemoryOrderRepository, OrderFilter, OrderRepository};
pub use payment_method::{MemoryPaymentMethodRepository, PaymentMethodRepository};
pub use restaurant::{MemoryRestaurantRepository, RestaurantRepository};
pub use user::{MemoryUserRepository, UserRepository};
