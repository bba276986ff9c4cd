//! Business logic services

pub mod auth;
pub mod catalog;
pub mod order;
pub mod payment;
pub mod user;

pub use auth::AuthService;
pub use catalog::CatalogService;
pub use order::OrderService;
pub use payment::PaymentMethodService;
pub use user::UserService;
