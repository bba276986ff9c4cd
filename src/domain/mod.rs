//! Domain models

pub mod common;
pub mod order;
pub mod payment;
pub mod restaurant;
pub mod user;

pub use common::{Country, Role};
pub use order::{CreateOrderInput, Order, OrderItem, OrderItemInput, OrderStatus};
pub use payment::{PaymentMethod, PaymentMethodInput, PaymentMethodType};
pub use restaurant::{MenuItem, Restaurant};
pub use user::{LoginInput, RegisterUserInput, User, UserRecord};
