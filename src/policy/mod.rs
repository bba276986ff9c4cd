//! Centralized authorization policy for HTTP handlers
//!
//! Role checks are driven by a single enumerated table mapping each guarded
//! operation to its allowed role set, and country scoping goes through the
//! one `country_visible` predicate, instead of re-deriving either rule per
//! endpoint.

use crate::domain::{Country, Role};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;

/// Guarded operations and their allowed role sets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyAction {
    UserList,
    OrderCheckout,
    OrderCancel,
    PaymentMethodCreate,
    PaymentMethodUpdate,
    PaymentMethodDelete,
}

impl PolicyAction {
    /// The policy table: operation -> allowed roles
    pub fn allowed_roles(&self) -> &'static [Role] {
        match self {
            PolicyAction::UserList => &[Role::Admin],
            PolicyAction::OrderCheckout | PolicyAction::OrderCancel => {
                &[Role::Admin, Role::Manager]
            }
            PolicyAction::PaymentMethodCreate
            | PolicyAction::PaymentMethodUpdate
            | PolicyAction::PaymentMethodDelete => &[Role::Admin],
        }
    }
}

/// Pass the caller through unchanged if their role is allowed for `action`,
/// otherwise fail with `Forbidden` naming the allowed roles.
pub fn require_role(auth: &AuthUser, action: PolicyAction) -> Result<()> {
    let allowed = action.allowed_roles();
    if allowed.contains(&auth.role) {
        return Ok(());
    }
    let roles: Vec<&str> = allowed.iter().map(Role::as_str).collect();
    Err(AppError::Forbidden(format!(
        "Access denied. Required roles: [{}]",
        roles.join(", ")
    )))
}

/// Country-scoping predicate: ADMIN sees everything, everyone else only
/// resources from their own country.
pub fn country_visible(auth: &AuthUser, resource_country: Country) -> bool {
    auth.role == Role::Admin || auth.country == resource_country
}
