//! Payment method registry
//!
//! CRUD over stored payment references. Nothing here talks to a payment
//! processor; the records are never charged.

use crate::domain::{PaymentMethod, PaymentMethodInput};
use crate::error::{AppError, Result};
use crate::middleware::auth::AuthUser;
use crate::repository::PaymentMethodRepository;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct PaymentMethodService<P: PaymentMethodRepository> {
    payment_method_repo: Arc<P>,
}

impl<P: PaymentMethodRepository> PaymentMethodService<P> {
    pub fn new(payment_method_repo: Arc<P>) -> Self {
        Self {
            payment_method_repo,
        }
    }

    /// List the caller's own payment methods
    pub async fn list(&self, auth: &AuthUser) -> Result<Vec<PaymentMethod>> {
        self.payment_method_repo.list_by_user(&auth.user_id).await
    }

    /// Create a payment method owned by the caller
    pub async fn create(&self, auth: &AuthUser, input: PaymentMethodInput) -> Result<PaymentMethod> {
        input.validate()?;

        let method = PaymentMethod {
            id: Uuid::new_v4().to_string(),
            user_id: auth.user_id.clone(),
            method_type: input.method_type,
            card_last4: input.card_last4,
            cardholder_name: input.cardholder_name,
            is_default: input.is_default,
            created_at: Utc::now(),
        };
        self.payment_method_repo.insert(&method).await?;

        Ok(method)
    }

    /// Fully replace the mutable fields of a payment method. Ownership and
    /// creation time are preserved; there is no ownership check against the
    /// caller.
    pub async fn update(&self, id: &str, input: PaymentMethodInput) -> Result<PaymentMethod> {
        input.validate()?;

        let mut method = self
            .payment_method_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Payment method not found".to_string()))?;

        method.method_type = input.method_type;
        method.card_last4 = input.card_last4;
        method.cardholder_name = input.cardholder_name;
        method.is_default = input.is_default;
        self.payment_method_repo.replace(&method).await?;

        Ok(method)
    }

    /// Delete by id, unconditionally
    pub async fn delete(&self, id: &str) -> Result<()> {
        if !self.payment_method_repo.delete(id).await? {
            return Err(AppError::NotFound("Payment method not found".to_string()));
        }
        Ok(())
    }
}
