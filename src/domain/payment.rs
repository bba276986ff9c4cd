//! Payment method domain model
//!
//! Stored payment methods are non-sensitive references only: the last four
//! card digits at most, never a full number or CVV. Nothing here is ever
//! charged.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodType {
    CreditCard,
    DebitCard,
    Upi,
    Paypal,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentMethod {
    pub id: String,
    pub user_id: String,
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card_last4: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cardholder_name: Option<String>,
    pub is_default: bool,
    pub created_at: DateTime<Utc>,
}

/// Input for creating or fully replacing a payment method
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct PaymentMethodInput {
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    #[validate(length(equal = 4))]
    pub card_last4: Option<String>,
    #[validate(length(min = 1, max = 255))]
    pub cardholder_name: Option<String>,
    #[serde(default)]
    pub is_default: bool,
}
