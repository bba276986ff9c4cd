//! HTTP API handlers

pub mod auth;
pub mod health;
pub mod order;
pub mod payment_method;
pub mod restaurant;
pub mod user;

use serde::{Deserialize, Serialize};

/// Simple message response
#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_response_serialization() {
        let response = MessageResponse::new("Order cancelled successfully");
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["message"], "Order cancelled successfully");
    }
}
