//! Restaurant and menu domain models

use super::common::Country;
use serde::{Deserialize, Serialize};

/// Restaurant reference data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Restaurant {
    pub id: String,
    pub name: String,
    pub location: String,
    pub country: Country,
    pub cuisine_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(default = "default_rating")]
    pub rating: f64,
}

pub(crate) fn default_rating() -> f64 {
    4.5
}

/// A dish offered by exactly one restaurant
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    pub is_available: bool,
}
