//! OrderUp Core - Food Ordering Service Backend
//!
//! This crate provides the backend for the OrderUp food-ordering service:
//! a REST API for authentication, restaurant and menu browsing, order
//! placement and lifecycle management, and payment-method storage, with
//! access scoped by user role and country.

pub mod api;
pub mod config;
pub mod crypto;
pub mod domain;
pub mod error;
pub mod jwt;
pub mod middleware;
pub mod policy;
pub mod repository;
pub mod seed;
pub mod server;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use config::Config;
pub use error::{AppError, Result};
