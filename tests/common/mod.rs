//! Common test utilities
//!
//! Builds the production router over a freshly seeded in-memory store and
//! provides oneshot request helpers.

#![allow(dead_code)]

use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use orderup_core::config::{Config, JwtConfig, SeedConfig};
use orderup_core::server::{build_router, AppState};
use serde_json::{json, Value};
use tower::ServiceExt;

fn test_config() -> Config {
    Config {
        http_host: "127.0.0.1".to_string(),
        http_port: 0,
        jwt: JwtConfig {
            secret: "test-secret-key-for-integration-tests".to_string(),
            issuer: "https://orderup.test".to_string(),
            access_token_ttl_secs: 3600,
        },
        seed: SeedConfig { enabled: true },
    }
}

/// Build the production router over a seeded in-memory store
pub async fn test_app() -> Router {
    let state = AppState::new(test_config());
    state.seed().await.expect("seeding failed");
    build_router(state)
}

/// Make a request with an optional bearer token and JSON body
pub async fn request(
    app: &Router,
    method: Method,
    path: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(path);
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }

    let request = match body {
        Some(body) => builder
            .header("Content-Type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap_or_default();
    let value = if body_bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&body_bytes).unwrap_or(Value::Null)
    };

    (status, value)
}

pub async fn get(app: &Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    request(app, Method::GET, path, token, None).await
}

pub async fn post(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    request(app, Method::POST, path, token, Some(body)).await
}

pub async fn put(
    app: &Router,
    path: &str,
    token: Option<&str>,
    body: Value,
) -> (StatusCode, Value) {
    request(app, Method::PUT, path, token, Some(body)).await
}

pub async fn delete(app: &Router, path: &str, token: Option<&str>) -> (StatusCode, Value) {
    request(app, Method::DELETE, path, token, None).await
}

/// Log in a seeded user and return the access token
pub async fn login(app: &Router, username: &str, password: &str) -> String {
    let (status, body) = post(
        app,
        "/api/auth/login",
        None,
        json!({ "username": username, "password": password }),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "login failed for {username}: {body}");
    body["access_token"].as_str().unwrap().to_string()
}

/// Look up a seeded restaurant ID by name (requires a token that can see it)
pub async fn restaurant_id_by_name(app: &Router, token: &str, name: &str) -> String {
    let (status, body) = get(app, "/api/restaurants", Some(token)).await;
    assert_eq!(status, StatusCode::OK);
    body.as_array()
        .unwrap()
        .iter()
        .find(|r| r["name"] == name)
        .unwrap_or_else(|| panic!("restaurant {name} not found"))["id"]
        .as_str()
        .unwrap()
        .to_string()
}

/// Fetch a restaurant's menu and return (menu_item_id, price) for a dish
pub async fn menu_item_by_name(
    app: &Router,
    token: &str,
    restaurant_id: &str,
    name: &str,
) -> (String, f64) {
    let (status, body) = get(
        app,
        &format!("/api/restaurants/{restaurant_id}/menu"),
        Some(token),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let item = body
        .as_array()
        .unwrap()
        .iter()
        .find(|i| i["name"] == name)
        .unwrap_or_else(|| panic!("menu item {name} not found"));
    (
        item["id"].as_str().unwrap().to_string(),
        item["price"].as_f64().unwrap(),
    )
}
