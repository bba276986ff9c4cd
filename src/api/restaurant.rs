//! Restaurant and menu API handlers

use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// List restaurants visible to the caller
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse> {
    let restaurants = state.catalog_service.list_restaurants(&auth).await?;
    Ok(Json(restaurants))
}

/// Get a restaurant by ID
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let restaurant = state.catalog_service.get_restaurant(&auth, &id).await?;
    Ok(Json(restaurant))
}

/// List a restaurant's menu items
pub async fn menu(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let items = state.catalog_service.menu(&auth, &id).await?;
    Ok(Json(items))
}
