//! Order API handlers

use crate::domain::CreateOrderInput;
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::policy::{self, PolicyAction};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// Create a pending order
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateOrderInput>,
) -> Result<impl IntoResponse> {
    let order = state.order_service.create(&auth, input).await?;
    Ok(Json(order))
}

/// List orders in the caller's visibility scope
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse> {
    let orders = state.order_service.list(&auth).await?;
    Ok(Json(orders))
}

/// Get an order by ID
pub async fn get(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let order = state.order_service.get(&auth, &id).await?;
    Ok(Json(order))
}

/// Complete a pending order (admin or manager)
pub async fn checkout(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    policy::require_role(&auth, PolicyAction::OrderCheckout)?;
    let order = state.order_service.checkout(&auth, &id).await?;
    Ok(Json(order))
}

/// Cancel an order (admin or manager)
pub async fn cancel(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    policy::require_role(&auth, PolicyAction::OrderCancel)?;
    let order = state.order_service.cancel(&auth, &id).await?;
    Ok(Json(order))
}
