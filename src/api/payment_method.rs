//! Payment method API handlers

use crate::api::MessageResponse;
use crate::domain::PaymentMethodInput;
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::policy::{self, PolicyAction};
use crate::server::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};

/// List the caller's payment methods
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse> {
    let methods = state.payment_method_service.list(&auth).await?;
    Ok(Json(methods))
}

/// Create a payment method (admin only)
pub async fn create(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<PaymentMethodInput>,
) -> Result<impl IntoResponse> {
    policy::require_role(&auth, PolicyAction::PaymentMethodCreate)?;
    let method = state.payment_method_service.create(&auth, input).await?;
    Ok(Json(method))
}

/// Update a payment method (admin only)
pub async fn update(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
    Json(input): Json<PaymentMethodInput>,
) -> Result<impl IntoResponse> {
    policy::require_role(&auth, PolicyAction::PaymentMethodUpdate)?;
    let method = state.payment_method_service.update(&id, input).await?;
    Ok(Json(method))
}

/// Delete a payment method (admin only)
pub async fn delete(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    policy::require_role(&auth, PolicyAction::PaymentMethodDelete)?;
    state.payment_method_service.delete(&id).await?;
    Ok(Json(MessageResponse::new(
        "Payment method deleted successfully",
    )))
}
