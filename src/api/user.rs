//! User API handlers

use crate::error::Result;
use crate::middleware::AuthUser;
use crate::policy::{self, PolicyAction};
use crate::server::AppState;
use axum::{extract::State, response::IntoResponse, Json};

/// List all users (admin only)
pub async fn list(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse> {
    policy::require_role(&auth, PolicyAction::UserList)?;
    let users = state.user_service.list().await?;
    Ok(Json(users))
}
