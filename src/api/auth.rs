//! Authentication API handlers

use crate::domain::{LoginInput, RegisterUserInput, User};
use crate::error::Result;
use crate::middleware::AuthUser;
use crate::server::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

/// Token response for a successful login
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: String,
    pub user: User,
}

/// Register a new user
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterUserInput>,
) -> Result<impl IntoResponse> {
    let user = state.auth_service.register(input).await?;
    Ok(Json(user))
}

/// Authenticate and issue an access token
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginInput>,
) -> Result<impl IntoResponse> {
    let outcome = state.auth_service.login(input).await?;
    Ok(Json(TokenResponse {
        access_token: outcome.access_token,
        token_type: "bearer".to_string(),
        user: outcome.user,
    }))
}

/// Current authenticated user
pub async fn me(State(state): State<AppState>, auth: AuthUser) -> Result<impl IntoResponse> {
    let user = state.auth_service.current_user(&auth).await?;
    Ok(Json(user))
}
