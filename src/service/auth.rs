//! Registration, login, and current-user lookup

use crate::crypto::{hash_password, verify_password};
use crate::domain::user::{LoginInput, RegisterUserInput, User, UserRecord};
use crate::error::{AppError, Result};
use crate::jwt::JwtManager;
use crate::middleware::auth::AuthUser;
use crate::repository::UserRepository;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

pub struct AuthService<U: UserRepository> {
    user_repo: Arc<U>,
    jwt_manager: JwtManager,
}

/// Successful login payload: the token and the user it belongs to
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    pub access_token: String,
    pub user: User,
}

impl<U: UserRepository> AuthService<U> {
    pub fn new(user_repo: Arc<U>, jwt_manager: JwtManager) -> Self {
        Self {
            user_repo,
            jwt_manager,
        }
    }

    /// Register a new user. Usernames are unique.
    pub async fn register(&self, input: RegisterUserInput) -> Result<User> {
        input.validate()?;

        if self
            .user_repo
            .find_by_username(&input.username)
            .await?
            .is_some()
        {
            return Err(AppError::BadRequest(
                "Username already registered".to_string(),
            ));
        }

        let record = UserRecord {
            id: Uuid::new_v4().to_string(),
            username: input.username,
            password_hash: hash_password(&input.password)?,
            full_name: input.full_name,
            role: input.role,
            country: input.country,
            created_at: Utc::now(),
        };
        self.user_repo.insert(&record).await?;

        Ok(User::from(record))
    }

    /// Verify credentials and issue an access token
    pub async fn login(&self, input: LoginInput) -> Result<LoginOutcome> {
        let record = self.user_repo.find_by_username(&input.username).await?;

        // Same error for unknown user and bad password
        let record = record.ok_or_else(|| {
            AppError::Unauthorized("Invalid username or password".to_string())
        })?;
        if !verify_password(&input.password, &record.password_hash) {
            return Err(AppError::Unauthorized(
                "Invalid username or password".to_string(),
            ));
        }

        let access_token = self.jwt_manager.create_access_token(
            &record.id,
            &record.username,
            record.role,
            record.country,
        )?;

        Ok(LoginOutcome {
            access_token,
            user: User::from(record),
        })
    }

    /// Resolve the authenticated caller's user document
    pub async fn current_user(&self, auth: &AuthUser) -> Result<User> {
        let record = self
            .user_repo
            .find_by_id(&auth.user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;
        Ok(User::from(record))
    }
}
