//! User administration

use crate::domain::User;
use crate::error::Result;
use crate::repository::UserRepository;
use std::sync::Arc;

pub struct UserService<U: UserRepository> {
    user_repo: Arc<U>,
}

impl<U: UserRepository> UserService<U> {
    pub fn new(user_repo: Arc<U>) -> Self {
        Self { user_repo }
    }

    /// List all users. Role gating happens in the handler via the policy
    /// table; password digests never leave the repository layer.
    pub async fn list(&self) -> Result<Vec<User>> {
        let records = self.user_repo.list().await?;
        Ok(records.into_iter().map(User::from).collect())
    }
}
