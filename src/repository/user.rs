//! User repository

use crate::domain::user::UserRecord;
use crate::error::Result;
use crate::store::MemoryCollection;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    async fn insert(&self, user: &UserRecord) -> Result<()>;
    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>>;
    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>>;
    async fn list(&self) -> Result<Vec<UserRecord>>;
    async fn count(&self) -> Result<usize>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryUserRepository {
    collection: MemoryCollection<UserRecord>,
}

impl MemoryUserRepository {
    pub fn new() -> Self {
        Self {
            collection: MemoryCollection::new(),
        }
    }
}

#[async_trait]
impl UserRepository for MemoryUserRepository {
    async fn insert(&self, user: &UserRecord) -> Result<()> {
        self.collection.insert(&user.id, user.clone()).await;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<UserRecord>> {
        Ok(self.collection.find_by_id(id).await)
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<UserRecord>> {
        Ok(self
            .collection
            .find(|user| user.username == username)
            .await
            .into_iter()
            .next())
    }

    async fn list(&self) -> Result<Vec<UserRecord>> {
        let mut users = self.collection.find(|_| true).await;
        users.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(users)
    }

    async fn count(&self) -> Result<usize> {
        Ok(self.collection.count().await)
    }
}
