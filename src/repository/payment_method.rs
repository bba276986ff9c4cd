//! Payment method repository

use crate::domain::PaymentMethod;
use crate::error::Result;
use crate::store::MemoryCollection;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PaymentMethodRepository: Send + Sync {
    async fn insert(&self, method: &PaymentMethod) -> Result<()>;
    async fn find_by_id(&self, id: &str) -> Result<Option<PaymentMethod>>;
    async fn list_by_user(&self, user_id: &str) -> Result<Vec<PaymentMethod>>;
    async fn replace(&self, method: &PaymentMethod) -> Result<()>;
    /// Delete by id, returning whether a document was removed
    async fn delete(&self, id: &str) -> Result<bool>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPaymentMethodRepository {
    collection: MemoryCollection<PaymentMethod>,
}

impl MemoryPaymentMethodRepository {
    pub fn new() -> Self {
        Self {
            collection: MemoryCollection::new(),
        }
    }
}

#[async_trait]
impl PaymentMethodRepository for MemoryPaymentMethodRepository {
    async fn insert(&self, method: &PaymentMethod) -> Result<()> {
        self.collection.insert(&method.id, method.clone()).await;
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<PaymentMethod>> {
        Ok(self.collection.find_by_id(id).await)
    }

    async fn list_by_user(&self, user_id: &str) -> Result<Vec<PaymentMethod>> {
        let mut methods = self
            .collection
            .find(|method| method.user_id == user_id)
            .await;
        methods.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(methods)
    }

    async fn replace(&self, method: &PaymentMethod) -> Result<()> {
        self.collection.replace(&method.id, method.clone()).await;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<bool> {
        Ok(self.collection.remove(id).await)
    }
}
