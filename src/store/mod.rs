//! In-memory document store
//!
//! The persistence layer is modeled after a document database: one
//! collection per entity type, each document keyed by its `id` field (a
//! generated string, not a store-native identity). Repositories own a
//! [`MemoryCollection`] each; individual reads and writes are atomic, and no
//! cross-document coordination is provided or required.

use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Fixed cap on the number of documents returned by a collection scan
pub const MAX_SCAN_RESULTS: usize = 1000;

/// A collection of documents keyed by id
#[derive(Debug, Clone)]
pub struct MemoryCollection<T> {
    docs: Arc<RwLock<HashMap<String, T>>>,
}

impl<T> Default for MemoryCollection<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> MemoryCollection<T> {
    pub fn new() -> Self {
        Self {
            docs: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Clone + Send + Sync> MemoryCollection<T> {
    /// Insert a document under the given id, replacing any existing one
    pub async fn insert(&self, id: &str, doc: T) {
        self.docs.write().await.insert(id.to_string(), doc);
    }

    /// Fetch a single document by id
    pub async fn find_by_id(&self, id: &str) -> Option<T> {
        self.docs.read().await.get(id).cloned()
    }

    /// Scan the collection, returning documents matching the filter,
    /// capped at [`MAX_SCAN_RESULTS`]
    pub async fn find<F>(&self, filter: F) -> Vec<T>
    where
        F: Fn(&T) -> bool,
    {
        self.docs
            .read()
            .await
            .values()
            .filter(|doc| filter(doc))
            .take(MAX_SCAN_RESULTS)
            .cloned()
            .collect()
    }

    /// Replace the document under `id`. Returns false if it does not exist.
    pub async fn replace(&self, id: &str, doc: T) -> bool {
        let mut docs = self.docs.write().await;
        if !docs.contains_key(id) {
            return false;
        }
        docs.insert(id.to_string(), doc);
        true
    }

    /// Remove the document under `id`. Returns false if it does not exist.
    pub async fn remove(&self, id: &str) -> bool {
        self.docs.write().await.remove(id).is_some()
    }

    /// Number of documents in the collection
    pub async fn count(&self) -> usize {
        self.docs.read().await.len()
    }
}
