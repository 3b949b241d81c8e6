//! In-memory implementation of CollectionRepository

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use promptlab::{Collection, CollectionRepository, DomainError};

use super::MemoryStore;

/// In-memory implementation of CollectionRepository
pub struct MemoryCollectionRepository {
    store: Arc<MemoryStore>,
}

impl MemoryCollectionRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl CollectionRepository for MemoryCollectionRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Collection>, DomainError> {
        let inner = self.store.inner.read().await;
        Ok(inner.collections.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Collection>, DomainError> {
        let inner = self.store.inner.read().await;
        let mut collections: Vec<Collection> = inner.collections.values().cloned().collect();
        collections.sort_by(|a, b| {
            a.created_at
                .cmp(&b.created_at)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(collections)
    }

    async fn save(&self, collection: &Collection) -> Result<Collection, DomainError> {
        let mut inner = self.store.inner.write().await;
        inner.collections.insert(collection.id, collection.clone());
        Ok(collection.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        // One write guard spans the detach and the removal, so the
        // cascade is atomic to every reader of the store.
        let mut inner = self.store.inner.write().await;
        if !inner.collections.contains_key(&id) {
            return Ok(false);
        }
        let now = Utc::now();
        for prompt in inner.prompts.values_mut() {
            if prompt.collection_id == Some(id) {
                prompt.collection_id = None;
                prompt.updated_at = now;
            }
        }
        inner.collections.remove(&id);
        Ok(true)
    }
}
