//! In-memory implementation of PromptRepository

use std::sync::Arc;

use async_trait::async_trait;
use uuid::Uuid;

use promptlab::{DomainError, Prompt, PromptRepository};

use super::MemoryStore;

/// In-memory implementation of PromptRepository
pub struct MemoryPromptRepository {
    store: Arc<MemoryStore>,
}

impl MemoryPromptRepository {
    pub fn new(store: Arc<MemoryStore>) -> Self {
        Self { store }
    }
}

#[async_trait]
impl PromptRepository for MemoryPromptRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError> {
        let inner = self.store.inner.read().await;
        Ok(inner.prompts.get(&id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError> {
        let inner = self.store.inner.read().await;
        Ok(inner.prompts.values().cloned().collect())
    }

    async fn save(&self, prompt: &Prompt) -> Result<Prompt, DomainError> {
        let mut inner = self.store.inner.write().await;
        inner.prompts.insert(prompt.id, prompt.clone());
        Ok(prompt.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let mut inner = self.store.inner.write().await;
        Ok(inner.prompts.remove(&id).is_some())
    }

    async fn collection_exists(&self, collection_id: Uuid) -> Result<bool, DomainError> {
        let inner = self.store.inner.read().await;
        Ok(inner.collections.contains_key(&collection_id))
    }
}
