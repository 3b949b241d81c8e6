//! Collection Application Service (Use Case)
//!
//! Orchestrates domain operations for collection management. Deleting
//! a collection detaches its member prompts; the repository port
//! guarantees the cascade is atomic to readers.

use std::sync::Arc;

use uuid::Uuid;

use promptlab::{Collection, CollectionRepository, DomainError};

/// Application service for collection operations
pub struct CollectionService<R: CollectionRepository> {
    repo: Arc<R>,
}

impl<R: CollectionRepository> CollectionService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Create a new collection
    pub async fn create(
        &self,
        name: String,
        description: Option<String>,
    ) -> Result<Collection, DomainError> {
        let collection = Collection::new(name, description);
        collection.validate()?;
        let saved = self.repo.save(&collection).await?;

        tracing::info!("Created collection: {} ({})", saved.name, saved.id);

        Ok(saved)
    }

    /// Get a collection by ID
    pub async fn get_by_id(&self, id: Uuid) -> Result<Option<Collection>, DomainError> {
        self.repo.find_by_id(id).await
    }

    /// Get all collections in creation order
    pub async fn list_all(&self) -> Result<Vec<Collection>, DomainError> {
        self.repo.find_all().await
    }

    /// Delete a collection, detaching member prompts
    pub async fn delete(&self, id: Uuid) -> Result<bool, DomainError> {
        let deleted = self.repo.delete(id).await?;
        if deleted {
            tracing::info!("Deleted collection: {}", id);
        }
        Ok(deleted)
    }
}
