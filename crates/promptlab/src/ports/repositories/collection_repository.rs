//! Collection Repository Port
//!
//! Abstract interface for collection persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Collection};

/// Repository interface for Collection entities
#[async_trait]
pub trait CollectionRepository: Send + Sync {
    /// Find a collection by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Collection>, DomainError>;

    /// Find all collections in creation order
    /// (`created_at` ascending, ties broken by id)
    async fn find_all(&self) -> Result<Vec<Collection>, DomainError>;

    /// Save a collection (insert or replace)
    async fn save(&self, collection: &Collection) -> Result<Collection, DomainError>;

    /// Delete a collection by ID; false when the id is unknown.
    ///
    /// Contract: member prompts are detached (their `collection_id`
    /// cleared, `updated_at` refreshed) and the collection removed in
    /// one atomic step - no reader may observe a prompt referencing
    /// the deleted collection.
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;
}
