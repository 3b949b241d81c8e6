//! Prompt Repository Port
//!
//! Abstract interface for prompt persistence operations.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::{errors::DomainError, Prompt};

/// Repository interface for Prompt entities
#[async_trait]
pub trait PromptRepository: Send + Sync {
    /// Find a prompt by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Prompt>, DomainError>;

    /// Find all prompts
    async fn find_all(&self) -> Result<Vec<Prompt>, DomainError>;

    /// Save a prompt (insert or replace)
    async fn save(&self, prompt: &Prompt) -> Result<Prompt, DomainError>;

    /// Delete a prompt by ID; false when the id is unknown
    async fn delete(&self, id: Uuid) -> Result<bool, DomainError>;

    /// Check whether a collection exists, for reference validation
    async fn collection_exists(&self, collection_id: Uuid) -> Result<bool, DomainError>;
}
