//! Collection - A named grouping of prompts
//!
//! Pure domain entity without infrastructure dependencies.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::prompt::MAX_DESCRIPTION_LEN;
use crate::domain::errors::DomainError;

/// Upper bound on collection name length.
pub const MAX_NAME_LEN: usize = 100;

/// Collection - groups prompts by reference; it does not own their lifetime
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Collection {
    /// Create a new collection with a fresh id
    pub fn new(name: String, description: Option<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            description,
            created_at: Utc::now(),
        }
    }

    /// Check structural invariants before any store interaction
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.name.trim().is_empty() {
            return Err(DomainError::Validation("name must not be empty".into()));
        }
        if self.name.chars().count() > MAX_NAME_LEN {
            return Err(DomainError::Validation(format!(
                "name must be at most {} characters",
                MAX_NAME_LEN
            )));
        }
        if let Some(desc) = &self.description {
            if desc.chars().count() > MAX_DESCRIPTION_LEN {
                return Err(DomainError::Validation(format!(
                    "description must be at most {} characters",
                    MAX_DESCRIPTION_LEN
                )));
            }
        }
        Ok(())
    }
}
