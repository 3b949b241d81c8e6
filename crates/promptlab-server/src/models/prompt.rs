//! Prompt DTOs
//!
//! Wire shapes for prompt endpoints. PATCH bodies use the tri-state
//! `Patch` wrapper on clearable fields so an omitted field and an
//! explicit null stay distinguishable.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use uuid::Uuid;

use promptlab::{Patch, Prompt};

/// Create prompt request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreatePromptRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Full-replace prompt request: omitted optional fields clear the
/// stored values
#[derive(Debug, Deserialize, ToSchema)]
pub struct UpdatePromptRequest {
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<Uuid>,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// Partial-update prompt request: omitted fields retain the stored
/// values; explicit nulls clear description/collection_id
#[derive(Debug, Deserialize, ToSchema)]
pub struct PatchPromptRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    #[serde(default)]
    #[schema(value_type = Option<String>)]
    pub description: Patch<String>,
    #[serde(default)]
    #[schema(value_type = Option<Uuid>)]
    pub collection_id: Patch<Uuid>,
    pub tags: Option<Vec<String>>,
}

/// Prompt response
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptResponse {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub description: Option<String>,
    pub collection_id: Option<Uuid>,
    /// Lexicographic order
    pub tags: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Prompt> for PromptResponse {
    fn from(prompt: Prompt) -> Self {
        Self {
            id: prompt.id,
            title: prompt.title,
            content: prompt.content,
            description: prompt.description,
            collection_id: prompt.collection_id,
            tags: prompt.tags.into_iter().collect(),
            created_at: prompt.created_at,
            updated_at: prompt.updated_at,
        }
    }
}

/// Prompt listing with the post-filter total
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptListResponse {
    pub prompts: Vec<PromptResponse>,
    pub total: usize,
}

/// Query parameters for prompt listing; criteria are conjunctive
#[derive(Debug, Deserialize, IntoParams)]
pub struct ListPromptsQuery {
    /// Exact match on the prompt's collection
    pub collection_id: Option<Uuid>,
    /// Case-insensitive substring over title, content and description
    pub search: Option<String>,
    /// Exact, case-sensitive tag membership
    pub tag: Option<String>,
}

/// Render request: placeholder name to value bindings
#[derive(Debug, Deserialize, ToSchema)]
pub struct RenderPromptRequest {
    #[serde(default)]
    pub variables: HashMap<String, String>,
}

/// Render response
#[derive(Debug, Serialize, ToSchema)]
pub struct RenderPromptResponse {
    pub rendered: String,
}

/// Placeholder names the prompt's content requires
#[derive(Debug, Serialize, ToSchema)]
pub struct PromptVariablesResponse {
    pub variables: Vec<String>,
}

/// Add-tags request
#[derive(Debug, Deserialize, ToSchema)]
pub struct AddTagsRequest {
    pub tags: Vec<String>,
}
