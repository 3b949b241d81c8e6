//! Collection DTOs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use promptlab::Collection;

/// Create collection request
#[derive(Debug, Deserialize, ToSchema)]
pub struct CreateCollectionRequest {
    pub name: String,
    pub description: Option<String>,
}

/// Collection response
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionResponse {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id,
            name: collection.name,
            description: collection.description,
            created_at: collection.created_at,
        }
    }
}

/// Collection listing in creation order
#[derive(Debug, Serialize, ToSchema)]
pub struct CollectionListResponse {
    pub collections: Vec<CollectionResponse>,
    pub total: usize,
}
