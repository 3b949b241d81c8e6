//! Collection Routes - Grouping management
//!
//! HTTP handlers that delegate to CollectionService for business
//! logic. Deleting a collection detaches its member prompts instead of
//! destroying them.

use axum::{
    extract::{Path, State},
    routing::get,
    Json, Router,
};
use uuid::Uuid;

use crate::models::{CollectionListResponse, CollectionResponse, CreateCollectionRequest};
use crate::routes::domain_error_response;
use crate::AppState;

/// List all collections in creation order
#[utoipa::path(
    get,
    path = "/collections",
    responses(
        (status = 200, description = "Collections in creation order", body = CollectionListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Collection"
)]
pub async fn list_collections(
    State(state): State<AppState>,
) -> Result<Json<CollectionListResponse>, (axum::http::StatusCode, String)> {
    let collections = state
        .collection_service
        .list_all()
        .await
        .map_err(domain_error_response)?;

    let total = collections.len();
    Ok(Json(CollectionListResponse {
        collections: collections
            .into_iter()
            .map(CollectionResponse::from)
            .collect(),
        total,
    }))
}

/// Create new collection
#[utoipa::path(
    post,
    path = "/collections",
    request_body = CreateCollectionRequest,
    responses(
        (status = 201, description = "Collection created", body = CollectionResponse),
        (status = 400, description = "Invalid fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Collection"
)]
pub async fn create_collection(
    State(state): State<AppState>,
    Json(payload): Json<CreateCollectionRequest>,
) -> Result<(axum::http::StatusCode, Json<CollectionResponse>), (axum::http::StatusCode, String)> {
    let collection = state
        .collection_service
        .create(payload.name, payload.description)
        .await
        .map_err(domain_error_response)?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(CollectionResponse::from(collection)),
    ))
}

/// Get collection by ID
#[utoipa::path(
    get,
    path = "/collections/{id}",
    params(("id" = Uuid, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Collection found", body = CollectionResponse),
        (status = 404, description = "Collection not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Collection"
)]
pub async fn get_collection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<CollectionResponse>, (axum::http::StatusCode, String)> {
    let collection = state
        .collection_service
        .get_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or((
            axum::http::StatusCode::NOT_FOUND,
            "Collection not found".to_string(),
        ))?;

    Ok(Json(CollectionResponse::from(collection)))
}

/// Delete collection, detaching member prompts
#[utoipa::path(
    delete,
    path = "/collections/{id}",
    params(("id" = Uuid, Path, description = "Collection ID")),
    responses(
        (status = 200, description = "Collection deleted; member prompts detached"),
        (status = 404, description = "Collection not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Collection"
)]
pub async fn delete_collection(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (axum::http::StatusCode, String)> {
    let deleted = state
        .collection_service
        .delete(id)
        .await
        .map_err(domain_error_response)?;

    if !deleted {
        return Err((
            axum::http::StatusCode::NOT_FOUND,
            "Collection not found".to_string(),
        ));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Collection deleted"
    })))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/collections", get(list_collections).post(create_collection))
        .route(
            "/collections/:id",
            get(get_collection).delete(delete_collection),
        )
}
