//! Prompt Routes - Catalog CRUD, rendering and tag management
//!
//! HTTP handlers that delegate to PromptService for business logic.

use axum::{
    extract::{Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use uuid::Uuid;

use promptlab::PromptFilter;

use crate::models::{
    AddTagsRequest, CreatePromptRequest, ListPromptsQuery, PatchPromptRequest,
    PromptListResponse, PromptResponse, PromptVariablesResponse, RenderPromptRequest,
    RenderPromptResponse, UpdatePromptRequest,
};
use crate::routes::domain_error_response;
use crate::AppState;

/// List prompts with optional collection/search/tag filters
#[utoipa::path(
    get,
    path = "/prompts",
    params(ListPromptsQuery),
    responses(
        (status = 200, description = "Filtered prompts in stable order", body = PromptListResponse),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn list_prompts(
    State(state): State<AppState>,
    Query(query): Query<ListPromptsQuery>,
) -> Result<Json<PromptListResponse>, (axum::http::StatusCode, String)> {
    let filter = PromptFilter {
        collection_id: query.collection_id,
        search: query.search,
        tag: query.tag,
    };
    let (prompts, total) = state
        .prompt_service
        .list(&filter)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(PromptListResponse {
        prompts: prompts.into_iter().map(PromptResponse::from).collect(),
        total,
    }))
}

/// Create new prompt
#[utoipa::path(
    post,
    path = "/prompts",
    request_body = CreatePromptRequest,
    responses(
        (status = 201, description = "Prompt created", body = PromptResponse),
        (status = 400, description = "Unknown collection reference or invalid fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn create_prompt(
    State(state): State<AppState>,
    Json(payload): Json<CreatePromptRequest>,
) -> Result<(axum::http::StatusCode, Json<PromptResponse>), (axum::http::StatusCode, String)> {
    let prompt = state
        .prompt_service
        .create(
            payload.title,
            payload.content,
            payload.description,
            payload.collection_id,
            payload.tags.into_iter().collect(),
        )
        .await
        .map_err(domain_error_response)?;

    Ok((
        axum::http::StatusCode::CREATED,
        Json(PromptResponse::from(prompt)),
    ))
}

/// Get prompt by ID
#[utoipa::path(
    get,
    path = "/prompts/{id}",
    params(("id" = Uuid, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Prompt found", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn get_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromptResponse>, (axum::http::StatusCode, String)> {
    let prompt = state
        .prompt_service
        .get_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or((
            axum::http::StatusCode::NOT_FOUND,
            "Prompt not found".to_string(),
        ))?;

    Ok(Json(PromptResponse::from(prompt)))
}

/// Update prompt (full replace; omitted optional fields clear)
#[utoipa::path(
    put,
    path = "/prompts/{id}",
    params(("id" = Uuid, Path, description = "Prompt ID")),
    request_body = UpdatePromptRequest,
    responses(
        (status = 200, description = "Prompt updated", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 400, description = "Unknown collection reference or invalid fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn update_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdatePromptRequest>,
) -> Result<Json<PromptResponse>, (axum::http::StatusCode, String)> {
    let prompt = state
        .prompt_service
        .update(
            id,
            payload.title,
            payload.content,
            payload.description,
            payload.collection_id,
            payload.tags.into_iter().collect(),
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(PromptResponse::from(prompt)))
}

/// Patch prompt (only supplied fields change)
#[utoipa::path(
    patch,
    path = "/prompts/{id}",
    params(("id" = Uuid, Path, description = "Prompt ID")),
    request_body = PatchPromptRequest,
    responses(
        (status = 200, description = "Prompt patched", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 400, description = "Unknown collection reference or invalid fields"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn patch_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<PatchPromptRequest>,
) -> Result<Json<PromptResponse>, (axum::http::StatusCode, String)> {
    let prompt = state
        .prompt_service
        .patch(
            id,
            payload.title,
            payload.content,
            payload.description,
            payload.collection_id,
            payload.tags.map(|tags| tags.into_iter().collect()),
        )
        .await
        .map_err(domain_error_response)?;

    Ok(Json(PromptResponse::from(prompt)))
}

/// Delete prompt
#[utoipa::path(
    delete,
    path = "/prompts/{id}",
    params(("id" = Uuid, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Prompt deleted"),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn delete_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, (axum::http::StatusCode, String)> {
    let deleted = state
        .prompt_service
        .delete(id)
        .await
        .map_err(domain_error_response)?;

    if !deleted {
        return Err((
            axum::http::StatusCode::NOT_FOUND,
            "Prompt not found".to_string(),
        ));
    }

    Ok(Json(serde_json::json!({
        "status": "ok",
        "message": "Prompt deleted"
    })))
}

/// Render prompt content against supplied variables
#[utoipa::path(
    post,
    path = "/prompts/{id}/render",
    params(("id" = Uuid, Path, description = "Prompt ID")),
    request_body = RenderPromptRequest,
    responses(
        (status = 200, description = "Rendered content", body = RenderPromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 400, description = "Missing template variable"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn render_prompt(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<RenderPromptRequest>,
) -> Result<Json<RenderPromptResponse>, (axum::http::StatusCode, String)> {
    let rendered = state
        .prompt_service
        .render(id, &payload.variables)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(RenderPromptResponse { rendered }))
}

/// Report the variables a prompt requires, without rendering
#[utoipa::path(
    get,
    path = "/prompts/{id}/variables",
    params(("id" = Uuid, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Required placeholder names", body = PromptVariablesResponse),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn get_prompt_variables(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PromptVariablesResponse>, (axum::http::StatusCode, String)> {
    let variables = state
        .prompt_service
        .variables(id)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(PromptVariablesResponse {
        variables: variables.into_iter().collect(),
    }))
}

/// List a prompt's tags
#[utoipa::path(
    get,
    path = "/prompts/{id}/tags",
    params(("id" = Uuid, Path, description = "Prompt ID")),
    responses(
        (status = 200, description = "Tags in lexicographic order", body = Vec<String>),
        (status = 404, description = "Prompt not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn list_prompt_tags(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<String>>, (axum::http::StatusCode, String)> {
    let prompt = state
        .prompt_service
        .get_by_id(id)
        .await
        .map_err(domain_error_response)?
        .ok_or((
            axum::http::StatusCode::NOT_FOUND,
            "Prompt not found".to_string(),
        ))?;

    Ok(Json(prompt.tags.into_iter().collect()))
}

/// Add tags to a prompt
#[utoipa::path(
    post,
    path = "/prompts/{id}/tags",
    params(("id" = Uuid, Path, description = "Prompt ID")),
    request_body = AddTagsRequest,
    responses(
        (status = 200, description = "Prompt with updated tags", body = PromptResponse),
        (status = 404, description = "Prompt not found"),
        (status = 400, description = "Empty or blank tag labels"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn add_prompt_tags(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AddTagsRequest>,
) -> Result<Json<PromptResponse>, (axum::http::StatusCode, String)> {
    let prompt = state
        .prompt_service
        .add_tags(id, payload.tags)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(PromptResponse::from(prompt)))
}

/// Remove a tag from a prompt
#[utoipa::path(
    delete,
    path = "/prompts/{id}/tags/{tag}",
    params(
        ("id" = Uuid, Path, description = "Prompt ID"),
        ("tag" = String, Path, description = "Tag label")
    ),
    responses(
        (status = 200, description = "Prompt with updated tags", body = PromptResponse),
        (status = 404, description = "Prompt or tag not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "Prompt"
)]
pub async fn remove_prompt_tag(
    State(state): State<AppState>,
    Path((id, tag)): Path<(Uuid, String)>,
) -> Result<Json<PromptResponse>, (axum::http::StatusCode, String)> {
    let prompt = state
        .prompt_service
        .remove_tag(id, &tag)
        .await
        .map_err(domain_error_response)?;

    Ok(Json(PromptResponse::from(prompt)))
}

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/prompts", get(list_prompts).post(create_prompt))
        .route(
            "/prompts/:id",
            get(get_prompt)
                .put(update_prompt)
                .patch(patch_prompt)
                .delete(delete_prompt),
        )
        .route("/prompts/:id/render", post(render_prompt))
        .route("/prompts/:id/variables", get(get_prompt_variables))
        .route(
            "/prompts/:id/tags",
            get(list_prompt_tags).post(add_prompt_tags),
        )
        .route("/prompts/:id/tags/:tag", delete(remove_prompt_tag))
}
