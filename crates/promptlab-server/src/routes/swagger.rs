//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use crate::models::{
    AddTagsRequest,
    // Collection models
    CollectionListResponse,
    CollectionResponse,
    CreateCollectionRequest,
    // Prompt models
    CreatePromptRequest,
    PatchPromptRequest,
    PromptListResponse,
    PromptResponse,
    PromptVariablesResponse,
    RenderPromptRequest,
    RenderPromptResponse,
    UpdatePromptRequest,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        // Prompt endpoints
        super::prompt::list_prompts,
        super::prompt::create_prompt,
        super::prompt::get_prompt,
        super::prompt::update_prompt,
        super::prompt::patch_prompt,
        super::prompt::delete_prompt,
        super::prompt::render_prompt,
        super::prompt::get_prompt_variables,
        super::prompt::list_prompt_tags,
        super::prompt::add_prompt_tags,
        super::prompt::remove_prompt_tag,
        // Collection endpoints
        super::collection::list_collections,
        super::collection::create_collection,
        super::collection::get_collection,
        super::collection::delete_collection,
    ),
    info(
        title = "PromptLab API",
        version = "0.2.0",
        description = "Prompt catalog with collections, template-variable rendering, tagging and search.",
        license(name = "MIT"),
    ),
    servers(
        (url = "/", description = "Current server"),
    ),
    tags(
        (name = "Health", description = "Health check endpoints"),
        (name = "Prompt", description = "Prompt - reusable text templates with placeholders"),
        (name = "Collection", description = "Collection - named groupings of prompts"),
    ),
    components(
        schemas(
            // Prompt
            CreatePromptRequest,
            UpdatePromptRequest,
            PatchPromptRequest,
            PromptResponse,
            PromptListResponse,
            RenderPromptRequest,
            RenderPromptResponse,
            PromptVariablesResponse,
            AddTagsRequest,
            // Collection
            CreateCollectionRequest,
            CollectionResponse,
            CollectionListResponse,
        )
    ),
)]
pub struct ApiDoc;
