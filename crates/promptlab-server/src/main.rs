use std::sync::Arc;

use axum::{routing::get, Json, Router};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

mod adapters;
mod application;
mod models;
mod routes;

use adapters::{MemoryCollectionRepository, MemoryPromptRepository, MemoryStore};
use application::{CollectionService, PromptService};

/// Type aliases for application services with concrete repository implementations
pub type AppPromptService = PromptService<MemoryPromptRepository>;
pub type AppCollectionService = CollectionService<MemoryCollectionRepository>;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub prompt_service: Arc<AppPromptService>,
    pub collection_service: Arc<AppCollectionService>,
}

#[derive(Serialize)]
struct HealthCheck {
    status: String,
    message: String,
    version: String,
}

async fn health_check() -> Json<HealthCheck> {
    Json(HealthCheck {
        status: "healthy".to_string(),
        message: "PromptLab API is running".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("PromptLab API initializing...");

    // One shared store behind both repositories; the common handle is
    // what makes the collection-delete cascade atomic.
    let store = Arc::new(MemoryStore::new());
    let prompt_repo = Arc::new(MemoryPromptRepository::new(store.clone()));
    let collection_repo = Arc::new(MemoryCollectionRepository::new(store.clone()));
    let prompt_service = Arc::new(PromptService::new(prompt_repo));
    let collection_service = Arc::new(CollectionService::new(collection_repo));

    // Create application state
    let state = AppState {
        prompt_service,
        collection_service,
    };

    // OpenAPI documentation
    let openapi = routes::swagger::ApiDoc::openapi();

    // Build router with shared state
    let router = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
        .route("/health", get(health_check))
        .merge(routes::prompt::router())
        .merge(routes::collection::router())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse().ok())
        .unwrap_or(8000);
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;

    tracing::info!("Swagger UI: /swagger-ui");
    tracing::info!("PromptLab API ready on {}", listener.local_addr()?);

    axum::serve(listener, router).await?;

    Ok(())
}
