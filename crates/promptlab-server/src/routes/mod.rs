//! HTTP Routes
//!
//! Thin handlers that delegate to the application services.

pub mod collection;
pub mod prompt;
pub mod swagger;

use promptlab::DomainError;

/// Map domain errors onto client-visible statuses: absent resources
/// are 404, rejected input (unknown collection reference, missing
/// template variable, structural violations) is 400, store failures
/// are 500.
pub fn domain_error_response(e: DomainError) -> (axum::http::StatusCode, String) {
    let status = match &e {
        DomainError::NotFound { .. } => axum::http::StatusCode::NOT_FOUND,
        DomainError::InvalidReference { .. }
        | DomainError::MissingVariable(_)
        | DomainError::Validation(_) => axum::http::StatusCode::BAD_REQUEST,
        DomainError::Repository(_) => axum::http::StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, e.to_string())
}
