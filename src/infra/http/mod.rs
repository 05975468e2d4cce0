mod admin;
mod middleware;

pub use admin::{AdminState, build_admin_router};
pub use middleware::{REQUEST_ID_HEADER, RequestContext};

use crate::application::error::HttpError;
use crate::application::repos::RepoError;
use axum::http::StatusCode;

/// Map a repository error to a consistent HTTP error response.
pub fn repo_error_to_http(source: &'static str, err: RepoError) -> HttpError {
    match err {
        RepoError::Duplicate { constraint } => {
            HttpError::new(source, StatusCode::CONFLICT, "Duplicate record", constraint)
        }
        RepoError::NotFound => HttpError::new(
            source,
            StatusCode::NOT_FOUND,
            "Resource not found",
            "resource not found",
        ),
        RepoError::Persistence(message) => HttpError::new(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Persistence error",
            message,
        ),
    }
}
