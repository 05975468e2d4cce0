use axum::http::StatusCode;

use crate::{
    application::{admin::posts::AdminPostError, error::HttpError},
    domain::error::DomainError,
    infra::http::repo_error_to_http,
};

pub(super) fn admin_post_error(source: &'static str, err: AdminPostError) -> HttpError {
    match err {
        AdminPostError::ConstraintViolation(field) => HttpError::new(
            source,
            StatusCode::BAD_REQUEST,
            "Post request could not be processed",
            format!("Invalid field `{field}`"),
        ),
        AdminPostError::NotFound { slug } => HttpError::new(
            source,
            StatusCode::NOT_FOUND,
            "Post not found",
            format!("Post not found: {slug}"),
        ),
        AdminPostError::Domain(DomainError::Validation { message }) => HttpError::new(
            source,
            StatusCode::BAD_REQUEST,
            "Post request could not be processed",
            message,
        ),
        AdminPostError::Domain(err) => HttpError::from_error(
            source,
            StatusCode::INTERNAL_SERVER_ERROR,
            "Internal server error",
            &err,
        ),
        AdminPostError::Repo(repo) => repo_error_to_http(source, repo),
    }
}
