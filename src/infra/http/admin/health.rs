use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use super::AdminState;
use crate::infra::http::repo_error_to_http;

pub(super) async fn admin_health(State(state): State<AdminState>) -> Response {
    match state.store.health_check().await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(err) => repo_error_to_http("infra::http::admin_health", err).into_response(),
    }
}
