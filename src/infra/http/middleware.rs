use std::time::Instant;

use axum::{
    body::Body,
    http::{HeaderName, HeaderValue, Method, Request, StatusCode, Uri},
    middleware::Next,
    response::Response,
};
use tracing::{debug, error, warn};
use uuid::Uuid;

use crate::application::error::ErrorReport;

pub const REQUEST_ID_HEADER: HeaderName = HeaderName::from_static("x-request-id");

/// Per-request metadata shared between the middleware layers.
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub request_id: String,
}

/// Tag the request with a fresh id and echo it back as `x-request-id`.
pub async fn set_request_context(mut request: Request<Body>, next: Next) -> Response {
    let ctx = RequestContext {
        request_id: Uuid::new_v4().to_string(),
    };
    request.extensions_mut().insert(ctx.clone());

    let mut response = next.run(request).await;
    if let Ok(value) = HeaderValue::from_str(&ctx.request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }
    response.extensions_mut().insert(ctx);
    response
}

/// Log every completed request; failures carry the attached `ErrorReport` chain.
pub async fn log_responses(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .extensions()
        .get::<RequestContext>()
        .map(|ctx| ctx.request_id.clone())
        .unwrap_or_default();
    let start = Instant::now();

    let mut response = next.run(request).await;
    let status = response.status();
    let elapsed_ms = start.elapsed().as_millis();

    if !(status.is_client_error() || status.is_server_error()) {
        debug!(
            target = "postdesk::http::response",
            status = status.as_u16(),
            method = %method,
            path = %uri.path(),
            elapsed_ms,
            request_id,
            "request completed",
        );
        return response;
    }

    let report = response.extensions_mut().remove::<ErrorReport>();
    log_failure(&method, &uri, status, elapsed_ms, &request_id, report);
    response
}

fn log_failure(
    method: &Method,
    uri: &Uri,
    status: StatusCode,
    elapsed_ms: u128,
    request_id: &str,
    report: Option<ErrorReport>,
) {
    let (source, chain) = match report {
        Some(report) => (report.source, report.messages),
        None => ("unknown", Vec::new()),
    };
    let detail = chain
        .first()
        .map(String::as_str)
        .unwrap_or("no diagnostic available");

    if status.is_server_error() {
        error!(
            target = "postdesk::http::response",
            status = status.as_u16(),
            method = %method,
            path = %uri.path(),
            elapsed_ms,
            source,
            detail,
            chain = ?chain,
            request_id,
            "request failed",
        );
    } else {
        warn!(
            target = "postdesk::http::response",
            status = status.as_u16(),
            method = %method,
            path = %uri.path(),
            elapsed_ms,
            source,
            detail,
            chain = ?chain,
            request_id,
            "request rejected",
        );
    }
}
