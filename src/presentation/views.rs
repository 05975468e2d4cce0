use askama::Template;
use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use thiserror::Error;

use crate::application::error::HttpError;

/// A page template that failed to render.
#[derive(Debug, Error)]
#[error("failed to render page `{page}`")]
pub struct TemplateRenderError {
    pub page: &'static str,
    #[source]
    pub error: askama::Error,
}

impl From<TemplateRenderError> for HttpError {
    fn from(err: TemplateRenderError) -> Self {
        HttpError::from_error(
            "presentation::views::render_page",
            StatusCode::INTERNAL_SERVER_ERROR,
            "Page could not be rendered",
            &err,
        )
    }
}

pub fn render_html<T: Template>(
    page: &'static str,
    template: &T,
) -> Result<Html<String>, TemplateRenderError> {
    template
        .render()
        .map(Html)
        .map_err(|error| TemplateRenderError { page, error })
}

/// Render `template` with `status`, or a 500 carrying the render failure.
pub fn render_page<T: Template>(page: &'static str, template: T, status: StatusCode) -> Response {
    match render_html(page, &template) {
        Ok(html) => (status, html).into_response(),
        Err(err) => HttpError::from(err).into_response(),
    }
}
