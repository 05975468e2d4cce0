use serde::Serialize;
use thiserror::Error;

use crate::{
    application::repos::RepoError,
    domain::{entities::PostRecord, error::DomainError, types::PostIntent},
};

/// Listing page every successful submission redirects to.
pub const ADMIN_POSTS_PATH: &str = "/posts/admin";

#[derive(Debug, Error)]
pub enum AdminPostError {
    #[error("{0}")]
    ConstraintViolation(&'static str),
    #[error("post not found: {slug}")]
    NotFound { slug: String },
    #[error(transparent)]
    Domain(#[from] DomainError),
    #[error(transparent)]
    Repo(#[from] RepoError),
}

/// Raw editor fields as submitted; absent fields stay `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PostSubmission {
    pub title: Option<String>,
    pub slug: Option<String>,
    pub markdown: Option<String>,
    pub intent: Option<PostIntent>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PostFormErrors {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markdown: Option<String>,
}

impl PostFormErrors {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.slug.is_none() && self.markdown.is_none()
    }
}

/// What the editor loader hands to the view. `post` is `None` for the new-post form.
#[derive(Debug, Clone, PartialEq)]
pub struct PostEditorData {
    pub post: Option<PostRecord>,
}

impl PostEditorData {
    pub fn is_new_post(&self) -> bool {
        self.post.is_none()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostActionOutcome {
    Redirect(String),
    /// Validation failed; the submission is handed back so the form can be re-rendered.
    Invalid {
        errors: PostFormErrors,
        submission: PostSubmission,
    },
}
