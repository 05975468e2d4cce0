//! Repository traits describing persistence adapters.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::PostRecord;

#[derive(Debug, Error)]
pub enum RepoError {
    #[error("persistence error: {0}")]
    Persistence(String),
    #[error("duplicate record violates unique constraint `{constraint}`")]
    Duplicate { constraint: String },
    #[error("resource not found")]
    NotFound,
}

impl RepoError {
    pub fn from_persistence(err: impl std::fmt::Display) -> Self {
        Self::Persistence(err.to_string())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub title: String,
    pub slug: String,
    pub markdown: String,
}

/// Full replacement of a stored post's editable fields, addressed by `slug`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PostChanges {
    pub title: String,
    pub slug: String,
    pub markdown: String,
}

#[async_trait]
pub trait PostsRepo: Send + Sync {
    async fn get_post(&self, slug: &str) -> Result<Option<PostRecord>, RepoError>;

    /// Every stored post, most recently updated first.
    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError>;
}

#[async_trait]
pub trait PostsWriteRepo: Send + Sync {
    async fn create_post(&self, params: NewPost) -> Result<PostRecord, RepoError>;

    async fn update_post(&self, params: PostChanges) -> Result<PostRecord, RepoError>;

    async fn delete_post(&self, slug: &str) -> Result<(), RepoError>;
}
