//! In-process repository implementations.

mod seed;

pub use seed::{SeedPost, load_seed};

use std::collections::HashMap;
use std::collections::hash_map::Entry;

use async_trait::async_trait;
use time::OffsetDateTime;
use tokio::sync::RwLock;

use crate::application::repos::{NewPost, PostChanges, PostsRepo, PostsWriteRepo, RepoError};
use crate::domain::entities::PostRecord;

const POSTS_SLUG_CONSTRAINT: &str = "posts_slug_key";

/// Posts keyed by slug, held for the lifetime of the process.
#[derive(Debug, Default)]
pub struct InMemoryRepositories {
    posts: RwLock<HashMap<String, PostRecord>>,
}

impl InMemoryRepositories {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn health_check(&self) -> Result<(), RepoError> {
        let _posts = self.posts.read().await;
        Ok(())
    }

    pub async fn post_count(&self) -> usize {
        self.posts.read().await.len()
    }
}

#[async_trait]
impl PostsRepo for InMemoryRepositories {
    async fn get_post(&self, slug: &str) -> Result<Option<PostRecord>, RepoError> {
        Ok(self.posts.read().await.get(slug).cloned())
    }

    async fn list_posts(&self) -> Result<Vec<PostRecord>, RepoError> {
        let mut posts: Vec<PostRecord> = self.posts.read().await.values().cloned().collect();
        posts.sort_by(|a, b| {
            b.updated_at
                .cmp(&a.updated_at)
                .then_with(|| a.slug.cmp(&b.slug))
        });
        Ok(posts)
    }
}

#[async_trait]
impl PostsWriteRepo for InMemoryRepositories {
    async fn create_post(&self, params: NewPost) -> Result<PostRecord, RepoError> {
        let mut posts = self.posts.write().await;
        match posts.entry(params.slug) {
            Entry::Occupied(_) => Err(RepoError::Duplicate {
                constraint: POSTS_SLUG_CONSTRAINT.to_string(),
            }),
            Entry::Vacant(entry) => {
                let now = OffsetDateTime::now_utc();
                let record = PostRecord {
                    slug: entry.key().clone(),
                    title: params.title,
                    markdown: params.markdown,
                    created_at: now,
                    updated_at: now,
                };
                entry.insert(record.clone());
                Ok(record)
            }
        }
    }

    async fn update_post(&self, params: PostChanges) -> Result<PostRecord, RepoError> {
        let mut posts = self.posts.write().await;
        let record = posts.get_mut(&params.slug).ok_or(RepoError::NotFound)?;
        record.title = params.title;
        record.markdown = params.markdown;
        record.updated_at = OffsetDateTime::now_utc();
        Ok(record.clone())
    }

    async fn delete_post(&self, slug: &str) -> Result<(), RepoError> {
        match self.posts.write().await.remove(slug) {
            Some(_) => Ok(()),
            None => Err(RepoError::NotFound),
        }
    }
}
