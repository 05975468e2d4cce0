use crate::domain::{entities::PostRecord, posts::is_new_post_slug};

use super::service::AdminPostService;
use super::types::{AdminPostError, PostEditorData};

impl AdminPostService {
    /// Loader for the editor route. The `new` sentinel yields an empty form.
    pub async fn load_editor(&self, route_slug: &str) -> Result<PostEditorData, AdminPostError> {
        if is_new_post_slug(route_slug) {
            return Ok(PostEditorData { post: None });
        }

        match self.reader.get_post(route_slug).await? {
            Some(post) => Ok(PostEditorData { post: Some(post) }),
            None => Err(AdminPostError::NotFound {
                slug: route_slug.to_string(),
            }),
        }
    }

    pub async fn list_posts(&self) -> Result<Vec<PostRecord>, AdminPostError> {
        self.reader.list_posts().await.map_err(AdminPostError::from)
    }
}
