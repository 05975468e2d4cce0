use tracing::info;

use crate::application::repos::{NewPost, PostChanges};
use crate::domain::{error::DomainError, posts::is_new_post_slug, types::PostIntent};

use super::service::AdminPostService;
use super::types::{ADMIN_POSTS_PATH, AdminPostError, PostActionOutcome, PostSubmission};
use super::validation::validate_submission;

impl AdminPostService {
    /// Action for the editor route.
    ///
    /// A `delete` intent removes the post addressed by `route_slug` without looking at the
    /// other fields. Anything else is validated first, then creates a post when the route is
    /// the `new` sentinel and otherwise updates the post at `route_slug`. The submitted slug is
    /// ignored on update, so a post keeps the slug it is stored under.
    pub async fn submit(
        &self,
        route_slug: &str,
        submission: PostSubmission,
    ) -> Result<PostActionOutcome, AdminPostError> {
        if submission.intent == Some(PostIntent::Delete) {
            return self.delete(route_slug).await;
        }

        let errors = validate_submission(&submission);
        if !errors.is_empty() {
            return Ok(PostActionOutcome::Invalid { errors, submission });
        }

        let PostSubmission {
            title: Some(title),
            slug: Some(slug),
            markdown: Some(markdown),
            ..
        } = submission
        else {
            return Err(DomainError::invariant("validated submission is missing a field").into());
        };

        if is_new_post_slug(route_slug) {
            let post = self
                .writer
                .create_post(NewPost {
                    title,
                    slug,
                    markdown,
                })
                .await?;
            info!(
                target = "postdesk::admin::posts",
                slug = %post.slug,
                "post created"
            );
        } else {
            let post = self
                .writer
                .update_post(PostChanges {
                    title,
                    slug: route_slug.to_string(),
                    markdown,
                })
                .await?;
            info!(
                target = "postdesk::admin::posts",
                slug = %post.slug,
                "post updated"
            );
        }

        Ok(PostActionOutcome::Redirect(ADMIN_POSTS_PATH.to_string()))
    }

    async fn delete(&self, route_slug: &str) -> Result<PostActionOutcome, AdminPostError> {
        if is_new_post_slug(route_slug) {
            return Err(AdminPostError::ConstraintViolation("intent"));
        }

        self.writer.delete_post(route_slug).await?;
        info!(
            target = "postdesk::admin::posts",
            slug = route_slug,
            "post deleted"
        );

        Ok(PostActionOutcome::Redirect(ADMIN_POSTS_PATH.to_string()))
    }
}
