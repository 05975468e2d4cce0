//! Post identity helpers shared by the admin workflow.

/// Route slug that addresses the empty "new post" form rather than a stored post.
pub const NEW_POST_SLUG: &str = "new";

pub fn is_new_post_slug(slug: &str) -> bool {
    slug == NEW_POST_SLUG
}
