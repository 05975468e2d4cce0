//! Editor view construction for the post form.

use crate::{
    application::admin::posts::{
        ADMIN_POSTS_PATH, PostEditorButtons, PostEditorData, PostFormErrors, PostSubmission,
    },
    domain::posts::is_new_post_slug,
    presentation::admin::views::AdminPostEditorView,
};

pub(super) fn editor_heading(is_new_post: bool) -> &'static str {
    if is_new_post { "New Post" } else { "Edit Post" }
}

/// Editor pre-filled from the loaded post, or blank for the new-post form.
pub(super) fn build_post_editor_view(data: &PostEditorData) -> AdminPostEditorView {
    let is_new_post = data.is_new_post();
    let (title, slug, markdown) = match &data.post {
        Some(post) => (post.title.clone(), post.slug.clone(), post.markdown.clone()),
        None => (String::new(), String::new(), String::new()),
    };

    AdminPostEditorView {
        heading: editor_heading(is_new_post).to_string(),
        is_new_post,
        title,
        slug,
        markdown,
        errors: PostFormErrors::default(),
        buttons: PostEditorButtons::new(is_new_post, None),
        back_href: ADMIN_POSTS_PATH.to_string(),
    }
}

/// Editor re-rendered after a failed submission, keeping what the author typed.
pub(super) fn build_rejected_editor_view(
    route_slug: &str,
    submission: PostSubmission,
    errors: PostFormErrors,
) -> AdminPostEditorView {
    let is_new_post = is_new_post_slug(route_slug);
    let slug = if is_new_post {
        submission.slug.unwrap_or_default()
    } else {
        route_slug.to_string()
    };

    AdminPostEditorView {
        heading: editor_heading(is_new_post).to_string(),
        is_new_post,
        title: submission.title.unwrap_or_default(),
        slug,
        markdown: submission.markdown.unwrap_or_default(),
        errors,
        buttons: PostEditorButtons::new(is_new_post, None),
        back_href: ADMIN_POSTS_PATH.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use time::macros::datetime;

    use super::*;
    use crate::domain::entities::PostRecord;

    fn stored_post() -> PostRecord {
        PostRecord {
            slug: "hello".to_string(),
            title: "Hello".to_string(),
            markdown: "# Hello".to_string(),
            created_at: datetime!(2025-01-01 0:00 UTC),
            updated_at: datetime!(2025-01-02 0:00 UTC),
        }
    }

    #[test]
    fn new_post_editor_is_blank() {
        let view = build_post_editor_view(&PostEditorData { post: None });
        assert!(view.is_new_post);
        assert_eq!(view.heading, "New Post");
        assert!(view.title.is_empty() && view.slug.is_empty() && view.markdown.is_empty());
        assert!(view.buttons.delete.is_none());
    }

    #[test]
    fn existing_post_editor_is_prefilled() {
        let view = build_post_editor_view(&PostEditorData {
            post: Some(stored_post()),
        });
        assert!(!view.is_new_post);
        assert_eq!(view.title, "Hello");
        assert_eq!(view.slug, "hello");
        assert_eq!(view.markdown, "# Hello");
        assert!(view.buttons.delete.is_some());
    }

    #[test]
    fn rejected_update_keeps_the_stored_slug() {
        let submission = PostSubmission {
            title: Some(String::new()),
            slug: Some("renamed".to_string()),
            markdown: Some("body".to_string()),
            intent: None,
        };
        let errors = PostFormErrors {
            title: Some("Title is required".to_string()),
            ..Default::default()
        };

        let view = build_rejected_editor_view("hello", submission, errors.clone());
        assert_eq!(view.slug, "hello");
        assert_eq!(view.markdown, "body");
        assert_eq!(view.errors, errors);
    }

    #[test]
    fn rejected_create_keeps_the_typed_slug() {
        let submission = PostSubmission {
            slug: Some("draft-slug".to_string()),
            ..Default::default()
        };
        let view = build_rejected_editor_view("new", submission, PostFormErrors::default());
        assert!(view.is_new_post);
        assert_eq!(view.slug, "draft-slug");
        assert!(view.title.is_empty());
    }
}
