use percent_encoding::{AsciiSet, CONTROLS, utf8_percent_encode};
use time::format_description::well_known::Rfc3339;

use crate::{
    application::admin::posts::ADMIN_POSTS_PATH,
    domain::{entities::PostRecord, posts::NEW_POST_SLUG},
    presentation::admin::views::{AdminPostListView, AdminPostRowView},
};

/// Characters that cannot appear raw inside one path segment.
const PATH_SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'/')
    .add(b'<')
    .add(b'>')
    .add(b'?')
    .add(b'`')
    .add(b'{')
    .add(b'}');

/// Editor link for `slug`, encoded so that it always routes to `/posts/admin/{slug}`.
pub(super) fn editor_href(slug: &str) -> String {
    format!("{ADMIN_POSTS_PATH}/{}", utf8_percent_encode(slug, PATH_SEGMENT))
}

pub(super) fn build_post_list_view(posts: &[PostRecord]) -> AdminPostListView {
    let rows = posts
        .iter()
        .map(|post| AdminPostRowView {
            title: post.title.clone(),
            slug: post.slug.clone(),
            edit_href: editor_href(&post.slug),
            updated_at: post
                .updated_at
                .format(&Rfc3339)
                .unwrap_or_else(|_| post.updated_at.to_string()),
        })
        .collect();

    AdminPostListView {
        heading: "Blog Admin".to_string(),
        posts: rows,
        new_post_href: format!("{ADMIN_POSTS_PATH}/{NEW_POST_SLUG}"),
        empty_message: "No posts yet.".to_string(),
    }
}
