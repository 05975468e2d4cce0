use askama::Template;

use crate::application::admin::posts::{PostEditorButtons, PostFormErrors};

use super::AdminLayout;

#[derive(Clone)]
pub struct AdminPostRowView {
    pub title: String,
    pub slug: String,
    pub edit_href: String,
    pub updated_at: String,
}

#[derive(Clone)]
pub struct AdminPostListView {
    pub heading: String,
    pub posts: Vec<AdminPostRowView>,
    pub new_post_href: String,
    pub empty_message: String,
}

impl AdminPostListView {
    pub fn has_posts(&self) -> bool {
        !self.posts.is_empty()
    }
}

#[derive(Clone)]
pub struct AdminPostEditorView {
    pub heading: String,
    pub is_new_post: bool,
    pub title: String,
    pub slug: String,
    pub markdown: String,
    pub errors: PostFormErrors,
    pub buttons: PostEditorButtons,
    pub back_href: String,
}

#[derive(Template)]
#[template(path = "admin/posts.html")]
pub struct AdminPostsTemplate {
    pub view: AdminLayout<AdminPostListView>,
}

#[derive(Template)]
#[template(path = "admin/post_edit.html")]
pub struct AdminPostEditTemplate {
    pub view: AdminLayout<AdminPostEditorView>,
}
