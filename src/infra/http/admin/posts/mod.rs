mod editor;
mod errors;
mod forms;
mod handlers;
mod panel;

pub(super) use handlers::{admin_post_action, admin_post_edit, admin_posts};
