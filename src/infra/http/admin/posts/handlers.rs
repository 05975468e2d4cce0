use axum::{
    extract::{Form, Path, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};

use crate::{
    application::{admin::posts::PostActionOutcome, error::HttpError},
    presentation::{
        admin::views::{AdminLayout, AdminPostEditTemplate, AdminPostsTemplate},
        views::render_page,
    },
};

use super::super::AdminState;
use super::editor::{build_post_editor_view, build_rejected_editor_view, editor_heading};
use super::errors::admin_post_error;
use super::forms::AdminPostForm;
use super::panel::build_post_list_view;

pub(crate) async fn admin_posts(State(state): State<AdminState>) -> Response {
    let posts = match state.posts.list_posts().await {
        Ok(posts) => posts,
        Err(err) => return admin_post_error("infra::http::admin_posts", err).into_response(),
    };

    let view = AdminLayout::new("Posts", build_post_list_view(&posts));
    render_page("admin/posts", AdminPostsTemplate { view }, StatusCode::OK)
}

pub(crate) async fn admin_post_edit(
    State(state): State<AdminState>,
    Path(slug): Path<String>,
) -> Response {
    let data = match state.posts.load_editor(&slug).await {
        Ok(data) => data,
        Err(err) => {
            return admin_post_error("infra::http::admin_post_edit", err).into_response();
        }
    };

    let content = build_post_editor_view(&data);
    let view = AdminLayout::new(content.heading.clone(), content);
    render_page("admin/post_edit", AdminPostEditTemplate { view }, StatusCode::OK)
}

pub(crate) async fn admin_post_action(
    State(state): State<AdminState>,
    Path(slug): Path<String>,
    Form(form): Form<AdminPostForm>,
) -> Response {
    let submission = match form.into_submission() {
        Ok(submission) => submission,
        Err(err) => {
            return HttpError::from_error(
                "infra::http::admin_post_action",
                StatusCode::BAD_REQUEST,
                "Post request could not be processed",
                &err,
            )
            .into_response();
        }
    };

    match state.posts.submit(&slug, submission).await {
        Ok(PostActionOutcome::Redirect(location)) => Redirect::to(&location).into_response(),
        Ok(PostActionOutcome::Invalid { errors, submission }) => {
            let content = build_rejected_editor_view(&slug, submission, errors);
            let view = AdminLayout::new(editor_heading(content.is_new_post), content);
            render_page(
                "admin/post_edit",
                AdminPostEditTemplate { view },
                StatusCode::UNPROCESSABLE_ENTITY,
            )
        }
        Err(err) => admin_post_error("infra::http::admin_post_action", err).into_response(),
    }
}
