mod health;
mod posts;
mod state;

pub use state::AdminState;

use axum::{Router, middleware, response::Redirect, routing::get};

use crate::application::admin::posts::ADMIN_POSTS_PATH;

use super::middleware::{log_responses, set_request_context};

pub fn build_admin_router(state: AdminState) -> Router {
    Router::new()
        .route("/", get(admin_root))
        .route("/posts/admin", get(posts::admin_posts))
        .route(
            "/posts/admin/{slug}",
            get(posts::admin_post_edit).post(posts::admin_post_action),
        )
        .route("/_health", get(health::admin_health))
        .with_state(state)
        .layer(middleware::from_fn(log_responses))
        .layer(middleware::from_fn(set_request_context))
}

async fn admin_root() -> Redirect {
    Redirect::to(ADMIN_POSTS_PATH)
}
