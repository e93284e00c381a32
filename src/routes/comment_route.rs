use axum::{middleware, routing::get, routing::patch, Router};

use crate::config::AppState;
use crate::handlers::comment_handler::*;
use crate::middleware::auth_middleware::auth_middleware;

pub fn comment_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            "/{video_id}",
            get(list_comments_handler).post(add_comment_handler),
        )
        .route(
            "/c/{comment_id}",
            patch(update_comment_handler).delete(delete_comment_handler),
        )
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}
