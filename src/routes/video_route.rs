use axum::extract::DefaultBodyLimit;
use axum::{middleware, routing::get, routing::patch, Router};

use crate::config::AppState;
use crate::handlers::video_handler::*;
use crate::middleware::auth_middleware::auth_middleware;

pub fn video_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_videos_handler).post(publish_video_handler))
        .route(
            "/{video_id}",
            get(get_video_handler)
                .patch(update_video_handler)
                .delete(delete_video_handler),
        )
        .route("/{video_id}/toggle-publish", patch(toggle_publish_handler))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
        // Raw video uploads blow past the default 2 MB body cap
        .layer(DefaultBodyLimit::max(512 * 1024 * 1024))
}
