use axum::{middleware, routing::get, routing::post, Router};

use crate::config::AppState;
use crate::handlers::like_handler::*;
use crate::middleware::auth_middleware::auth_middleware;

pub fn like_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/toggle/v/{video_id}", post(toggle_video_like_handler))
        .route("/toggle/c/{comment_id}", post(toggle_comment_like_handler))
        .route("/toggle/t/{tweet_id}", post(toggle_tweet_like_handler))
        .route("/videos", get(liked_videos_handler))
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}
