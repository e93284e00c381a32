use axum::http::Method;
use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::AppState;

pub mod comment_route;
pub mod like_route;
pub mod playlist_route;
pub mod subscription_route;
pub mod tweet_route;
pub mod video_route;

pub fn create_routes(state: AppState) -> Router<AppState> {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_origin(Any)
        .allow_headers(Any);

    Router::new()
        .nest("/api/videos", video_route::video_routes(state.clone()))
        .nest("/api/comments", comment_route::comment_routes(state.clone()))
        .nest("/api/likes", like_route::like_routes(state.clone()))
        .nest("/api/tweets", tweet_route::tweet_routes(state.clone()))
        .nest(
            "/api/playlists",
            playlist_route::playlist_routes(state.clone()),
        )
        .nest(
            "/api/subscriptions",
            subscription_route::subscription_routes(state),
        )
        // Health check
        .route("/api/health", axum::routing::get(crate::handlers::health_check_handler))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}
