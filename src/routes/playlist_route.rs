use axum::{middleware, routing::get, routing::patch, routing::post, Router};

use crate::config::AppState;
use crate::handlers::playlist_handler::*;
use crate::middleware::auth_middleware::auth_middleware;

pub fn playlist_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_playlist_handler))
        .route("/user/{user_id}", get(user_playlists_handler))
        .route(
            "/{playlist_id}",
            get(get_playlist_handler)
                .patch(update_playlist_handler)
                .delete(delete_playlist_handler),
        )
        .route(
            "/{playlist_id}/videos/{video_id}",
            patch(add_playlist_video_handler).delete(remove_playlist_video_handler),
        )
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}
