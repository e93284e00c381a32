use axum::{middleware, routing::get, routing::post, Router};

use crate::config::AppState;
use crate::handlers::subscription_handler::*;
use crate::middleware::auth_middleware::auth_middleware;

pub fn subscription_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/{channel_id}", post(toggle_subscription_handler))
        .route(
            "/channel/{channel_id}/subscribers",
            get(channel_subscribers_handler),
        )
        .route(
            "/user/{subscriber_id}/channels",
            get(subscribed_channels_handler),
        )
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}
