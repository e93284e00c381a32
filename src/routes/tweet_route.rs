use axum::{middleware, routing::get, routing::patch, routing::post, Router};

use crate::config::AppState;
use crate::handlers::tweet_handler::*;
use crate::middleware::auth_middleware::auth_middleware;

pub fn tweet_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", post(create_tweet_handler))
        .route("/user/{user_id}", get(user_tweets_handler))
        .route(
            "/{tweet_id}",
            patch(update_tweet_handler).delete(delete_tweet_handler),
        )
        .layer(middleware::from_fn_with_state(state, auth_middleware))
}
