pub mod comment_handler;
pub mod like_handler;
pub mod playlist_handler;
pub mod subscription_handler;
pub mod tweet_handler;
pub mod video_handler;

use axum::response::IntoResponse;

use crate::utils::api_response::ApiResponse;

pub async fn health_check_handler() -> impl IntoResponse {
    ApiResponse::ok(
        serde_json::json!({ "status": "up" }),
        "Server is healthy",
    )
}
