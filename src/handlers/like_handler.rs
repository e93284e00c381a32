use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::models::auth_model::CurrentUser;
use crate::models::like_model::LikeResponse;
use crate::services::like_service::LikeService;
use crate::utils::api_error::ApiError;
use crate::utils::api_response::ApiResponse;

pub async fn toggle_video_like_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(video_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let toggled = LikeService::toggle_video_like(&state.db, &user, video_id).await?;
    Ok(toggle_response(
        toggled,
        "Video liked successfully",
        "Video unliked successfully",
    ))
}

pub async fn toggle_comment_like_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(comment_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let toggled = LikeService::toggle_comment_like(&state.db, &user, comment_id).await?;
    Ok(toggle_response(
        toggled,
        "Comment liked successfully",
        "Comment unliked successfully",
    ))
}

pub async fn toggle_tweet_like_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(tweet_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    let toggled = LikeService::toggle_tweet_like(&state.db, &user, tweet_id).await?;
    Ok(toggle_response(
        toggled,
        "Tweet liked successfully",
        "Tweet unliked successfully",
    ))
}

pub async fn liked_videos_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
) -> Result<impl IntoResponse, ApiError> {
    let videos = LikeService::liked_videos(&state.db, &user).await?;
    Ok(ApiResponse::ok(
        videos,
        "Liked videos retrieved successfully",
    ))
}

fn toggle_response(
    toggled: Option<LikeResponse>,
    added_message: &str,
    removed_message: &str,
) -> Response {
    match toggled {
        Some(like) => {
            ApiResponse::created(serde_json::json!(like), added_message).into_response()
        }
        None => ApiResponse::ok(serde_json::json!({}), removed_message).into_response(),
    }
}
