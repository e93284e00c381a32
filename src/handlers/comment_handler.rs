use axum::{
    extract::{Path, Query, State},
    response::IntoResponse,
    Extension,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::models::auth_model::CurrentUser;
use crate::models::comment_model::{CreateCommentRequest, UpdateCommentRequest};
use crate::services::comment_service::CommentService;
use crate::utils::api_error::ApiError;
use crate::utils::api_response::ApiResponse;
use crate::utils::pagination::PageQuery;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn list_comments_handler(
    State(state): State<AppState>,
    Path(video_id): Path<Uuid>,
    Query(paging): Query<PageQuery>,
) -> Result<impl IntoResponse, ApiError> {
    let res = CommentService::list_for_video(&state.db, video_id, paging).await?;
    Ok(ApiResponse::ok(res, "Comments retrieved successfully"))
}

pub async fn add_comment_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(video_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<CreateCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment = CommentService::add(&state.db, &user, video_id, payload.content).await?;
    Ok(ApiResponse::created(comment, "Comment posted successfully"))
}

pub async fn update_comment_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(comment_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateCommentRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let comment = CommentService::update(&state.db, &user, comment_id, payload.content).await?;
    Ok(ApiResponse::ok(comment, "Comment updated successfully"))
}

pub async fn delete_comment_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(comment_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    CommentService::delete(&state.db, &user, comment_id).await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Comment deleted successfully",
    ))
}
