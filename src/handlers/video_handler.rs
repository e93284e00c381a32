use axum::{
    extract::{multipart::Field, Multipart, Path, Query, State},
    response::IntoResponse,
    Extension,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::models::auth_model::CurrentUser;
use crate::models::video_model::{FilePart, PublishVideoForm, UpdateVideoForm, VideoListParams};
use crate::services::video_service::VideoService;
use crate::utils::api_error::ApiError;
use crate::utils::api_response::ApiResponse;

pub async fn list_videos_handler(
    State(state): State<AppState>,
    Query(params): Query<VideoListParams>,
) -> Result<impl IntoResponse, ApiError> {
    let res = VideoService::list(&state.db, params).await?;
    Ok(ApiResponse::ok(res, "Videos retrieved successfully"))
}

pub async fn publish_video_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut form = PublishVideoForm::default();
    while let Some(field) = next_field(&mut multipart).await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => form.title = Some(read_text(field).await?),
            "description" => form.description = Some(read_text(field).await?),
            "videoFile" => form.video_file = Some(read_file(field).await?),
            "thumbnail" => form.thumbnail = Some(read_file(field).await?),
            _ => {}
        }
    }

    let video = VideoService::publish(&state, &user, form).await?;
    Ok(ApiResponse::created(video, "Video uploaded successfully"))
}

pub async fn get_video_handler(
    State(state): State<AppState>,
    Path(video_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let video = VideoService::get(&state.db, video_id).await?;
    Ok(ApiResponse::ok(video, "Video retrieved successfully"))
}

pub async fn update_video_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(video_id): Path<Uuid>,
    mut multipart: Multipart,
) -> Result<impl IntoResponse, ApiError> {
    let mut form = UpdateVideoForm::default();
    while let Some(field) = next_field(&mut multipart).await? {
        let name = field.name().unwrap_or("").to_string();
        match name.as_str() {
            "title" => form.title = Some(read_text(field).await?),
            "description" => form.description = Some(read_text(field).await?),
            "thumbnail" => form.thumbnail = Some(read_file(field).await?),
            _ => {}
        }
    }

    let video = VideoService::update(&state, &user, video_id, form).await?;
    Ok(ApiResponse::ok(video, "Video updated successfully"))
}

pub async fn delete_video_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(video_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    VideoService::delete(&state, &user, video_id).await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Video deleted successfully",
    ))
}

pub async fn toggle_publish_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(video_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let video = VideoService::toggle_publish(&state.db, &user, video_id).await?;
    Ok(ApiResponse::ok(video, "Publish status updated successfully"))
}

async fn next_field(multipart: &mut Multipart) -> Result<Option<Field<'_>>, ApiError> {
    multipart
        .next_field()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart payload: {e}")))
}

async fn read_text(field: Field<'_>) -> Result<String, ApiError> {
    field
        .text()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart field: {e}")))
}

async fn read_file(field: Field<'_>) -> Result<FilePart, ApiError> {
    let file_name = field.file_name().unwrap_or("upload").to_string();
    let data = field
        .bytes()
        .await
        .map_err(|e| ApiError::Validation(format!("Invalid multipart field: {e}")))?
        .to_vec();
    Ok(FilePart { file_name, data })
}
