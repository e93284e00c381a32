use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::models::auth_model::CurrentUser;
use crate::models::playlist_model::{CreatePlaylistRequest, UpdatePlaylistRequest};
use crate::services::playlist_service::PlaylistService;
use crate::utils::api_error::ApiError;
use crate::utils::api_response::ApiResponse;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn create_playlist_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreatePlaylistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let playlist = PlaylistService::create(&state.db, &user, payload).await?;
    Ok(ApiResponse::created(playlist, "Playlist created successfully"))
}

pub async fn get_playlist_handler(
    State(state): State<AppState>,
    Path(playlist_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let playlist = PlaylistService::get(&state.db, playlist_id).await?;
    Ok(ApiResponse::ok(playlist, "Playlist retrieved successfully"))
}

pub async fn user_playlists_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let playlists = PlaylistService::list_for_user(&state.db, user_id).await?;
    Ok(ApiResponse::ok(playlists, "Playlists retrieved successfully"))
}

pub async fn update_playlist_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(playlist_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdatePlaylistRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let playlist = PlaylistService::update(&state.db, &user, playlist_id, payload).await?;
    Ok(ApiResponse::ok(playlist, "Playlist updated successfully"))
}

pub async fn delete_playlist_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(playlist_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    PlaylistService::delete(&state.db, &user, playlist_id).await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Playlist deleted successfully",
    ))
}

pub async fn add_playlist_video_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((playlist_id, video_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let playlist = PlaylistService::add_video(&state.db, &user, playlist_id, video_id).await?;
    Ok(ApiResponse::ok(
        playlist,
        "Video added to playlist successfully",
    ))
}

pub async fn remove_playlist_video_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path((playlist_id, video_id)): Path<(Uuid, Uuid)>,
) -> Result<impl IntoResponse, ApiError> {
    let playlist = PlaylistService::remove_video(&state.db, &user, playlist_id, video_id).await?;
    Ok(ApiResponse::ok(
        playlist,
        "Video removed from playlist successfully",
    ))
}
