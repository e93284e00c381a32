use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::utils::pagination::{PageMeta, SortOrder};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VideoListParams {
    pub page: Option<u64>,
    pub limit: Option<u64>,
    /// Free-text search over title and description.
    pub query: Option<String>,
    pub sort_by: Option<String>,
    pub sort_type: Option<SortOrder>,
    /// Restrict to videos owned by this user (public id).
    pub user_id: Option<Uuid>,
}

/// One file field from the multipart request.
pub struct FilePart {
    pub file_name: String,
    pub data: Vec<u8>,
}

/// Fields collected from the multipart publish request. All required;
/// the service validates before touching the vault.
#[derive(Default)]
pub struct PublishVideoForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub video_file: Option<FilePart>,
    pub thumbnail: Option<FilePart>,
}

/// Fields collected from the multipart update request. All optional;
/// only provided fields are applied.
#[derive(Default)]
pub struct UpdateVideoForm {
    pub title: Option<String>,
    pub description: Option<String>,
    pub thumbnail: Option<FilePart>,
}

#[derive(Debug, Serialize)]
pub struct VideoOwnerResponse {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct VideoResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub video_url: String,
    pub thumbnail_url: String,
    pub duration: f64,
    pub views: i64,
    pub is_published: bool,
    pub owner: VideoOwnerResponse,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Debug, Serialize)]
pub struct VideoListResponse {
    pub data: Vec<VideoResponse>,
    pub meta: PageMeta,
}
