use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::utils::pagination::PageMeta;

#[derive(Deserialize, Validate)]
pub struct CreateCommentRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub content: String,
}

#[derive(Deserialize, Validate)]
pub struct UpdateCommentRequest {
    #[serde(default)]
    #[validate(custom(function = "crate::utils::validator_utils::validate_required"))]
    pub content: String,
}

#[derive(Serialize)]
pub struct CommentOwnerResponse {
    pub id: Uuid,
    pub username: String,
    pub avatar_url: Option<String>,
}

#[derive(Serialize)]
pub struct CommentResponse {
    pub id: Uuid,
    pub content: String,
    pub owner: CommentOwnerResponse,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct CommentListResponse {
    pub data: Vec<CommentResponse>,
    pub meta: PageMeta,
}
