use serde::Serialize;
use uuid::Uuid;

/// The created edge, echoed back on toggle-on. Exactly one target field is
/// set, mirroring the row itself.
#[derive(Debug, Serialize)]
pub struct LikeResponse {
    pub id: Uuid,
    pub video: Option<Uuid>,
    pub comment: Option<Uuid>,
    pub tweet: Option<Uuid>,
    pub liked_by: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}
