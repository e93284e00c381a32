use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::config::AppState;
use crate::entities::{user, video, video::Entity as Video};
use crate::models::auth_model::CurrentUser;
use crate::models::video_model::{
    PublishVideoForm, UpdateVideoForm, VideoListParams, VideoListResponse, VideoOwnerResponse,
    VideoResponse,
};
use crate::utils::api_error::ApiError;
use crate::utils::guards::ensure_owner;
use crate::utils::pagination::{PageMeta, PageQuery};

pub struct VideoService;

impl VideoService {
    pub async fn publish(
        state: &AppState,
        actor: &CurrentUser,
        form: PublishVideoForm,
    ) -> Result<VideoResponse, ApiError> {
        let title = form.title.unwrap_or_default();
        let description = form.description.unwrap_or_default();
        if title.trim().is_empty() || description.trim().is_empty() {
            return Err(ApiError::Validation(
                "Title and description are required".to_string(),
            ));
        }
        let video_file = form
            .video_file
            .ok_or_else(|| ApiError::Validation("Video file is required".to_string()))?;
        let thumbnail = form
            .thumbnail
            .ok_or_else(|| ApiError::Validation("Thumbnail file is required".to_string()))?;

        let uploaded_video = state
            .storage
            .upload(video_file.data, &video_file.file_name)
            .await?;
        let uploaded_thumb = state
            .storage
            .upload(thumbnail.data, &thumbnail.file_name)
            .await?;

        let now = Utc::now();
        let model = video::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            title: Set(title),
            description: Set(description),
            video_url: Set(uploaded_video.url),
            video_file_id: Set(uploaded_video.file_id),
            thumbnail_url: Set(uploaded_thumb.url),
            thumbnail_file_id: Set(uploaded_thumb.file_id),
            duration: Set(uploaded_video.duration.unwrap_or(0.0)),
            views: Set(0),
            is_published: Set(true),
            owner_id: Set(actor.id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(state.db.as_ref()).await?;

        let owner = Self::owner_of(&state.db, saved.owner_id).await?;
        Ok(Self::map_to_response(saved, owner))
    }

    pub async fn list(
        db: &DatabaseConnection,
        params: VideoListParams,
    ) -> Result<VideoListResponse, ApiError> {
        let paging = PageQuery {
            page: params.page,
            limit: params.limit,
        };
        let sort_column = Self::sort_column(params.sort_by.as_deref())?;
        let order = params.sort_type.unwrap_or_default().into_order();

        let mut query = Video::find();

        if let Some(search) = params.query.as_deref().filter(|q| !q.trim().is_empty()) {
            query = query.filter(
                Condition::any()
                    .add(video::Column::Title.contains(search))
                    .add(video::Column::Description.contains(search)),
            );
        }

        if let Some(owner_public_id) = params.user_id {
            let owner = user::Entity::find()
                .filter(user::Column::PublicId.eq(owner_public_id))
                .one(db)
                .await?;
            let Some(owner) = owner else {
                return Ok(VideoListResponse {
                    data: Vec::new(),
                    meta: PageMeta {
                        total: 0,
                        page: paging.page(),
                        limit: paging.limit(),
                    },
                });
            };
            query = query.filter(video::Column::OwnerId.eq(owner.id));
        }

        // Secondary key keeps pages stable when sort keys collide
        let paginator = query
            .order_by(sort_column, order)
            .order_by_asc(video::Column::Id)
            .find_also_related(user::Entity)
            .paginate(db, paging.limit());
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(paging.page_index()).await?;

        let mut data = Vec::with_capacity(rows.len());
        for (vid, owner) in rows {
            let owner =
                owner.ok_or_else(|| DbErr::Custom("video has no owner row".to_string()))?;
            data.push(Self::map_to_response(vid, owner));
        }

        Ok(VideoListResponse {
            data,
            meta: PageMeta {
                total,
                page: paging.page(),
                limit: paging.limit(),
            },
        })
    }

    pub async fn get(db: &DatabaseConnection, public_id: Uuid) -> Result<VideoResponse, ApiError> {
        let (vid, owner) = Video::find()
            .filter(video::Column::PublicId.eq(public_id))
            .find_also_related(user::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

        let owner = owner.ok_or_else(|| DbErr::Custom("video has no owner row".to_string()))?;
        Ok(Self::map_to_response(vid, owner))
    }

    pub async fn update(
        state: &AppState,
        actor: &CurrentUser,
        public_id: Uuid,
        form: UpdateVideoForm,
    ) -> Result<VideoResponse, ApiError> {
        let existing = Self::find_by_public_id(&state.db, public_id).await?;
        ensure_owner(existing.owner_id, actor, "video")?;

        if form.title.as_deref().is_some_and(|t| t.trim().is_empty())
            || form
                .description
                .as_deref()
                .is_some_and(|d| d.trim().is_empty())
        {
            return Err(ApiError::Validation(
                "Title and description cannot be empty".to_string(),
            ));
        }

        let old_thumbnail_file_id = existing.thumbnail_file_id.clone();
        let mut active: video::ActiveModel = existing.into();

        if let Some(title) = form.title {
            active.title = Set(title);
        }
        if let Some(description) = form.description {
            active.description = Set(description);
        }

        let mut replaced_thumbnail = false;
        if let Some(thumbnail) = form.thumbnail {
            let uploaded = state
                .storage
                .upload(thumbnail.data, &thumbnail.file_name)
                .await?;
            active.thumbnail_url = Set(uploaded.url);
            active.thumbnail_file_id = Set(uploaded.file_id);
            replaced_thumbnail = true;
        }

        active.updated_at = Set(Utc::now());
        let updated = active.update(state.db.as_ref()).await?;

        // The stale asset is unreachable now; losing it only leaks vault space
        if replaced_thumbnail {
            if let Err(e) = state.storage.delete(&old_thumbnail_file_id).await {
                tracing::warn!("failed to delete replaced thumbnail: {e}");
            }
        }

        let owner = Self::owner_of(&state.db, updated.owner_id).await?;
        Ok(Self::map_to_response(updated, owner))
    }

    pub async fn delete(
        state: &AppState,
        actor: &CurrentUser,
        public_id: Uuid,
    ) -> Result<(), ApiError> {
        let existing = Self::find_by_public_id(&state.db, public_id).await?;
        ensure_owner(existing.owner_id, actor, "video")?;

        // Comments, likes and playlist memberships go with the row via the
        // schema's ON DELETE CASCADE foreign keys.
        Video::delete_by_id(existing.id).exec(state.db.as_ref()).await?;

        for file_id in [&existing.video_file_id, &existing.thumbnail_file_id] {
            if let Err(e) = state.storage.delete(file_id).await {
                tracing::warn!("failed to delete vault asset {file_id}: {e}");
            }
        }

        Ok(())
    }

    pub async fn toggle_publish(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        public_id: Uuid,
    ) -> Result<VideoResponse, ApiError> {
        let existing = Self::find_by_public_id(db, public_id).await?;
        ensure_owner(existing.owner_id, actor, "video")?;

        let flipped = !existing.is_published;
        let mut active: video::ActiveModel = existing.into();
        active.is_published = Set(flipped);
        active.updated_at = Set(Utc::now());
        let updated = active.update(db).await?;

        let owner = Self::owner_of(db, updated.owner_id).await?;
        Ok(Self::map_to_response(updated, owner))
    }

    pub(crate) async fn find_by_public_id(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<video::Model, ApiError> {
        Video::find()
            .filter(video::Column::PublicId.eq(public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))
    }

    async fn owner_of(db: &DatabaseConnection, owner_id: i64) -> Result<user::Model, ApiError> {
        user::Entity::find_by_id(owner_id)
            .one(db)
            .await?
            .ok_or_else(|| ApiError::from(DbErr::Custom("video has no owner row".to_string())))
    }

    fn sort_column(name: Option<&str>) -> Result<video::Column, ApiError> {
        match name.unwrap_or("createdAt") {
            "title" => Ok(video::Column::Title),
            "duration" => Ok(video::Column::Duration),
            "views" => Ok(video::Column::Views),
            "createdAt" => Ok(video::Column::CreatedAt),
            "updatedAt" => Ok(video::Column::UpdatedAt),
            other => Err(ApiError::Validation(format!("Unknown sort field: {other}"))),
        }
    }

    pub(crate) fn map_to_response(model: video::Model, owner: user::Model) -> VideoResponse {
        VideoResponse {
            id: model.public_id,
            title: model.title,
            description: model.description,
            video_url: model.video_url,
            thumbnail_url: model.thumbnail_url,
            duration: model.duration,
            views: model.views,
            is_published: model.is_published,
            owner: VideoOwnerResponse {
                id: owner.public_id,
                username: owner.username,
                avatar_url: owner.avatar_url,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sort_defaults_to_created_at() {
        assert!(matches!(
            VideoService::sort_column(None),
            Ok(video::Column::CreatedAt)
        ));
    }

    #[test]
    fn unknown_sort_field_is_rejected() {
        let err = VideoService::sort_column(Some("owner_id; DROP TABLE videos")).unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }
}
