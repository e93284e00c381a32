use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::entities::{comment, comment::Entity as Comment, user, video};
use crate::models::auth_model::CurrentUser;
use crate::models::comment_model::{CommentListResponse, CommentOwnerResponse, CommentResponse};
use crate::utils::api_error::ApiError;
use crate::utils::guards::ensure_owner;
use crate::utils::pagination::{PageMeta, PageQuery};

pub struct CommentService;

impl CommentService {
    pub async fn list_for_video(
        db: &DatabaseConnection,
        video_public_id: Uuid,
        paging: PageQuery,
    ) -> Result<CommentListResponse, ApiError> {
        let video = video::Entity::find()
            .filter(video::Column::PublicId.eq(video_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

        let paginator = Comment::find()
            .filter(comment::Column::VideoId.eq(video.id))
            .order_by_desc(comment::Column::CreatedAt)
            .order_by_asc(comment::Column::Id)
            .find_also_related(user::Entity)
            .paginate(db, paging.limit());
        let total = paginator.num_items().await?;
        let rows = paginator.fetch_page(paging.page_index()).await?;

        let mut data = Vec::with_capacity(rows.len());
        for (cm, owner) in rows {
            let owner =
                owner.ok_or_else(|| DbErr::Custom("comment has no owner row".to_string()))?;
            data.push(Self::map_to_response(cm, owner));
        }

        Ok(CommentListResponse {
            data,
            meta: PageMeta {
                total,
                page: paging.page(),
                limit: paging.limit(),
            },
        })
    }

    pub async fn add(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        video_public_id: Uuid,
        content: String,
    ) -> Result<CommentResponse, ApiError> {
        let video = video::Entity::find()
            .filter(video::Column::PublicId.eq(video_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

        let now = Utc::now();
        let model = comment::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            content: Set(content),
            video_id: Set(video.id),
            owner_id: Set(actor.id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(db).await?;

        let owner = Self::owner_of(db, saved.owner_id).await?;
        Ok(Self::map_to_response(saved, owner))
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        comment_public_id: Uuid,
        content: String,
    ) -> Result<CommentResponse, ApiError> {
        let existing = Self::find_by_public_id(db, comment_public_id).await?;
        ensure_owner(existing.owner_id, actor, "comment")?;

        let mut active: comment::ActiveModel = existing.into();
        active.content = Set(content);
        active.updated_at = Set(Utc::now());
        let updated = active.update(db).await?;

        let owner = Self::owner_of(db, updated.owner_id).await?;
        Ok(Self::map_to_response(updated, owner))
    }

    pub async fn delete(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        comment_public_id: Uuid,
    ) -> Result<(), ApiError> {
        let existing = Self::find_by_public_id(db, comment_public_id).await?;
        ensure_owner(existing.owner_id, actor, "comment")?;

        Comment::delete_by_id(existing.id).exec(db).await?;
        Ok(())
    }

    async fn find_by_public_id(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<comment::Model, ApiError> {
        Comment::find()
            .filter(comment::Column::PublicId.eq(public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))
    }

    async fn owner_of(db: &DatabaseConnection, owner_id: i64) -> Result<user::Model, ApiError> {
        user::Entity::find_by_id(owner_id)
            .one(db)
            .await?
            .ok_or_else(|| ApiError::from(DbErr::Custom("comment has no owner row".to_string())))
    }

    fn map_to_response(model: comment::Model, owner: user::Model) -> CommentResponse {
        CommentResponse {
            id: model.public_id,
            content: model.content,
            owner: CommentOwnerResponse {
                id: owner.public_id,
                username: owner.username,
                avatar_url: owner.avatar_url,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
