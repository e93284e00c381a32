use chrono::Utc;
use sea_orm::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::entities::{comment, like, tweet, user, video};
use crate::models::auth_model::CurrentUser;
use crate::models::like_model::LikeResponse;
use crate::models::video_model::VideoResponse;
use crate::services::video_service::VideoService;
use crate::utils::api_error::ApiError;

/// Which entity a like edge points at.
#[derive(Clone, Copy)]
enum LikeTarget {
    Video(i64),
    Comment(i64),
    Tweet(i64),
}

impl LikeTarget {
    fn column(&self) -> like::Column {
        match self {
            LikeTarget::Video(_) => like::Column::VideoId,
            LikeTarget::Comment(_) => like::Column::CommentId,
            LikeTarget::Tweet(_) => like::Column::TweetId,
        }
    }

    fn id(&self) -> i64 {
        match self {
            LikeTarget::Video(id) | LikeTarget::Comment(id) | LikeTarget::Tweet(id) => *id,
        }
    }
}

pub struct LikeService;

impl LikeService {
    /// Returns the created edge on toggle-on, `None` on toggle-off.
    pub async fn toggle_video_like(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        video_public_id: Uuid,
    ) -> Result<Option<LikeResponse>, ApiError> {
        let video = video::Entity::find()
            .filter(video::Column::PublicId.eq(video_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

        let saved = Self::toggle(db, actor, LikeTarget::Video(video.id)).await?;
        Ok(saved.map(|like| LikeResponse {
            id: like.public_id,
            video: Some(video.public_id),
            comment: None,
            tweet: None,
            liked_by: actor.public_id,
            created_at: like.created_at,
        }))
    }

    pub async fn toggle_comment_like(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        comment_public_id: Uuid,
    ) -> Result<Option<LikeResponse>, ApiError> {
        let target = comment::Entity::find()
            .filter(comment::Column::PublicId.eq(comment_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Comment not found".to_string()))?;

        let saved = Self::toggle(db, actor, LikeTarget::Comment(target.id)).await?;
        Ok(saved.map(|like| LikeResponse {
            id: like.public_id,
            video: None,
            comment: Some(target.public_id),
            tweet: None,
            liked_by: actor.public_id,
            created_at: like.created_at,
        }))
    }

    pub async fn toggle_tweet_like(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        tweet_public_id: Uuid,
    ) -> Result<Option<LikeResponse>, ApiError> {
        let target = tweet::Entity::find()
            .filter(tweet::Column::PublicId.eq(tweet_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Tweet not found".to_string()))?;

        let saved = Self::toggle(db, actor, LikeTarget::Tweet(target.id)).await?;
        Ok(saved.map(|like| LikeResponse {
            id: like.public_id,
            video: None,
            comment: None,
            tweet: Some(target.public_id),
            liked_by: actor.public_id,
            created_at: like.created_at,
        }))
    }

    /// All videos the actor has liked, newest like first.
    pub async fn liked_videos(
        db: &DatabaseConnection,
        actor: &CurrentUser,
    ) -> Result<Vec<VideoResponse>, ApiError> {
        let rows = like::Entity::find()
            .filter(like::Column::LikedBy.eq(actor.id))
            .filter(like::Column::VideoId.is_not_null())
            .order_by_desc(like::Column::CreatedAt)
            .order_by_asc(like::Column::Id)
            .find_also_related(video::Entity)
            .all(db)
            .await?;

        let videos: Vec<video::Model> = rows.into_iter().filter_map(|(_, v)| v).collect();
        if videos.is_empty() {
            return Ok(Vec::new());
        }

        let owner_ids: Vec<i64> = videos.iter().map(|v| v.owner_id).collect();
        let owners: HashMap<i64, user::Model> = user::Entity::find()
            .filter(user::Column::Id.is_in(owner_ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect();

        let mut data = Vec::with_capacity(videos.len());
        for video in videos {
            let owner = owners
                .get(&video.owner_id)
                .cloned()
                .ok_or_else(|| DbErr::Custom("video has no owner row".to_string()))?;
            data.push(VideoService::map_to_response(video, owner));
        }
        Ok(data)
    }

    /// Toggle the (actor, target) edge. The unique partial indexes make the
    /// duplicate insert fail under a concurrent toggle, which is folded into
    /// the toggle-off branch.
    async fn toggle(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        target: LikeTarget,
    ) -> Result<Option<like::Model>, ApiError> {
        let existing = like::Entity::find()
            .filter(like::Column::LikedBy.eq(actor.id))
            .filter(target.column().eq(target.id()))
            .one(db)
            .await?;

        if let Some(edge) = existing {
            like::Entity::delete_by_id(edge.id).exec(db).await?;
            return Ok(None);
        }

        let model = like::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            video_id: Set(match target {
                LikeTarget::Video(id) => Some(id),
                _ => None,
            }),
            comment_id: Set(match target {
                LikeTarget::Comment(id) => Some(id),
                _ => None,
            }),
            tweet_id: Set(match target {
                LikeTarget::Tweet(id) => Some(id),
                _ => None,
            }),
            liked_by: Set(actor.id),
            created_at: Set(Utc::now()),
        };

        match model.insert(db).await {
            Ok(saved) => Ok(Some(saved)),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                // Lost the race to a concurrent toggle-on: the edge exists,
                // so this request becomes the toggle-off.
                like::Entity::delete_many()
                    .filter(like::Column::LikedBy.eq(actor.id))
                    .filter(target.column().eq(target.id()))
                    .exec(db)
                    .await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}
