use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::entities::{playlist, playlist::Entity as Playlist, playlist_video, user, video};
use crate::models::auth_model::CurrentUser;
use crate::models::playlist_model::{
    CreatePlaylistRequest, PlaylistOwnerResponse, PlaylistResponse, UpdatePlaylistRequest,
};
use crate::utils::api_error::ApiError;
use crate::utils::guards::ensure_owner;

pub struct PlaylistService;

impl PlaylistService {
    pub async fn create(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        payload: CreatePlaylistRequest,
    ) -> Result<PlaylistResponse, ApiError> {
        let now = Utc::now();
        let model = playlist::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            name: Set(payload.name),
            description: Set(payload.description),
            owner_id: Set(actor.id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(db).await?;

        Self::get(db, saved.public_id).await
    }

    pub async fn get(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<PlaylistResponse, ApiError> {
        let (list, owner) = Playlist::find()
            .filter(playlist::Column::PublicId.eq(public_id))
            .find_also_related(user::Entity)
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))?;

        let owner =
            owner.ok_or_else(|| DbErr::Custom("playlist has no owner row".to_string()))?;
        let videos = Self::member_video_ids(db, list.id).await?;
        Ok(Self::map_to_response(list, owner, videos))
    }

    /// A user's playlists, newest first. An empty list is not an error.
    pub async fn list_for_user(
        db: &DatabaseConnection,
        user_public_id: Uuid,
    ) -> Result<Vec<PlaylistResponse>, ApiError> {
        let owner = user::Entity::find()
            .filter(user::Column::PublicId.eq(user_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let lists = Playlist::find()
            .filter(playlist::Column::OwnerId.eq(owner.id))
            .order_by_desc(playlist::Column::CreatedAt)
            .order_by_asc(playlist::Column::Id)
            .all(db)
            .await?;

        let mut data = Vec::with_capacity(lists.len());
        for list in lists {
            let videos = Self::member_video_ids(db, list.id).await?;
            data.push(Self::map_to_response(list, owner.clone(), videos));
        }
        Ok(data)
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        public_id: Uuid,
        payload: UpdatePlaylistRequest,
    ) -> Result<PlaylistResponse, ApiError> {
        let existing = Self::find_by_public_id(db, public_id).await?;
        ensure_owner(existing.owner_id, actor, "playlist")?;

        let mut active: playlist::ActiveModel = existing.into();
        if let Some(name) = payload.name {
            active.name = Set(name);
        }
        if let Some(description) = payload.description {
            active.description = Set(description);
        }
        active.updated_at = Set(Utc::now());
        let updated = active.update(db).await?;

        Self::get(db, updated.public_id).await
    }

    pub async fn delete(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        public_id: Uuid,
    ) -> Result<(), ApiError> {
        let existing = Self::find_by_public_id(db, public_id).await?;
        ensure_owner(existing.owner_id, actor, "playlist")?;

        // Membership rows go with the playlist via ON DELETE CASCADE
        Playlist::delete_by_id(existing.id).exec(db).await?;
        Ok(())
    }

    pub async fn add_video(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        playlist_public_id: Uuid,
        video_public_id: Uuid,
    ) -> Result<PlaylistResponse, ApiError> {
        let list = Self::find_by_public_id(db, playlist_public_id).await?;
        ensure_owner(list.owner_id, actor, "playlist")?;

        let video = video::Entity::find()
            .filter(video::Column::PublicId.eq(video_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

        let already_member = playlist_video::Entity::find_by_id((list.id, video.id))
            .one(db)
            .await?
            .is_some();
        if already_member {
            return Err(ApiError::Conflict(
                "Video already exists in the playlist".to_string(),
            ));
        }

        let last = playlist_video::Entity::find()
            .filter(playlist_video::Column::PlaylistId.eq(list.id))
            .order_by_desc(playlist_video::Column::Position)
            .one(db)
            .await?;
        let position = last.map(|m| m.position + 1).unwrap_or(0);

        let membership = playlist_video::ActiveModel {
            playlist_id: Set(list.id),
            video_id: Set(video.id),
            position: Set(position),
        };
        match membership.insert(db).await {
            Ok(_) => {}
            // Concurrent add of the same video: the composite key has it
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                return Err(ApiError::Conflict(
                    "Video already exists in the playlist".to_string(),
                ));
            }
            Err(e) => return Err(e.into()),
        }

        Self::get(db, list.public_id).await
    }

    pub async fn remove_video(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        playlist_public_id: Uuid,
        video_public_id: Uuid,
    ) -> Result<PlaylistResponse, ApiError> {
        let list = Self::find_by_public_id(db, playlist_public_id).await?;
        ensure_owner(list.owner_id, actor, "playlist")?;

        let video = video::Entity::find()
            .filter(video::Column::PublicId.eq(video_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Video not found".to_string()))?;

        let removed = playlist_video::Entity::delete_many()
            .filter(playlist_video::Column::PlaylistId.eq(list.id))
            .filter(playlist_video::Column::VideoId.eq(video.id))
            .exec(db)
            .await?;
        if removed.rows_affected == 0 {
            return Err(ApiError::NotFound(
                "Video not found in the playlist".to_string(),
            ));
        }

        Self::get(db, list.public_id).await
    }

    async fn member_video_ids(
        db: &DatabaseConnection,
        playlist_id: i64,
    ) -> Result<Vec<Uuid>, ApiError> {
        let rows = playlist_video::Entity::find()
            .filter(playlist_video::Column::PlaylistId.eq(playlist_id))
            .order_by_asc(playlist_video::Column::Position)
            .find_also_related(video::Entity)
            .all(db)
            .await?;

        rows.into_iter()
            .map(|(_, v)| {
                v.map(|video| video.public_id)
                    .ok_or_else(|| DbErr::Custom("membership has no video row".to_string()).into())
            })
            .collect()
    }

    async fn find_by_public_id(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<playlist::Model, ApiError> {
        Playlist::find()
            .filter(playlist::Column::PublicId.eq(public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Playlist not found".to_string()))
    }

    fn map_to_response(
        model: playlist::Model,
        owner: user::Model,
        videos: Vec<Uuid>,
    ) -> PlaylistResponse {
        PlaylistResponse {
            id: model.public_id,
            name: model.name,
            description: model.description,
            owner: PlaylistOwnerResponse {
                id: owner.public_id,
                username: owner.username,
                avatar_url: owner.avatar_url,
            },
            videos,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
