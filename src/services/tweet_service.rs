use chrono::Utc;
use sea_orm::*;
use uuid::Uuid;

use crate::entities::{tweet, tweet::Entity as Tweet, user};
use crate::models::auth_model::CurrentUser;
use crate::models::tweet_model::{TweetOwnerResponse, TweetResponse};
use crate::utils::api_error::ApiError;
use crate::utils::guards::ensure_owner;

pub struct TweetService;

impl TweetService {
    pub async fn create(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        content: String,
    ) -> Result<TweetResponse, ApiError> {
        let now = Utc::now();
        let model = tweet::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            content: Set(content),
            owner_id: Set(actor.id),
            created_at: Set(now),
            updated_at: Set(now),
        };
        let saved = model.insert(db).await?;

        let owner = Self::owner_of(db, saved.owner_id).await?;
        Ok(Self::map_to_response(saved, owner))
    }

    /// A user's tweets, newest first. An empty list is not an error.
    pub async fn list_for_user(
        db: &DatabaseConnection,
        user_public_id: Uuid,
    ) -> Result<Vec<TweetResponse>, ApiError> {
        let owner = user::Entity::find()
            .filter(user::Column::PublicId.eq(user_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let tweets = Tweet::find()
            .filter(tweet::Column::OwnerId.eq(owner.id))
            .order_by_desc(tweet::Column::CreatedAt)
            .order_by_asc(tweet::Column::Id)
            .all(db)
            .await?;

        Ok(tweets
            .into_iter()
            .map(|t| Self::map_to_response(t, owner.clone()))
            .collect())
    }

    pub async fn update(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        tweet_public_id: Uuid,
        content: String,
    ) -> Result<TweetResponse, ApiError> {
        let existing = Self::find_by_public_id(db, tweet_public_id).await?;
        ensure_owner(existing.owner_id, actor, "tweet")?;

        let mut active: tweet::ActiveModel = existing.into();
        active.content = Set(content);
        active.updated_at = Set(Utc::now());
        let updated = active.update(db).await?;

        let owner = Self::owner_of(db, updated.owner_id).await?;
        Ok(Self::map_to_response(updated, owner))
    }

    pub async fn delete(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        tweet_public_id: Uuid,
    ) -> Result<(), ApiError> {
        let existing = Self::find_by_public_id(db, tweet_public_id).await?;
        ensure_owner(existing.owner_id, actor, "tweet")?;

        Tweet::delete_by_id(existing.id).exec(db).await?;
        Ok(())
    }

    async fn find_by_public_id(
        db: &DatabaseConnection,
        public_id: Uuid,
    ) -> Result<tweet::Model, ApiError> {
        Tweet::find()
            .filter(tweet::Column::PublicId.eq(public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Tweet not found".to_string()))
    }

    async fn owner_of(db: &DatabaseConnection, owner_id: i64) -> Result<user::Model, ApiError> {
        user::Entity::find_by_id(owner_id)
            .one(db)
            .await?
            .ok_or_else(|| ApiError::from(DbErr::Custom("tweet has no owner row".to_string())))
    }

    fn map_to_response(model: tweet::Model, owner: user::Model) -> TweetResponse {
        TweetResponse {
            id: model.public_id,
            content: model.content,
            owner: TweetOwnerResponse {
                id: owner.public_id,
                username: owner.username,
                avatar_url: owner.avatar_url,
            },
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
