use chrono::Utc;
use sea_orm::*;
use std::collections::HashMap;
use uuid::Uuid;

use crate::entities::{subscription, subscription::Entity as Subscription, user};
use crate::models::auth_model::CurrentUser;
use crate::models::subscription_model::{
    SubscribedChannelResponse, SubscriberResponse, SubscriptionResponse,
};
use crate::utils::api_error::ApiError;

pub struct SubscriptionService;

impl SubscriptionService {
    /// Returns the created edge on subscribe, `None` on unsubscribe.
    pub async fn toggle(
        db: &DatabaseConnection,
        actor: &CurrentUser,
        channel_public_id: Uuid,
    ) -> Result<Option<SubscriptionResponse>, ApiError> {
        let channel = user::Entity::find()
            .filter(user::Column::PublicId.eq(channel_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Channel not found".to_string()))?;

        let existing = Subscription::find()
            .filter(subscription::Column::SubscriberId.eq(actor.id))
            .filter(subscription::Column::ChannelId.eq(channel.id))
            .one(db)
            .await?;

        if let Some(edge) = existing {
            Subscription::delete_by_id(edge.id).exec(db).await?;
            return Ok(None);
        }

        let model = subscription::ActiveModel {
            id: NotSet,
            public_id: Set(Uuid::now_v7()),
            subscriber_id: Set(actor.id),
            channel_id: Set(channel.id),
            created_at: Set(Utc::now()),
        };

        match model.insert(db).await {
            Ok(saved) => Ok(Some(SubscriptionResponse {
                id: saved.public_id,
                subscriber: actor.public_id,
                channel: channel.public_id,
                created_at: saved.created_at,
            })),
            Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
                // Lost the race to a concurrent subscribe: the edge exists,
                // so this request becomes the unsubscribe.
                Subscription::delete_many()
                    .filter(subscription::Column::SubscriberId.eq(actor.id))
                    .filter(subscription::Column::ChannelId.eq(channel.id))
                    .exec(db)
                    .await?;
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Public profiles of everyone subscribed to the channel.
    pub async fn channel_subscribers(
        db: &DatabaseConnection,
        channel_public_id: Uuid,
    ) -> Result<Vec<SubscriberResponse>, ApiError> {
        let channel = user::Entity::find()
            .filter(user::Column::PublicId.eq(channel_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("Channel not found".to_string()))?;

        let edges = Subscription::find()
            .filter(subscription::Column::ChannelId.eq(channel.id))
            .order_by_desc(subscription::Column::CreatedAt)
            .order_by_asc(subscription::Column::Id)
            .all(db)
            .await?;
        if edges.is_empty() {
            return Ok(Vec::new());
        }

        let subscribers =
            Self::users_by_id(db, edges.iter().map(|e| e.subscriber_id).collect()).await?;

        let mut data = Vec::with_capacity(edges.len());
        for edge in edges {
            let user = subscribers
                .get(&edge.subscriber_id)
                .ok_or_else(|| DbErr::Custom("subscription has no subscriber row".to_string()))?;
            data.push(SubscriberResponse {
                id: user.public_id,
                username: user.username.clone(),
                email: user.email.clone(),
            });
        }
        Ok(data)
    }

    /// Public profiles of every channel the user is subscribed to.
    pub async fn subscribed_channels(
        db: &DatabaseConnection,
        subscriber_public_id: Uuid,
    ) -> Result<Vec<SubscribedChannelResponse>, ApiError> {
        let subscriber = user::Entity::find()
            .filter(user::Column::PublicId.eq(subscriber_public_id))
            .one(db)
            .await?
            .ok_or_else(|| ApiError::NotFound("User not found".to_string()))?;

        let edges = Subscription::find()
            .filter(subscription::Column::SubscriberId.eq(subscriber.id))
            .order_by_desc(subscription::Column::CreatedAt)
            .order_by_asc(subscription::Column::Id)
            .all(db)
            .await?;
        if edges.is_empty() {
            return Ok(Vec::new());
        }

        let channels =
            Self::users_by_id(db, edges.iter().map(|e| e.channel_id).collect()).await?;

        let mut data = Vec::with_capacity(edges.len());
        for edge in edges {
            let user = channels
                .get(&edge.channel_id)
                .ok_or_else(|| DbErr::Custom("subscription has no channel row".to_string()))?;
            data.push(SubscribedChannelResponse {
                id: user.public_id,
                username: user.username.clone(),
                email: user.email.clone(),
                avatar_url: user.avatar_url.clone(),
            });
        }
        Ok(data)
    }

    async fn users_by_id(
        db: &DatabaseConnection,
        ids: Vec<i64>,
    ) -> Result<HashMap<i64, user::Model>, ApiError> {
        Ok(user::Entity::find()
            .filter(user::Column::Id.is_in(ids))
            .all(db)
            .await?
            .into_iter()
            .map(|u| (u.id, u))
            .collect())
    }
}
