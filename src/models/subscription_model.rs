use serde::Serialize;
use uuid::Uuid;

#[derive(Serialize)]
pub struct SubscriptionResponse {
    pub id: Uuid,
    pub subscriber: Uuid,
    pub channel: Uuid,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

/// Public profile of a subscriber, as listed under a channel.
#[derive(Serialize)]
pub struct SubscriberResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
}

/// Public profile of a channel a user is subscribed to.
#[derive(Serialize)]
pub struct SubscribedChannelResponse {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub avatar_url: Option<String>,
}
