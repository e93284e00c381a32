use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
    Extension,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::models::auth_model::CurrentUser;
use crate::services::subscription_service::SubscriptionService;
use crate::utils::api_error::ApiError;
use crate::utils::api_response::ApiResponse;

pub async fn toggle_subscription_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(channel_id): Path<Uuid>,
) -> Result<Response, ApiError> {
    match SubscriptionService::toggle(&state.db, &user, channel_id).await? {
        Some(subscription) => Ok(ApiResponse::created(
            serde_json::json!(subscription),
            "Subscribed to the channel successfully",
        )
        .into_response()),
        None => Ok(ApiResponse::ok(
            serde_json::json!({}),
            "Unsubscribed from the channel successfully",
        )
        .into_response()),
    }
}

pub async fn channel_subscribers_handler(
    State(state): State<AppState>,
    Path(channel_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let subscribers = SubscriptionService::channel_subscribers(&state.db, channel_id).await?;
    Ok(ApiResponse::ok(
        subscribers,
        "Subscribers retrieved successfully",
    ))
}

pub async fn subscribed_channels_handler(
    State(state): State<AppState>,
    Path(subscriber_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let channels = SubscriptionService::subscribed_channels(&state.db, subscriber_id).await?;
    Ok(ApiResponse::ok(
        channels,
        "Subscribed channels retrieved successfully",
    ))
}
