use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Extension,
};
use uuid::Uuid;

use crate::config::AppState;
use crate::models::auth_model::CurrentUser;
use crate::models::tweet_model::{CreateTweetRequest, UpdateTweetRequest};
use crate::services::tweet_service::TweetService;
use crate::utils::api_error::ApiError;
use crate::utils::api_response::ApiResponse;
use crate::utils::validated_wrapper::ValidatedJson;

pub async fn create_tweet_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    ValidatedJson(payload): ValidatedJson<CreateTweetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tweet = TweetService::create(&state.db, &user, payload.content).await?;
    Ok(ApiResponse::created(tweet, "Tweet posted successfully"))
}

pub async fn user_tweets_handler(
    State(state): State<AppState>,
    Path(user_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    let tweets = TweetService::list_for_user(&state.db, user_id).await?;
    Ok(ApiResponse::ok(tweets, "Tweets retrieved successfully"))
}

pub async fn update_tweet_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(tweet_id): Path<Uuid>,
    ValidatedJson(payload): ValidatedJson<UpdateTweetRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let tweet = TweetService::update(&state.db, &user, tweet_id, payload.content).await?;
    Ok(ApiResponse::ok(tweet, "Tweet updated successfully"))
}

pub async fn delete_tweet_handler(
    State(state): State<AppState>,
    Extension(user): Extension<CurrentUser>,
    Path(tweet_id): Path<Uuid>,
) -> Result<impl IntoResponse, ApiError> {
    TweetService::delete(&state.db, &user, tweet_id).await?;
    Ok(ApiResponse::ok(
        serde_json::json!({}),
        "Tweet deleted successfully",
    ))
}
