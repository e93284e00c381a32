use axum::{
    body::Body,
    extract::State,
    http::{header, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};
use jsonwebtoken::errors::ErrorKind;
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter};

use crate::config::AppState;
use crate::entities::user;
use crate::models::auth_model::CurrentUser;
use crate::utils::api_error::ApiError;
use crate::utils::jwt_utils::JwtUtils;

/// Validates the bearer token, loads the acting user and injects it into
/// request extensions as `CurrentUser`.
pub async fn auth_middleware(
    State(state): State<AppState>,
    mut req: Request<Body>,
    next: Next,
) -> std::result::Result<Response, StatusCode> {
    // 1. Get Token from Header
    let auth_header = match req.headers().get(header::AUTHORIZATION) {
        Some(header) => header,
        None => {
            return Ok(ApiError::Unauthorized(
                "Authorization header is missing".to_string(),
            )
            .into_response());
        }
    };

    let auth_str = match auth_header.to_str() {
        Ok(s) => s,
        Err(_) => {
            return Ok(ApiError::Unauthorized(
                "Invalid Authorization header format".to_string(),
            )
            .into_response());
        }
    };

    if !auth_str.starts_with("Bearer ") {
        return Ok(ApiError::Unauthorized(
            "Invalid token format. Missing 'Bearer ' prefix".to_string(),
        )
        .into_response());
    }

    let token = &auth_str[7..];

    // 2. Validate JWT
    let token_data = match JwtUtils::validate_jwt(token) {
        Ok(data) => data,
        Err(e) => {
            let message = match e.kind() {
                ErrorKind::ExpiredSignature => "Token has expired",
                ErrorKind::InvalidToken => "Token is invalid",
                ErrorKind::InvalidSignature => "Invalid token signature",
                _ => "Authentication failed",
            };

            return Ok(ApiError::Unauthorized(message.to_string()).into_response());
        }
    };

    let claims = token_data.claims;

    // 3. Load the user row behind the token
    let user = match user::Entity::find()
        .filter(user::Column::PublicId.eq(claims.sub))
        .one(state.db.as_ref())
        .await
    {
        Ok(Some(user)) => user,
        Ok(None) => {
            return Ok(
                ApiError::Unauthorized("User no longer exists".to_string()).into_response()
            );
        }
        Err(e) => return Ok(ApiError::from(e).into_response()),
    };

    let current_user = CurrentUser {
        id: user.id,
        public_id: user.public_id,
        username: user.username,
    };

    // 4. Inject CurrentUser into request
    req.extensions_mut().insert(current_user);

    Ok(next.run(req).await)
}
