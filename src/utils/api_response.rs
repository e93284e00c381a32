use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

/// Uniform success envelope. `success` is derived from the status code so
/// the two can never disagree.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiResponse<T> {
    pub status_code: u16,
    pub data: T,
    pub message: String,
    pub success: bool,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn new(status: StatusCode, data: T, message: &str) -> Self {
        Self {
            status_code: status.as_u16(),
            data,
            message: message.to_string(),
            success: status.as_u16() < 400,
        }
    }

    pub fn ok(data: T, message: &str) -> Self {
        Self::new(StatusCode::OK, data, message)
    }

    pub fn created(data: T, message: &str) -> Self {
        Self::new(StatusCode::CREATED, data, message)
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.status_code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_uses_contract_field_names() {
        let body = serde_json::to_value(ApiResponse::ok(serde_json::json!({"a": 1}), "done"))
            .unwrap();
        assert_eq!(body["statusCode"], 200);
        assert_eq!(body["message"], "done");
        assert_eq!(body["success"], true);
        assert_eq!(body["data"]["a"], 1);
    }

    #[test]
    fn created_is_still_a_success() {
        let res = ApiResponse::created((), "made");
        assert_eq!(res.status_code, 201);
        assert!(res.success);
    }
}
