use axum::{
    extract::{FromRequest, Request},
    Json,
};
use validator::{Validate, ValidationErrors};

use crate::utils::api_error::{ApiError, ValidationErrorDetail};

pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: serde::de::DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        // 1. JSON Extraction
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|err| {
                ApiError::Validation(format!("Invalid JSON payload: {}", err.body_text()))
            })?;

        // 2. Logic Validation
        if let Err(e) = payload.validate() {
            return Err(ApiError::FieldValidation(map_validation_errors(e)));
        }

        Ok(ValidatedJson(payload))
    }
}

// Convert validator errors to our custom struct list
fn map_validation_errors(errors: ValidationErrors) -> Vec<ValidationErrorDetail> {
    let mut details = Vec::new();

    for (field, error_kind) in errors.field_errors() {
        for err in error_kind {
            details.push(ValidationErrorDetail {
                field: field.to_string(),
                title: err.code.to_string(),
                message: err
                    .message
                    .clone()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| "Invalid value".to_string()),
            });
        }
    }

    details
}
