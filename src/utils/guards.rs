use crate::models::auth_model::CurrentUser;
use crate::utils::api_error::ApiError;

/// Shared ownership check used by every mutating handler: the acting user
/// must be the resource's owner.
pub fn ensure_owner(owner_id: i64, actor: &CurrentUser, resource: &str) -> Result<(), ApiError> {
    if owner_id != actor.id {
        return Err(ApiError::Forbidden(format!(
            "You are not the owner of this {resource}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn actor(id: i64) -> CurrentUser {
        CurrentUser {
            id,
            public_id: Uuid::nil(),
            username: "tester".to_string(),
        }
    }

    #[test]
    fn owner_passes() {
        assert!(ensure_owner(7, &actor(7), "video").is_ok());
    }

    #[test]
    fn non_owner_is_forbidden() {
        let err = ensure_owner(7, &actor(8), "video").unwrap_err();
        assert!(matches!(err, ApiError::Forbidden(_)));
    }
}
