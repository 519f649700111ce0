use crate::auth::{AuthError, Claims};
use crate::error::ApiError;
use axum::{extract::FromRequestParts, http::request::Parts};

/// Hands the verified claims to a handler behind [`require_permission`].
///
/// Used on a route without the guard, extraction fails with 401.
///
/// [`require_permission`]: crate::auth::guards::require_permission
impl<S> FromRequestParts<S> for Claims
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<Claims>()
            .cloned()
            .ok_or(ApiError::Unauthorized(AuthError::HeaderMissing))
    }
}
