use super::{AuthError, Claims, TokenVerifier};
use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    body::Body,
    extract::State,
    http::{HeaderMap, Request, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Pulls the token out of `Authorization: Bearer <token>`.
pub fn bearer_token(headers: &HeaderMap) -> Result<&str, AuthError> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or(AuthError::HeaderMissing)?
        .to_str()
        .map_err(|_| AuthError::InvalidHeader("Authorization malformed."))?;

    let mut parts = value.split_whitespace();
    match (parts.next(), parts.next(), parts.next()) {
        (Some(scheme), _, _) if !scheme.eq_ignore_ascii_case("bearer") => Err(
            AuthError::InvalidHeader("Authorization header must start with \"Bearer\"."),
        ),
        (Some(_), Some(token), None) => Ok(token),
        (Some(_), None, _) => Err(AuthError::InvalidHeader("Token not found.")),
        _ => Err(AuthError::InvalidHeader(
            "Authorization header must be bearer token.",
        )),
    }
}

pub fn check_permission(claims: &Claims, permission: &str) -> Result<(), AuthError> {
    if claims.permissions.is_none() {
        return Err(AuthError::PermissionsMissing);
    }
    if !claims.has_permission(permission) {
        return Err(AuthError::Unauthorized);
    }
    Ok(())
}

/// Header extraction, token verification and permission check in one step.
pub async fn authorize(
    headers: &HeaderMap,
    verifier: &TokenVerifier,
    permission: &str,
) -> Result<Claims, AuthError> {
    let token = bearer_token(headers)?;
    let claims = verifier.verify(token).await?;
    check_permission(&claims, permission)?;
    Ok(claims)
}

/// Middleware state naming the permission a route requires.
#[derive(Clone)]
pub struct PermissionGuard {
    verifier: Arc<TokenVerifier>,
    permission: &'static str,
}

impl PermissionGuard {
    pub fn new(state: &AppState, permission: &'static str) -> Self {
        Self {
            verifier: state.verifier(),
            permission,
        }
    }
}

/// Rejects the request with 401 unless it carries a token granting the
/// guard's permission. On success the verified [`Claims`] are stored in the
/// request extensions for the handler.
///
/// ```ignore
/// .route(
///     "/drinks",
///     post(create_drink).route_layer(from_fn_with_state(
///         PermissionGuard::new(&state, "post:drinks"),
///         require_permission,
///     )),
/// )
/// ```
pub async fn require_permission(
    State(guard): State<PermissionGuard>,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    match authorize(req.headers(), &guard.verifier, guard.permission).await {
        Ok(claims) => {
            tracing::debug!(sub = %claims.sub, permission = guard.permission, "Access granted");
            req.extensions_mut().insert(claims.clone());
            let mut response = next.run(req).await;
            // Lets the outer request logger report who made the call.
            response.extensions_mut().insert(claims);
            Ok(response)
        }
        Err(e) => {
            tracing::warn!(
                code = e.code(),
                reason = %e,
                permission = guard.permission,
                path = %req.uri().path(),
                "Access denied"
            );
            Err(ApiError::Unauthorized(e))
        }
    }
}
