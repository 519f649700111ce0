use thiserror::Error;

/// Why a request failed the permission gate. Always answered with 401.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    #[error("Authorization header is expected.")]
    HeaderMissing,

    #[error("{0}")]
    InvalidHeader(&'static str),

    #[error("Token expired.")]
    TokenExpired,

    #[error("Token signature does not match any published key.")]
    InvalidSignature,

    #[error("Incorrect claims. Please, check the audience and issuer.")]
    InvalidClaims,

    #[error("Permissions not included in JWT.")]
    PermissionsMissing,

    #[error("Permission not found.")]
    Unauthorized,

    #[error("Unable to fetch signing keys: {0}")]
    KeySetUnavailable(String),
}

impl AuthError {
    /// Machine-readable reason sent to clients as `code`.
    pub fn code(&self) -> &'static str {
        match self {
            AuthError::HeaderMissing => "authorization_header_missing",
            AuthError::InvalidHeader(_) => "invalid_header",
            AuthError::TokenExpired => "token_expired",
            AuthError::InvalidSignature => "invalid_signature",
            AuthError::InvalidClaims => "invalid_claims",
            AuthError::PermissionsMissing => "permissions_missing",
            AuthError::Unauthorized => "unauthorized",
            AuthError::KeySetUnavailable(_) => "key_set_unavailable",
        }
    }
}
