use crate::auth::AuthError;
use crate::response::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde::Serialize;
use thiserror::Error;

/// The single error type returned by handlers, guards and extractors.
///
/// Rendered as `{ "success": false, "error": <status>, "message": <text> }`;
/// authorization failures add `"code": <reason>`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("resource not found")]
    NotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error("unprocessable")]
    Unprocessable,

    // Misspelling is part of the public contract.
    #[error("authentification failed")]
    Unauthorized(#[from] AuthError),

    #[error("internal server error")]
    Internal,
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: u16,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<&'static str>,
}

impl ApiError {
    pub fn bad_request() -> Self {
        ApiError::BadRequest("bad request".into())
    }

    pub fn missing_field(field: &str) -> Self {
        ApiError::BadRequest(format!("bad request: missing field '{field}'"))
    }

    pub fn invalid(detail: impl std::fmt::Display) -> Self {
        ApiError::BadRequest(format!("bad request: {detail}"))
    }

    /// A failed insert/update/delete. The cause is logged, never returned.
    pub fn write_failed(err: DbErr) -> Self {
        tracing::warn!(error = %err, "Write rejected by the database");
        ApiError::Unprocessable
    }

    /// A failed read. The cause is logged, never returned.
    pub fn read_failed(err: DbErr) -> Self {
        tracing::error!(error = %err, "Database read failed");
        ApiError::Internal
    }

    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Unprocessable => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = match &self {
            ApiError::Unauthorized(auth) => Some(auth.code()),
            _ => None,
        };
        let body = ApiResponse::failure(ErrorBody {
            error: status.as_u16(),
            message: self.to_string(),
            code,
        });
        (status, body).into_response()
    }
}
