use axum::{
    Json,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Standardized wrapper for every outgoing JSON body.
///
/// The payload's fields are flattened next to `success`, so a payload of
/// `{ "drinks": [...] }` is sent as:
/// ```json
/// {
///   "success": true,
///   "drinks": [ ... ]
/// }
/// ```
///
/// `T` must serialize as a JSON object (a struct or a map).
#[derive(Debug, Serialize)]
pub struct ApiResponse<T>
where
    T: Serialize,
{
    pub success: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T> ApiResponse<T>
where
    T: Serialize,
{
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }

    /// A well-formed answer that reports a negative outcome, still sent with 200.
    pub fn failure(data: T) -> Self {
        Self {
            success: false,
            data,
        }
    }
}

impl<T> IntoResponse for ApiResponse<T>
where
    T: Serialize,
{
    fn into_response(self) -> Response {
        Json(self).into_response()
    }
}
