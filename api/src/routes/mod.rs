//! HTTP route entry point.
//!
//! Route groups:
//! - `/health` → liveness probe (public)
//! - trivia → `/categories`, `/questions`, `/search`, `/addQuestions`, `/quizzes` (public)
//! - coffee shop → `/drinks`, `/drinks-detail` (menu public, the rest behind permissions)
//! - casting agency → `/actors`, `/movies` (every route behind a permission)
//! - booking site → `/venues`, `/artists`, `/shows` (public)
//!
//! Anything unmatched is answered with a JSON 404, a known path with the wrong
//! method with a JSON 405, and a panicking handler with a JSON 500.

use crate::error::ApiError;
use crate::state::AppState;
use axum::{
    Router,
    body::Body,
    http::{
        Request, StatusCode,
        header::{ALLOW, CONTENT_TYPE},
    },
    middleware::{Next, from_fn},
    response::{IntoResponse, Response},
};
use std::any::Any;
use tower_http::catch_panic::CatchPanicLayer;

pub mod booking;
pub mod casting;
pub mod coffee;
pub mod health;
pub mod trivia;

use booking::booking_routes;
use casting::casting_routes;
use coffee::coffee_routes;
use health::health_routes;
use trivia::trivia_routes;

/// Builds the complete application router, state already applied.
///
/// Request logging and CORS are added by the binary so tests can drive this
/// router directly with `oneshot`.
pub fn routes(app_state: AppState) -> Router {
    Router::new()
        .nest("/health", health_routes())
        .merge(trivia_routes())
        .merge(coffee_routes(&app_state))
        .merge(casting_routes(&app_state))
        .merge(booking_routes())
        .fallback(not_found)
        .with_state(app_state)
        .layer(from_fn(method_not_allowed_as_json))
        .layer(CatchPanicLayer::custom(panic_as_json))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}

/// axum answers a method mismatch with an empty 405; give it the JSON body.
async fn method_not_allowed_as_json(req: Request<Body>, next: Next) -> Response {
    let response = next.run(req).await;
    if response.status() != StatusCode::METHOD_NOT_ALLOWED
        || response.headers().contains_key(CONTENT_TYPE)
    {
        return response;
    }

    let (parts, _) = response.into_parts();
    let mut json = ApiError::MethodNotAllowed.into_response();
    if let Some(allow) = parts.headers.get(ALLOW) {
        json.headers_mut().insert(ALLOW, allow.clone());
    }
    json
}

fn panic_as_json(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = err
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| err.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");
    tracing::error!(panic = detail, "Handler panicked");
    ApiError::Internal.into_response()
}
