use crate::response::ApiResponse;
use crate::state::AppState;
use axum::{Router, response::IntoResponse, routing::get};
use serde::Serialize;

/// Builds the `/health` route group: a single `GET /health` liveness probe.
pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

#[derive(Serialize)]
struct HealthStatus {
    status: &'static str,
}

/// GET /health
///
/// ### Response
/// - `200 OK`
///
/// ```json
/// { "success": true, "status": "ok" }
/// ```
async fn health_check() -> impl IntoResponse {
    ApiResponse::success(HealthStatus { status: "ok" })
}
