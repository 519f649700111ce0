use crate::error::ApiError;
use crate::extract::PathId;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::drink;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DrinkDeleted {
    pub delete: i64,
}

/// DELETE /drinks/{id}
///
/// Requires `delete:drinks`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "delete": 1 }
/// ```
///
/// - `400 Bad Request` (no drink with that id)
/// - `401 Unauthorized`
/// - `422 Unprocessable Entity`
pub async fn delete_drink(
    State(app_state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiResponse<DrinkDeleted>, ApiError> {
    let db = app_state.db();

    if drink::Model::find_by_id(db, id)
        .await
        .map_err(ApiError::read_failed)?
        .is_none()
    {
        return Err(ApiError::bad_request());
    }

    drink::Model::delete(db, id)
        .await
        .map_err(ApiError::write_failed)?;

    tracing::info!(id, "Drink deleted");
    Ok(ApiResponse::success(DrinkDeleted { delete: id }))
}
