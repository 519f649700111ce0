use super::get::{DrinksResponse, render};
use crate::error::ApiError;
use crate::extract::{JsonBody, PathId};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::drink::{self, DrinkChanges, Ingredient};

/// PATCH /drinks/{id}
///
/// Changes any of `title`, `recipe` and `image`. Requires `patch:drinks`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "drinks": [ { "id": 1, "title": "Sparkling Water", "recipe": [ ... ] } ] }
/// ```
///
/// - `400 Bad Request` (unknown id, empty patch or malformed field)
/// - `401 Unauthorized`
/// - `422 Unprocessable Entity` (update rejected, e.g. duplicate title)
pub async fn update_drink(
    State(app_state): State<AppState>,
    PathId(id): PathId,
    body: JsonBody,
) -> Result<ApiResponse<DrinksResponse<Ingredient>>, ApiError> {
    let changes: DrinkChanges = body.parse()?;
    if changes.is_empty() {
        return Err(ApiError::invalid("nothing to update"));
    }

    let updated = drink::Model::update(app_state.db(), id, changes)
        .await
        .map_err(ApiError::write_failed)?
        .ok_or_else(ApiError::bad_request)?;

    Ok(ApiResponse::success(DrinksResponse {
        drinks: render(std::slice::from_ref(&updated), drink::Model::long)?,
    }))
}
