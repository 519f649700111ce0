use super::get::{DrinksResponse, render};
use crate::auth::Claims;
use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::drink::{self, Ingredient, NewDrink};

/// POST /drinks
///
/// Adds a drink to the menu. Requires `post:drinks`.
///
/// ### Request Body
/// `recipe` is one ingredient or a list of them.
/// ```json
/// {
///   "title": "Flat White",
///   "recipe": [ { "name": "espresso", "color": "brown", "parts": 1 }, { "name": "milk", "color": "grey", "parts": 2 } ]
/// }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "drinks": [ { "id": 5, "title": "Flat White", "recipe": [ ... ] } ] }
/// ```
///
/// - `400 Bad Request` (missing `title`/`recipe`, or malformed recipe)
/// - `401 Unauthorized`
/// - `422 Unprocessable Entity` (e.g. a drink with that title already exists)
pub async fn create_drink(
    State(app_state): State<AppState>,
    claims: Claims,
    body: JsonBody,
) -> Result<ApiResponse<DrinksResponse<Ingredient>>, ApiError> {
    let new_drink: NewDrink = body.require(&["title", "recipe"])?.parse()?;

    let created = drink::Model::create(app_state.db(), new_drink)
        .await
        .map_err(ApiError::write_failed)?;

    tracing::info!(id = created.id, title = %created.title, sub = %claims.sub, "Drink created");

    Ok(ApiResponse::success(DrinksResponse {
        drinks: render(std::slice::from_ref(&created), drink::Model::long)?,
    }))
}
