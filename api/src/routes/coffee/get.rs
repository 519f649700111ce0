use crate::auth::Claims;
use crate::error::ApiError;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::drink::{self, DrinkView, Ingredient, ShortIngredient};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct DrinksResponse<I> {
    pub drinks: Vec<DrinkView<I>>,
}

/// Renders each stored drink with `view`; an undecodable recipe is a server fault.
pub(super) fn render<I>(
    drinks: &[drink::Model],
    view: impl Fn(&drink::Model) -> Result<DrinkView<I>, serde_json::Error>,
) -> Result<Vec<DrinkView<I>>, ApiError> {
    drinks
        .iter()
        .map(|d| {
            view(d).map_err(|e| {
                tracing::error!(drink = d.id, error = %e, "Stored recipe is not valid JSON");
                ApiError::Internal
            })
        })
        .collect()
}

async fn load_all(app_state: &AppState) -> Result<Vec<drink::Model>, ApiError> {
    let drinks = drink::Model::all_ordered(app_state.db())
        .await
        .map_err(ApiError::read_failed)?;
    if drinks.is_empty() {
        return Err(ApiError::NotFound);
    }
    Ok(drinks)
}

/// GET /drinks
///
/// The public menu: each recipe reduced to colours and parts.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "drinks": [ { "id": 1, "title": "Water", "recipe": [ { "color": "blue", "parts": 1 } ] } ]
/// }
/// ```
///
/// - `404 Not Found` (menu is empty)
pub async fn list_drinks(
    State(app_state): State<AppState>,
) -> Result<ApiResponse<DrinksResponse<ShortIngredient>>, ApiError> {
    let drinks = load_all(&app_state).await?;
    Ok(ApiResponse::success(DrinksResponse {
        drinks: render(&drinks, drink::Model::short)?,
    }))
}

/// GET /drinks-detail
///
/// The full menu including ingredient names. Requires `get:drinks-detail`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "drinks": [ { "id": 1, "title": "Water", "recipe": [ { "name": "water", "color": "blue", "parts": 1 } ] } ]
/// }
/// ```
///
/// - `401 Unauthorized`
/// - `404 Not Found` (menu is empty)
pub async fn drink_details(
    State(app_state): State<AppState>,
    claims: Claims,
) -> Result<ApiResponse<DrinksResponse<Ingredient>>, ApiError> {
    tracing::debug!(sub = %claims.sub, "Serving detailed menu");
    let drinks = load_all(&app_state).await?;
    Ok(ApiResponse::success(DrinksResponse {
        drinks: render(&drinks, drink::Model::long)?,
    }))
}
