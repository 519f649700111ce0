use super::RESULTS_PER_PAGE;
use crate::error::ApiError;
use crate::extract::Page;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::{actor, movie};
use serde::Serialize;
use util::pagination::paginate;

#[derive(Debug, Serialize)]
pub struct ActorsResponse {
    pub actors: Vec<actor::Model>,
    pub total_actors: usize,
}

#[derive(Debug, Serialize)]
pub struct MoviesResponse {
    pub movies: Vec<movie::Model>,
    pub total_movies: usize,
}

/// GET /actors?page=N
///
/// Requires `get:actors`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "actors": [ { "id": 1, "name": "Ada Brooks", "age": 34, "gender": "female" } ],
///   "total_actors": 12
/// }
/// ```
///
/// - `400 Bad Request` (invalid `page`)
/// - `401 Unauthorized`
/// - `404 Not Found` (no actors at all)
pub async fn list_actors(
    State(app_state): State<AppState>,
    Page(page): Page,
) -> Result<ApiResponse<ActorsResponse>, ApiError> {
    let actors = actor::Model::all_ordered(app_state.db())
        .await
        .map_err(ApiError::read_failed)?;

    if actors.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(ApiResponse::success(ActorsResponse {
        actors: paginate(&actors, page, RESULTS_PER_PAGE).to_vec(),
        total_actors: actors.len(),
    }))
}

/// GET /movies?page=N
///
/// Requires `get:movies`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "movies": [ { "id": 1, "title": "Night Train", "release_date": "2027-03-14" } ],
///   "total_movies": 5
/// }
/// ```
///
/// - `400 Bad Request` (invalid `page`)
/// - `401 Unauthorized`
/// - `404 Not Found` (no movies at all)
pub async fn list_movies(
    State(app_state): State<AppState>,
    Page(page): Page,
) -> Result<ApiResponse<MoviesResponse>, ApiError> {
    let movies = movie::Model::all_ordered(app_state.db())
        .await
        .map_err(ApiError::read_failed)?;

    if movies.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(ApiResponse::success(MoviesResponse {
        movies: paginate(&movies, page, RESULTS_PER_PAGE).to_vec(),
        total_movies: movies.len(),
    }))
}
