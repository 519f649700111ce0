use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::{
    actor::{self, NewActor},
    movie::{self, NewMovie},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActorCreated {
    pub new_actor: i64,
    pub actors: u64,
}

#[derive(Debug, Serialize)]
pub struct MovieCreated {
    pub new_movie: i64,
    pub movies: u64,
}

/// POST /actors
///
/// Requires `create:actors`.
///
/// ### Request Body
/// ```json
/// { "name": "Ada Brooks", "age": 34, "gender": "female" }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "new_actor": 13, "actors": 13 }
/// ```
///
/// - `400 Bad Request` (missing or mistyped field)
/// - `401 Unauthorized`
/// - `422 Unprocessable Entity`
pub async fn create_actor(
    State(app_state): State<AppState>,
    body: JsonBody,
) -> Result<ApiResponse<ActorCreated>, ApiError> {
    let new_actor: NewActor = body.require(&["name", "age", "gender"])?.parse()?;
    let db = app_state.db();

    let created = actor::Model::create(db, new_actor)
        .await
        .map_err(ApiError::write_failed)?;
    let total = actor::Model::count(db)
        .await
        .map_err(ApiError::read_failed)?;

    tracing::info!(id = created.id, name = %created.name, "Actor created");

    Ok(ApiResponse::success(ActorCreated {
        new_actor: created.id,
        actors: total,
    }))
}

/// POST /movies
///
/// Requires `create:movies`.
///
/// ### Request Body
/// ```json
/// { "title": "Night Train", "release_date": "2027-03-14" }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "new_movie": 6, "movies": 6 }
/// ```
///
/// - `400 Bad Request` (missing field or date not `YYYY-MM-DD`)
/// - `401 Unauthorized`
/// - `422 Unprocessable Entity`
pub async fn create_movie(
    State(app_state): State<AppState>,
    body: JsonBody,
) -> Result<ApiResponse<MovieCreated>, ApiError> {
    let new_movie: NewMovie = body.require(&["title", "release_date"])?.parse()?;
    let db = app_state.db();

    let created = movie::Model::create(db, new_movie)
        .await
        .map_err(ApiError::write_failed)?;
    let total = movie::Model::count(db)
        .await
        .map_err(ApiError::read_failed)?;

    tracing::info!(id = created.id, title = %created.title, "Movie created");

    Ok(ApiResponse::success(MovieCreated {
        new_movie: created.id,
        movies: total,
    }))
}
