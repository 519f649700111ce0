use crate::error::ApiError;
use crate::extract::{JsonBody, PathId};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::{
    actor::{self, ActorChanges},
    movie::{self, MovieChanges},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActorUpdated {
    pub update_actor: Vec<actor::Model>,
}

#[derive(Debug, Serialize)]
pub struct MovieUpdated {
    pub update_movie: Vec<movie::Model>,
}

/// PATCH /actors/{id}
///
/// Changes any of `name`, `age` and `gender`; omitted fields keep their value.
/// Requires `patch:actors`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "update_actor": [ { "id": 1, "name": "Ada Brooks", "age": 35, "gender": "female" } ] }
/// ```
///
/// - `400 Bad Request` (unknown id or mistyped field)
/// - `401 Unauthorized`
/// - `422 Unprocessable Entity`
pub async fn update_actor(
    State(app_state): State<AppState>,
    PathId(id): PathId,
    body: JsonBody,
) -> Result<ApiResponse<ActorUpdated>, ApiError> {
    let changes: ActorChanges = body.parse()?;

    let updated = actor::Model::update(app_state.db(), id, changes)
        .await
        .map_err(ApiError::write_failed)?
        .ok_or_else(ApiError::bad_request)?;

    Ok(ApiResponse::success(ActorUpdated {
        update_actor: vec![updated],
    }))
}

/// PATCH /movies/{id}
///
/// Changes `title` and/or `release_date`. Requires `patch:movies`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "update_movie": [ { "id": 1, "title": "Night Train", "release_date": "2027-04-01" } ] }
/// ```
///
/// - `400 Bad Request` (unknown id or mistyped field)
/// - `401 Unauthorized`
/// - `422 Unprocessable Entity`
pub async fn update_movie(
    State(app_state): State<AppState>,
    PathId(id): PathId,
    body: JsonBody,
) -> Result<ApiResponse<MovieUpdated>, ApiError> {
    let changes: MovieChanges = body.parse()?;

    let updated = movie::Model::update(app_state.db(), id, changes)
        .await
        .map_err(ApiError::write_failed)?
        .ok_or_else(ApiError::bad_request)?;

    Ok(ApiResponse::success(MovieUpdated {
        update_movie: vec![updated],
    }))
}
