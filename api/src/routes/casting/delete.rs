use crate::error::ApiError;
use crate::extract::PathId;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::{Actor, Movie, actor, movie};
use sea_orm::EntityTrait;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct ActorDeleted {
    pub deleted_actor: i64,
}

#[derive(Debug, Serialize)]
pub struct MovieDeleted {
    pub deleted_movie: i64,
}

/// DELETE /actors/{id}
///
/// Requires `delete:actors`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "deleted_actor": 3 }
/// ```
///
/// - `400 Bad Request` (no actor with that id)
/// - `401 Unauthorized`
/// - `422 Unprocessable Entity`
pub async fn delete_actor(
    State(app_state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiResponse<ActorDeleted>, ApiError> {
    let db = app_state.db();

    if Actor::find_by_id(id)
        .one(db)
        .await
        .map_err(ApiError::read_failed)?
        .is_none()
    {
        return Err(ApiError::bad_request());
    }

    actor::Model::delete(db, id)
        .await
        .map_err(ApiError::write_failed)?;

    tracing::info!(id, "Actor deleted");
    Ok(ApiResponse::success(ActorDeleted { deleted_actor: id }))
}

/// DELETE /movies/{id}
///
/// Requires `delete:movies`.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "deleted_movie": 2 }
/// ```
///
/// - `400 Bad Request` (no movie with that id)
/// - `401 Unauthorized`
/// - `422 Unprocessable Entity`
pub async fn delete_movie(
    State(app_state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiResponse<MovieDeleted>, ApiError> {
    let db = app_state.db();

    if Movie::find_by_id(id)
        .one(db)
        .await
        .map_err(ApiError::read_failed)?
        .is_none()
    {
        return Err(ApiError::bad_request());
    }

    movie::Model::delete(db, id)
        .await
        .map_err(ApiError::write_failed)?;

    tracing::info!(id, "Movie deleted");
    Ok(ApiResponse::success(MovieDeleted { deleted_movie: id }))
}
