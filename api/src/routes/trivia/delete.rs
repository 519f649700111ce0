use crate::error::ApiError;
use crate::extract::PathId;
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::question;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct QuestionDeleted {
    pub deleted: i64,
    pub total_questions: u64,
}

/// DELETE /questions/{id}
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "deleted": 24, "total_questions": 19 }
/// ```
///
/// - `400 Bad Request` (no question with that id; nothing is written)
/// - `422 Unprocessable Entity` (delete failed)
pub async fn delete_question(
    State(app_state): State<AppState>,
    PathId(id): PathId,
) -> Result<ApiResponse<QuestionDeleted>, ApiError> {
    let db = app_state.db();

    if question::Model::find_by_id(db, id)
        .await
        .map_err(ApiError::read_failed)?
        .is_none()
    {
        return Err(ApiError::bad_request());
    }

    question::Model::delete(db, id)
        .await
        .map_err(ApiError::write_failed)?;

    let total_questions = question::Model::count(db)
        .await
        .map_err(ApiError::read_failed)?;

    Ok(ApiResponse::success(QuestionDeleted {
        deleted: id,
        total_questions,
    }))
}
