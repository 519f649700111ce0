use super::QUESTIONS_PER_PAGE;
use crate::error::ApiError;
use crate::extract::{Page, PathId};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::{category, question};
use serde::Serialize;
use std::collections::BTreeMap;
use util::pagination::paginate;

#[derive(Debug, Serialize)]
pub struct CategoriesResponse {
    pub categories: BTreeMap<i64, String>,
    pub total_categories: usize,
}

#[derive(Debug, Serialize)]
pub struct QuestionsResponse {
    pub questions: Vec<question::Model>,
    pub total_questions: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<BTreeMap<i64, String>>,
    pub current_category: Option<i64>,
}

/// GET /categories
///
/// All categories as an `{id: type}` object.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "categories": { "1": "Science", "2": "Art" },
///   "total_categories": 2
/// }
/// ```
///
/// - `404 Not Found` (no categories at all)
pub async fn list_categories(
    State(app_state): State<AppState>,
) -> Result<ApiResponse<CategoriesResponse>, ApiError> {
    let categories = category::Model::id_to_type(app_state.db())
        .await
        .map_err(ApiError::read_failed)?;

    if categories.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(ApiResponse::success(CategoriesResponse {
        total_categories: categories.len(),
        categories,
    }))
}

/// GET /questions?page=N
///
/// One page of questions (ten per page) plus every category, for the
/// front-end's main listing.
///
/// ### Query Parameters
/// - `page` (optional, default `1`, must be ≥ 1)
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "questions": [ { "id": 1, "question": "...", "answer": "...", "category": 1, "difficulty": 3 } ],
///   "total_questions": 19,
///   "categories": { "1": "Science" },
///   "current_category": null
/// }
/// ```
///
/// - `400 Bad Request` (invalid `page`)
/// - `404 Not Found` (no questions at all)
pub async fn list_questions(
    State(app_state): State<AppState>,
    Page(page): Page,
) -> Result<ApiResponse<QuestionsResponse>, ApiError> {
    let db = app_state.db();
    let questions = question::Model::all_ordered(db)
        .await
        .map_err(ApiError::read_failed)?;

    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    let categories = category::Model::id_to_type(db)
        .await
        .map_err(ApiError::read_failed)?;

    Ok(ApiResponse::success(QuestionsResponse {
        questions: paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: questions.len(),
        categories: Some(categories),
        current_category: None,
    }))
}

/// GET /categories/{id}/questions?page=N
///
/// One page of the questions in a single category.
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "questions": [ ... ],
///   "total_questions": 4,
///   "current_category": 1
/// }
/// ```
///
/// - `400 Bad Request` (non-integer id or invalid `page`)
/// - `404 Not Found` (no question in that category)
pub async fn questions_by_category(
    State(app_state): State<AppState>,
    PathId(category_id): PathId,
    Page(page): Page,
) -> Result<ApiResponse<QuestionsResponse>, ApiError> {
    let questions = question::Model::in_category(app_state.db(), category_id)
        .await
        .map_err(ApiError::read_failed)?;

    if questions.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(ApiResponse::success(QuestionsResponse {
        questions: paginate(&questions, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: questions.len(),
        categories: None,
        current_category: Some(category_id),
    }))
}
