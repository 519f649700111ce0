use super::QUESTIONS_PER_PAGE;
use super::get::QuestionsResponse;
use crate::error::ApiError;
use crate::extract::{JsonBody, Page, int_or_string, require_fields};
use crate::response::ApiResponse;
use crate::state::AppState;
use axum::extract::State;
use db::models::question::{self, NewQuestion};
use db::quiz;
use serde::{Deserialize, Serialize};
use util::pagination::paginate;

#[derive(Debug, Deserialize)]
struct SearchRequest {
    #[serde(rename = "searchTerm")]
    search_term: String,
}

/// POST /search?page=N
///
/// Case-insensitive substring search over question text.
///
/// ### Request Body
/// ```json
/// { "searchTerm": "title" }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// {
///   "success": true,
///   "questions": [ ... ],
///   "total_questions": 2,
///   "current_category": null
/// }
/// ```
///
/// - `400 Bad Request` (`searchTerm` missing)
/// - `404 Not Found` (nothing matched)
pub async fn search_questions(
    State(app_state): State<AppState>,
    Page(page): Page,
    body: JsonBody,
) -> Result<ApiResponse<QuestionsResponse>, ApiError> {
    let SearchRequest { search_term } = body.require(&["searchTerm"])?.parse()?;

    let matches = question::Model::search(app_state.db(), &search_term)
        .await
        .map_err(ApiError::read_failed)?;

    if matches.is_empty() {
        return Err(ApiError::NotFound);
    }

    Ok(ApiResponse::success(QuestionsResponse {
        questions: paginate(&matches, page, QUESTIONS_PER_PAGE).to_vec(),
        total_questions: matches.len(),
        categories: None,
        current_category: None,
    }))
}

#[derive(Debug, Deserialize)]
struct AddQuestionRequest {
    question: String,
    answer: String,
    #[serde(deserialize_with = "int_or_string")]
    category: i64,
    #[serde(deserialize_with = "int_or_string")]
    difficulty: i32,
}

#[derive(Debug, Serialize)]
pub struct QuestionCreated {
    pub created: i64,
    pub questions: u64,
}

/// POST /addQuestions
///
/// Adds a question. `category` and `difficulty` may be numbers or numeric strings.
///
/// ### Request Body
/// ```json
/// { "question": "Q", "answer": "A", "category": "2", "difficulty": 3 }
/// ```
///
/// ### Responses
///
/// - `200 OK` (`questions` is the new total)
/// ```json
/// { "success": true, "created": 24, "questions": 20 }
/// ```
///
/// - `400 Bad Request` (missing or mistyped field)
/// - `422 Unprocessable Entity` (insert failed, e.g. unknown category)
pub async fn add_question(
    State(app_state): State<AppState>,
    body: JsonBody,
) -> Result<ApiResponse<QuestionCreated>, ApiError> {
    let db = app_state.db();
    let req: AddQuestionRequest = body
        .require(&["question", "answer", "category", "difficulty"])?
        .parse()?;

    let created = question::Model::create(
        db,
        NewQuestion {
            question: req.question,
            answer: req.answer,
            category: req.category,
            difficulty: req.difficulty,
        },
    )
    .await
    .map_err(ApiError::write_failed)?;

    let total = question::Model::count(db)
        .await
        .map_err(ApiError::read_failed)?;

    tracing::info!(id = created.id, category = created.category, "Question created");

    Ok(ApiResponse::success(QuestionCreated {
        created: created.id,
        questions: total,
    }))
}

#[derive(Debug, Deserialize)]
struct QuizCategory {
    #[serde(deserialize_with = "int_or_string")]
    id: i64,
}

#[derive(Debug, Deserialize)]
struct QuizRequest {
    quiz_category: QuizCategory,
    #[serde(default)]
    previous_questions: Option<Vec<i64>>,
}

#[derive(Debug, Serialize)]
pub struct QuizResponse {
    pub question: Option<question::Model>,
}

/// POST /quizzes
///
/// Picks a random question from the chosen category (`0` = all) that is not in
/// `previous_questions`. When every eligible question has been seen, answers
/// 200 with `success: false` and a null question.
///
/// ### Request Body
/// ```json
/// { "quiz_category": { "id": "1", "type": "Science" }, "previous_questions": [4, 9] }
/// ```
///
/// ### Responses
///
/// - `200 OK`
/// ```json
/// { "success": true, "question": { "id": 20, "question": "...", "answer": "...", "category": 1, "difficulty": 4 } }
/// ```
/// ```json
/// { "success": false, "question": null }
/// ```
///
/// - `400 Bad Request` (`quiz_category` or its `id` missing)
pub async fn play_quiz(
    State(app_state): State<AppState>,
    body: JsonBody,
) -> Result<ApiResponse<QuizResponse>, ApiError> {
    let body = body.require(&["quiz_category"])?;
    match body.get("quiz_category") {
        Some(serde_json::Value::Object(category)) => {
            require_fields(category, &["id"])?;
        }
        _ => return Err(ApiError::invalid("quiz_category must be an object")),
    }
    let req: QuizRequest = body.parse()?;
    let seen = req.previous_questions.unwrap_or_default();

    let picked = quiz::pick_unseen(app_state.db(), req.quiz_category.id, &seen)
        .await
        .map_err(ApiError::read_failed)?;

    Ok(match picked {
        Some(question) => ApiResponse::success(QuizResponse {
            question: Some(question),
        }),
        None => ApiResponse::failure(QuizResponse { question: None }),
    })
}
