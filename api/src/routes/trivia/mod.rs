//! # Trivia Routes Module
//!
//! Public question bank and quiz endpoints.
//!
//! ## Structure
//! - `get.rs` - category and paginated question listings
//! - `post.rs` - search, question creation and quiz play
//! - `delete.rs` - question removal

use crate::state::AppState;
use axum::{
    Router,
    routing::{delete, get, post},
};
use delete::delete_question;
use get::{list_categories, list_questions, questions_by_category};
use post::{add_question, play_quiz, search_questions};

pub mod delete;
pub mod get;
pub mod post;

/// Questions per page on every paginated trivia listing.
pub const QUESTIONS_PER_PAGE: u64 = util::pagination::PAGE_SIZE;

/// Builds the trivia route group.
///
/// - `GET /categories` → `list_categories`
/// - `GET /questions` → `list_questions`
/// - `GET /categories/{id}/questions` → `questions_by_category`
/// - `DELETE /questions/{id}` → `delete_question`
/// - `POST /search` → `search_questions`
/// - `POST /addQuestions` → `add_question`
/// - `POST /quizzes` → `play_quiz`
pub fn trivia_routes() -> Router<AppState> {
    Router::new()
        .route("/categories", get(list_categories))
        .route("/questions", get(list_questions))
        .route("/categories/{id}/questions", get(questions_by_category))
        .route("/questions/{id}", delete(delete_question))
        .route("/search", post(search_questions))
        .route("/addQuestions", post(add_question))
        .route("/quizzes", post(play_quiz))
}
