//! Route definitions for `/questions` and their answers.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::{answers, questions};
use crate::state::AppState;

/// ```text
/// GET  /                 -> list_questions
/// POST /                 -> create_question (auth)
/// GET  /{id}             -> get_question
/// GET  /{id}/answers     -> list_answers
/// POST /{id}/answers     -> create_answer (auth)
/// POST /{id}/accept      -> accept_answer (owner)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/",
            get(questions::list_questions).post(questions::create_question),
        )
        .route("/{id}", get(questions::get_question))
        .route(
            "/{id}/answers",
            get(answers::list_answers).post(answers::create_answer),
        )
        .route("/{id}/accept", post(answers::accept_answer))
}
