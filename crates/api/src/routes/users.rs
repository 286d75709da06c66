//! Route definitions for the public user directory.

use axum::routing::get;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// ```text
/// GET /                  -> list_users
/// GET /{id}              -> get_user
/// GET /{id}/questions    -> list_user_questions
/// GET /{id}/answers      -> list_user_answers
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list_users))
        .route("/{id}", get(users::get_user))
        .route("/{id}/questions", get(users::list_user_questions))
        .route("/{id}/answers", get(users::list_user_answers))
}
