use axum::routing::get;
use axum::Router;

use crate::handlers::tags;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tags::list_tags))
        .route("/{tag}/questions", get(tags::list_tag_questions))
}
