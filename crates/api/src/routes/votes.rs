use axum::routing::{get, post};
use axum::Router;

use crate::handlers::votes;
use crate::state::AppState;

/// ```text
/// POST /                              -> cast_vote (auth)
/// GET  /{content_type}/{content_id}   -> get_my_vote (auth)
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(votes::cast_vote))
        .route("/{content_type}/{content_id}", get(votes::get_my_vote))
}
