pub mod auth;
pub mod health;
pub mod questions;
pub mod tags;
pub mod users;
pub mod votes;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (auth)
/// /auth/me                             current profile (auth)
///
/// /questions                           list (public), create (auth)
/// /questions/{id}                      detail, counts a view (public)
/// /questions/{id}/answers              list (public), create (auth)
/// /questions/{id}/accept               toggle acceptance (owner)
///
/// /votes                               cast / retract / flip (auth)
/// /votes/{content_type}/{content_id}   caller's vote (auth)
///
/// /tags                                tag usage counts
/// /tags/{tag}/questions                questions with a tag
///
/// /users                               profile directory
/// /users/{id}                          profile
/// /users/{id}/questions                questions asked
/// /users/{id}/answers                  answers given
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/questions", questions::router())
        .nest("/votes", votes::router())
        .nest("/tags", tags::router())
        .nest("/users", users::router())
}
