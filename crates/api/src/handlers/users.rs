//! Handlers for the public user directory.

use axum::extract::{Path, Query, State};
use axum::Json;
use quorum_core::error::CoreError;
use quorum_core::listing::{clamp_limit, clamp_offset, DEFAULT_PROFILE_LIMIT, MAX_PROFILE_LIMIT};
use quorum_core::types::DbId;
use quorum_db::models::answer::UserAnswer;
use quorum_db::models::question::QuestionWithAuthor;
use quorum_db::models::user::Profile;
use quorum_db::repositories::{AnswerRepo, QuestionRepo, UserRepo};

use crate::error::{AppError, AppResult};
use crate::query::ProfileListParams;
use crate::response::DataResponse;
use crate::state::AppState;

async fn load_profile(state: &AppState, id: DbId) -> AppResult<Profile> {
    UserRepo::find_profile(&state.pool, id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
}

/// GET /api/v1/users
pub async fn list_users(
    State(state): State<AppState>,
    Query(params): Query<ProfileListParams>,
) -> AppResult<Json<DataResponse<Vec<Profile>>>> {
    let limit = clamp_limit(params.limit, DEFAULT_PROFILE_LIMIT, MAX_PROFILE_LIMIT);
    let offset = clamp_offset(params.offset);

    let profiles = UserRepo::list_profiles(&state.pool, params.sort, limit, offset).await?;
    Ok(Json(DataResponse { data: profiles }))
}

/// GET /api/v1/users/{id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Profile>>> {
    let profile = load_profile(&state, id).await?;
    Ok(Json(DataResponse { data: profile }))
}

/// GET /api/v1/users/{id}/questions
pub async fn list_user_questions(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<QuestionWithAuthor>>>> {
    load_profile(&state, id).await?;
    let questions = QuestionRepo::list_by_user(&state.pool, id).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// GET /api/v1/users/{id}/answers
pub async fn list_user_answers(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<UserAnswer>>>> {
    load_profile(&state, id).await?;
    let answers = AnswerRepo::list_by_user(&state.pool, id).await?;
    Ok(Json(DataResponse { data: answers }))
}
