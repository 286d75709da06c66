//! Handlers for `/tags`.

use axum::extract::{Path, Query, State};
use axum::Json;
use quorum_core::error::CoreError;
use quorum_core::listing::{clamp_limit, clamp_offset, DEFAULT_QUESTION_LIMIT, MAX_QUESTION_LIMIT};
use quorum_db::models::question::{QuestionWithAuthor, TagCount};
use quorum_db::repositories::QuestionRepo;

use crate::error::{AppError, AppResult};
use crate::handlers::questions::normalize_tag_filter;
use crate::query::QuestionListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/tags
pub async fn list_tags(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<Vec<TagCount>>>> {
    let tags = QuestionRepo::tag_counts(&state.pool).await?;
    Ok(Json(DataResponse { data: tags }))
}

/// GET /api/v1/tags/{tag}/questions
///
/// Same sorting and paging as the question list; any `tag` query parameter
/// is ignored in favour of the path.
pub async fn list_tag_questions(
    State(state): State<AppState>,
    Path(tag): Path<String>,
    Query(params): Query<QuestionListParams>,
) -> AppResult<Json<DataResponse<Vec<QuestionWithAuthor>>>> {
    let tag = normalize_tag_filter(Some(tag.as_str()))
        .ok_or_else(|| AppError::Core(CoreError::Validation("Tag must not be blank".into())))?;
    let limit = clamp_limit(params.limit, DEFAULT_QUESTION_LIMIT, MAX_QUESTION_LIMIT);
    let offset = clamp_offset(params.offset);

    let questions =
        QuestionRepo::list(&state.pool, params.sort, Some(&tag), limit, offset).await?;
    Ok(Json(DataResponse { data: questions }))
}
