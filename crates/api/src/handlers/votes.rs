//! Handlers for `/votes`.

use axum::extract::{Path, State};
use axum::Json;
use quorum_core::error::CoreError;
use quorum_core::types::DbId;
use quorum_core::voting::{ContentType, VoteValue};
use quorum_db::models::vote::VoteResult;
use quorum_db::repositories::VoteRepo;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /votes`.
///
/// `content_type` and `value` are parsed by hand so bad input yields a
/// `VALIDATION_ERROR` body rather than a bare deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct VoteRequest {
    pub content_id: DbId,
    pub content_type: String,
    pub value: i16,
}

/// The caller's standing vote on one piece of content.
#[derive(Debug, Serialize)]
pub struct MyVote {
    pub content_type: ContentType,
    pub content_id: DbId,
    /// `1`, `-1`, or `0` when the caller has no vote.
    pub user_vote: i16,
}

/// POST /api/v1/votes
///
/// Cast, retract, or flip the caller's vote. The returned `vote_count` is the
/// value committed by the same transaction that changed the vote row.
pub async fn cast_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<VoteRequest>,
) -> AppResult<Json<DataResponse<VoteResult>>> {
    let content_type: ContentType = input.content_type.parse()?;
    let value = VoteValue::try_from(input.value)?;

    let result = VoteRepo::cast(
        &state.pool,
        auth.user_id,
        content_type,
        input.content_id,
        value,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: content_type.entity_name(),
        id: input.content_id,
    }))?;

    tracing::info!(
        user_id = auth.user_id,
        content_type = %content_type,
        content_id = input.content_id,
        transition = ?result.transition,
        vote_count = result.vote_count,
        "Vote recorded",
    );

    Ok(Json(DataResponse { data: result }))
}

/// GET /api/v1/votes/{content_type}/{content_id}
pub async fn get_my_vote(
    State(state): State<AppState>,
    auth: AuthUser,
    Path((content_type, content_id)): Path<(String, DbId)>,
) -> AppResult<Json<DataResponse<MyVote>>> {
    let content_type: ContentType = content_type.parse()?;

    let vote = VoteRepo::find_user_vote(&state.pool, auth.user_id, content_type, content_id)
        .await?;

    Ok(Json(DataResponse {
        data: MyVote {
            content_type,
            content_id,
            user_vote: vote.map_or(0, |v| v.vote_value),
        },
    }))
}
