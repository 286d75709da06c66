//! Handlers for answers and answer acceptance under `/questions/{id}`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use quorum_core::acceptance::ensure_question_owner;
use quorum_core::content::validate_answer_body;
use quorum_core::error::CoreError;
use quorum_core::types::DbId;
use quorum_db::models::answer::{
    AcceptOutcome, AcceptanceState, Answer, AnswerWithAuthor, CreateAnswer,
};
use quorum_db::repositories::{AnswerRepo, QuestionRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Request body for `POST /questions/{id}/answers`.
#[derive(Debug, Deserialize)]
pub struct CreateAnswerRequest {
    pub body: String,
}

/// Request body for `POST /questions/{id}/accept`.
#[derive(Debug, Deserialize)]
pub struct AcceptAnswerRequest {
    pub answer_id: DbId,
}

fn question_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Question",
        id,
    })
}

/// GET /api/v1/questions/{id}/answers
pub async fn list_answers(
    State(state): State<AppState>,
    Path(question_id): Path<DbId>,
) -> AppResult<Json<DataResponse<Vec<AnswerWithAuthor>>>> {
    QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .ok_or_else(|| question_not_found(question_id))?;

    let answers = AnswerRepo::list_for_question(&state.pool, question_id).await?;
    Ok(Json(DataResponse { data: answers }))
}

/// POST /api/v1/questions/{id}/answers
///
/// The answer row and the question's `answer_count` are written together.
pub async fn create_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(question_id): Path<DbId>,
    Json(input): Json<CreateAnswerRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Answer>>)> {
    let body = input.body.trim();
    validate_answer_body(body)?;

    let answer = AnswerRepo::create(
        &state.pool,
        &CreateAnswer {
            question_id,
            user_id: auth.user_id,
            body: body.to_string(),
        },
    )
    .await?
    .ok_or_else(|| question_not_found(question_id))?;

    tracing::info!(
        answer_id = answer.id,
        question_id,
        user_id = auth.user_id,
        "Answer created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: answer })))
}

/// POST /api/v1/questions/{id}/accept
///
/// Toggle acceptance of `answer_id`. Accepting the already-accepted answer
/// clears it; accepting another answer moves the mark. Only the question
/// owner may call this, and a rejected call changes nothing.
pub async fn accept_answer(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(question_id): Path<DbId>,
    Json(input): Json<AcceptAnswerRequest>,
) -> AppResult<Json<DataResponse<AcceptanceState>>> {
    // Fail fast before opening the transaction; the transaction re-checks
    // ownership under the row lock.
    let question = QuestionRepo::find_by_id(&state.pool, question_id)
        .await?
        .ok_or_else(|| question_not_found(question_id))?;
    ensure_question_owner(question.user_id, auth.user_id)?;

    let outcome =
        AnswerRepo::toggle_accept(&state.pool, question_id, input.answer_id, auth.user_id)
            .await?;

    match outcome {
        AcceptOutcome::Applied(accepted) => {
            tracing::info!(
                question_id,
                user_id = auth.user_id,
                accepted_answer_id = ?accepted.accepted_answer_id,
                unaccepted_answer_id = ?accepted.unaccepted_answer_id,
                "Answer acceptance toggled",
            );
            Ok(Json(DataResponse { data: accepted }))
        }
        AcceptOutcome::QuestionNotFound => Err(question_not_found(question_id)),
        AcceptOutcome::AnswerNotFound => Err(AppError::Core(CoreError::NotFound {
            entity: "Answer",
            id: input.answer_id,
        })),
        AcceptOutcome::NotOwner => Err(AppError::Core(CoreError::Forbidden(
            "Only the question owner can accept an answer".into(),
        ))),
    }
}
