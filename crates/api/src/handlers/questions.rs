//! Handlers for `/questions`.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use quorum_core::content::{
    normalize_tags, parse_tag_list, validate_question_body, validate_question_title,
    validate_tags,
};
use quorum_core::error::CoreError;
use quorum_core::listing::{clamp_limit, clamp_offset, DEFAULT_QUESTION_LIMIT, MAX_QUESTION_LIMIT};
use quorum_core::types::DbId;
use quorum_db::models::answer::AnswerWithAuthor;
use quorum_db::models::question::{CreateQuestion, Question, QuestionWithAuthor};
use quorum_db::repositories::{AnswerRepo, QuestionRepo};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::query::QuestionListParams;
use crate::response::DataResponse;
use crate::state::AppState;

/// Tags as a JSON array or as the comma-separated string typed into the ask form.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TagInput {
    List(Vec<String>),
    Csv(String),
}

impl TagInput {
    fn normalize(&self) -> Vec<String> {
        match self {
            TagInput::List(tags) => normalize_tags(tags),
            TagInput::Csv(raw) => parse_tag_list(raw),
        }
    }
}

/// Request body for `POST /questions`.
#[derive(Debug, Deserialize)]
pub struct CreateQuestionRequest {
    pub title: String,
    pub body: String,
    pub tags: TagInput,
}

/// A question with its author and ordered answers.
#[derive(Debug, Serialize)]
pub struct QuestionDetail {
    #[serde(flatten)]
    pub question: QuestionWithAuthor,
    pub answers: Vec<AnswerWithAuthor>,
}

/// Trim and lowercase a tag filter; blank means no filter.
pub(crate) fn normalize_tag_filter(tag: Option<&str>) -> Option<String> {
    tag.map(|t| t.trim().to_lowercase()).filter(|t| !t.is_empty())
}

/// GET /api/v1/questions
pub async fn list_questions(
    State(state): State<AppState>,
    Query(params): Query<QuestionListParams>,
) -> AppResult<Json<DataResponse<Vec<QuestionWithAuthor>>>> {
    let tag = normalize_tag_filter(params.tag.as_deref());
    let limit = clamp_limit(params.limit, DEFAULT_QUESTION_LIMIT, MAX_QUESTION_LIMIT);
    let offset = clamp_offset(params.offset);

    let questions =
        QuestionRepo::list(&state.pool, params.sort, tag.as_deref(), limit, offset).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// POST /api/v1/questions
pub async fn create_question(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(input): Json<CreateQuestionRequest>,
) -> AppResult<(StatusCode, Json<DataResponse<Question>>)> {
    let title = input.title.trim();
    let body = input.body.trim();
    validate_question_title(title)?;
    validate_question_body(body)?;
    let tags = input.tags.normalize();
    validate_tags(&tags)?;

    let question = QuestionRepo::create(
        &state.pool,
        &CreateQuestion {
            user_id: auth.user_id,
            title: title.to_string(),
            body: body.to_string(),
            tags,
        },
    )
    .await?;

    tracing::info!(
        question_id = question.id,
        user_id = auth.user_id,
        tags = ?question.tags,
        "Question created",
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: question })))
}

/// GET /api/v1/questions/{id}
///
/// Counts a view, then returns the question with its answers.
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DataResponse<QuestionDetail>>> {
    let not_found = || {
        AppError::Core(CoreError::NotFound {
            entity: "Question",
            id,
        })
    };

    if !QuestionRepo::record_view(&state.pool, id).await? {
        return Err(not_found());
    }
    let question = QuestionRepo::find_with_author(&state.pool, id)
        .await?
        .ok_or_else(not_found)?;
    let answers = AnswerRepo::list_for_question(&state.pool, id).await?;

    Ok(Json(DataResponse {
        data: QuestionDetail { question, answers },
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_accept_array_or_comma_string() {
        let list: TagInput = serde_json::from_str(r#"["Rust", " async", "rust"]"#).unwrap();
        assert_eq!(list.normalize(), vec!["rust", "async"]);

        let csv: TagInput = serde_json::from_str(r#""Rust, async,,tokio""#).unwrap();
        assert_eq!(csv.normalize(), vec!["rust", "async", "tokio"]);
    }

    #[test]
    fn blank_tag_filter_is_ignored() {
        assert_eq!(normalize_tag_filter(Some("  ")), None);
        assert_eq!(normalize_tag_filter(Some(" Rust ")), Some("rust".to_string()));
        assert_eq!(normalize_tag_filter(None), None);
    }
}
