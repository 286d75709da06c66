//! Answer models, DTOs, and the acceptance transaction result.

use quorum_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `answers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Answer {
    pub id: DbId,
    pub question_id: DbId,
    pub user_id: DbId,
    pub body: String,
    pub vote_count: i32,
    pub is_accepted: bool,
    pub created_at: Timestamp,
}

/// An answer joined with its author's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AnswerWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub answer: Answer,
    pub author_username: String,
    pub author_reputation: i32,
}

/// An answer listed on its author's profile, with the question title.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct UserAnswer {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub answer: Answer,
    pub question_title: String,
}

/// DTO for inserting an answer.
#[derive(Debug, Clone)]
pub struct CreateAnswer {
    pub question_id: DbId,
    pub user_id: DbId,
    pub body: String,
}

/// Question state after an acceptance toggle was committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AcceptanceState {
    pub question_id: DbId,
    /// The accepted answer after the toggle, `None` if it was un-accepted.
    pub accepted_answer_id: Option<DbId>,
    /// Answer whose flag was cleared by this toggle, if any.
    pub unaccepted_answer_id: Option<DbId>,
}

/// Outcome of [`AnswerRepo::toggle_accept`](crate::repositories::AnswerRepo::toggle_accept).
///
/// Every variant other than `Applied` means the transaction was rolled back
/// without writing anything.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcceptOutcome {
    Applied(AcceptanceState),
    QuestionNotFound,
    /// The answer does not exist or belongs to another question.
    AnswerNotFound,
    /// The caller is not the question's author.
    NotOwner,
}
