//! Question models and DTOs.

use quorum_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `questions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Question {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
    pub vote_count: i32,
    pub answer_count: i32,
    pub view_count: i32,
    pub accepted_answer_id: Option<DbId>,
    pub created_at: Timestamp,
}

/// A question joined with its author's display fields.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct QuestionWithAuthor {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub question: Question,
    pub author_username: String,
    pub author_reputation: i32,
}

/// DTO for inserting a question. Tags must already be normalized.
#[derive(Debug, Clone)]
pub struct CreateQuestion {
    pub user_id: DbId,
    pub title: String,
    pub body: String,
    pub tags: Vec<String>,
}

/// A tag and the number of questions carrying it.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TagCount {
    pub name: String,
    pub count: i64,
}
