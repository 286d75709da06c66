//! Repository for the `questions` table.

use quorum_core::listing::QuestionSort;
use quorum_core::types::DbId;
use sqlx::PgPool;

use crate::models::question::{CreateQuestion, Question, QuestionWithAuthor, TagCount};

/// Column list for plain `questions` queries.
const COLUMNS: &str = "id, user_id, title, body, tags, vote_count, answer_count, view_count, \
                        accepted_answer_id, created_at";

/// Column list for `questions q JOIN users u` queries.
const JOINED_COLUMNS: &str = "\
    q.id, q.user_id, q.title, q.body, q.tags, q.vote_count, q.answer_count, q.view_count, \
    q.accepted_answer_id, q.created_at, \
    u.username AS author_username, u.reputation AS author_reputation";

pub struct QuestionRepo;

impl QuestionRepo {
    /// Insert a new question, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateQuestion) -> Result<Question, sqlx::Error> {
        let query = format!(
            "INSERT INTO questions (user_id, title, body, tags)
             VALUES ($1, $2, $3, $4)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Question>(&query)
            .bind(input.user_id)
            .bind(&input.title)
            .bind(&input.body)
            .bind(&input.tags)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Question>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM questions WHERE id = $1");
        sqlx::query_as::<_, Question>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a question together with its author.
    pub async fn find_with_author(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<QuestionWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM questions q \
             JOIN users u ON u.id = q.user_id \
             WHERE q.id = $1"
        );
        sqlx::query_as::<_, QuestionWithAuthor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Atomically increment `view_count`. Returns `false` if the question
    /// does not exist.
    pub async fn record_view(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("UPDATE questions SET view_count = view_count + 1 WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// List questions, optionally restricted to one tag.
    ///
    /// `Unanswered` keeps only questions with `answer_count = 0`.
    pub async fn list(
        pool: &PgPool,
        sort: QuestionSort,
        tag: Option<&str>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<QuestionWithAuthor>, sqlx::Error> {
        let (filter, order) = match sort {
            QuestionSort::Newest => ("", "q.created_at DESC, q.id DESC"),
            QuestionSort::Votes => ("", "q.vote_count DESC, q.created_at DESC, q.id DESC"),
            QuestionSort::Unanswered => {
                ("AND q.answer_count = 0", "q.created_at DESC, q.id DESC")
            }
        };
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM questions q \
             JOIN users u ON u.id = q.user_id \
             WHERE ($1::TEXT IS NULL OR $1 = ANY(q.tags)) {filter} \
             ORDER BY {order} \
             LIMIT $2 OFFSET $3"
        );
        sqlx::query_as::<_, QuestionWithAuthor>(&query)
            .bind(tag)
            .bind(limit)
            .bind(offset)
            .fetch_all(pool)
            .await
    }

    /// All questions asked by a user, newest first.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<QuestionWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {JOINED_COLUMNS} FROM questions q \
             JOIN users u ON u.id = q.user_id \
             WHERE q.user_id = $1 \
             ORDER BY q.created_at DESC, q.id DESC"
        );
        sqlx::query_as::<_, QuestionWithAuthor>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Count questions per tag, most used first.
    pub async fn tag_counts(pool: &PgPool) -> Result<Vec<TagCount>, sqlx::Error> {
        sqlx::query_as::<_, TagCount>(
            "SELECT tag AS name, COUNT(*) AS count \
             FROM questions, unnest(tags) AS tag \
             GROUP BY tag \
             ORDER BY count DESC, name ASC",
        )
        .fetch_all(pool)
        .await
    }
}
