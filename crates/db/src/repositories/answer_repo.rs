//! Repository for the `answers` table, including answer acceptance.

use quorum_core::acceptance::plan_acceptance;
use quorum_core::types::DbId;
use sqlx::PgPool;

use crate::models::answer::{
    AcceptOutcome, AcceptanceState, Answer, AnswerWithAuthor, CreateAnswer, UserAnswer,
};

/// Column list for plain `answers` queries.
const COLUMNS: &str = "id, question_id, user_id, body, vote_count, is_accepted, \
                        created_at";

/// Answer columns prefixed with `a.` for joined queries.
const PREFIXED_COLUMNS: &str = "\
    a.id, a.question_id, a.user_id, a.body, a.vote_count, a.is_accepted, \
    a.created_at";

pub struct AnswerRepo;

impl AnswerRepo {
    /// Insert an answer and bump the question's `answer_count` in one
    /// transaction.
    ///
    /// Returns `None` if the question does not exist.
    pub async fn create(
        pool: &PgPool,
        input: &CreateAnswer,
    ) -> Result<Option<Answer>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let bumped =
            sqlx::query("UPDATE questions SET answer_count = answer_count + 1 WHERE id = $1")
                .bind(input.question_id)
                .execute(&mut *tx)
                .await?;
        if bumped.rows_affected() == 0 {
            return Ok(None);
        }

        let query = format!(
            "INSERT INTO answers (question_id, user_id, body)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let answer = sqlx::query_as::<_, Answer>(&query)
            .bind(input.question_id)
            .bind(input.user_id)
            .bind(&input.body)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(answer))
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Answer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM answers WHERE id = $1");
        sqlx::query_as::<_, Answer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Answers to a question: accepted first, then by votes, then oldest first.
    pub async fn list_for_question(
        pool: &PgPool,
        question_id: DbId,
    ) -> Result<Vec<AnswerWithAuthor>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS}, \
                    u.username AS author_username, u.reputation AS author_reputation \
             FROM answers a \
             JOIN users u ON u.id = a.user_id \
             WHERE a.question_id = $1 \
             ORDER BY a.is_accepted DESC, a.vote_count DESC, a.created_at ASC, a.id ASC"
        );
        sqlx::query_as::<_, AnswerWithAuthor>(&query)
            .bind(question_id)
            .fetch_all(pool)
            .await
    }

    /// All answers written by a user, newest first, with question titles.
    pub async fn list_by_user(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<UserAnswer>, sqlx::Error> {
        let query = format!(
            "SELECT {PREFIXED_COLUMNS}, q.title AS question_title \
             FROM answers a \
             JOIN questions q ON q.id = a.question_id \
             WHERE a.user_id = $1 \
             ORDER BY a.created_at DESC, a.id DESC"
        );
        sqlx::query_as::<_, UserAnswer>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Toggle acceptance of `answer_id` on behalf of `caller_id`.
    ///
    /// Runs as one transaction. The question row is locked `FOR UPDATE`, so
    /// concurrent toggles on the same question serialize and no reader ever
    /// observes two accepted answers or a flag that disagrees with
    /// `accepted_answer_id`. Ownership and membership failures roll back
    /// without writing.
    pub async fn toggle_accept(
        pool: &PgPool,
        question_id: DbId,
        answer_id: DbId,
        caller_id: DbId,
    ) -> Result<AcceptOutcome, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let question: Option<(DbId, Option<DbId>)> = sqlx::query_as(
            "SELECT user_id, accepted_answer_id FROM questions WHERE id = $1 FOR UPDATE",
        )
        .bind(question_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((owner_id, current)) = question else {
            return Ok(AcceptOutcome::QuestionNotFound);
        };
        if owner_id != caller_id {
            return Ok(AcceptOutcome::NotOwner);
        }

        let belongs: Option<(DbId,)> =
            sqlx::query_as("SELECT id FROM answers WHERE id = $1 AND question_id = $2")
                .bind(answer_id)
                .bind(question_id)
                .fetch_optional(&mut *tx)
                .await?;
        if belongs.is_none() {
            return Ok(AcceptOutcome::AnswerNotFound);
        }

        let plan = plan_acceptance(current, answer_id);

        // Clear before set: the partial unique index allows one accepted
        // answer per question at any statement boundary.
        if let Some(id) = plan.unaccept {
            sqlx::query(
                "UPDATE answers SET is_accepted = false WHERE id = $1 AND question_id = $2",
            )
            .bind(id)
            .bind(question_id)
            .execute(&mut *tx)
            .await?;
        }
        if let Some(id) = plan.accept {
            sqlx::query(
                "UPDATE answers SET is_accepted = true WHERE id = $1 AND question_id = $2",
            )
            .bind(id)
            .bind(question_id)
            .execute(&mut *tx)
            .await?;
        }

        sqlx::query("UPDATE questions SET accepted_answer_id = $2 WHERE id = $1")
            .bind(question_id)
            .bind(plan.accepted_after())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(AcceptOutcome::Applied(AcceptanceState {
            question_id,
            accepted_answer_id: plan.accepted_after(),
            unaccepted_answer_id: plan.unaccept,
        }))
    }
}
