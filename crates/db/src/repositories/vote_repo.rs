//! Repository for the `votes` table and the vote counters it drives.

use quorum_core::types::DbId;
use quorum_core::voting::{resolve_vote, ContentType, VoteValue};
use sqlx::PgPool;

use crate::models::vote::{Vote, VoteResult};

const COLUMNS: &str = "id, user_id, content_type, content_id, vote_value, created_at, updated_at";

pub struct VoteRepo;

impl VoteRepo {
    /// The caller's standing vote on a piece of content, if any.
    pub async fn find_user_vote(
        pool: &PgPool,
        user_id: DbId,
        content_type: ContentType,
        content_id: DbId,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM votes \
             WHERE user_id = $1 AND content_type = $2 AND content_id = $3"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(user_id)
            .bind(content_type.as_str())
            .bind(content_id)
            .fetch_optional(pool)
            .await
    }

    /// Cast, retract, or flip a vote and adjust `vote_count` atomically.
    ///
    /// The content row is locked `FOR UPDATE` first, so every vote on the
    /// same content serializes behind it. Within the lock the caller's vote
    /// row is read, the transition resolved, the vote row inserted, deleted,
    /// or updated, and `vote_count` incremented by the delta. The returned
    /// count is the one written by this transaction.
    ///
    /// Returns `None` (nothing written) if the content does not exist.
    pub async fn cast(
        pool: &PgPool,
        user_id: DbId,
        content_type: ContentType,
        content_id: DbId,
        value: VoteValue,
    ) -> Result<Option<VoteResult>, sqlx::Error> {
        let table = content_type.table();
        let mut tx = pool.begin().await?;

        let locked: Option<(DbId,)> =
            sqlx::query_as(&format!("SELECT id FROM {table} WHERE id = $1 FOR UPDATE"))
                .bind(content_id)
                .fetch_optional(&mut *tx)
                .await?;
        if locked.is_none() {
            return Ok(None);
        }

        let existing: Option<(DbId, i16)> = sqlx::query_as(
            "SELECT id, vote_value FROM votes \
             WHERE user_id = $1 AND content_type = $2 AND content_id = $3",
        )
        .bind(user_id)
        .bind(content_type.as_str())
        .bind(content_id)
        .fetch_optional(&mut *tx)
        .await?;

        let existing_value = existing
            .map(|(_, raw)| VoteValue::try_from(raw))
            .transpose()
            .map_err(|e| sqlx::Error::Decode(Box::new(e)))?;
        let outcome = resolve_vote(existing_value, value);

        match (existing, outcome.standing) {
            (None, _) => {
                sqlx::query(
                    "INSERT INTO votes (user_id, content_type, content_id, vote_value) \
                     VALUES ($1, $2, $3, $4)",
                )
                .bind(user_id)
                .bind(content_type.as_str())
                .bind(content_id)
                .bind(value.value())
                .execute(&mut *tx)
                .await?;
            }
            (Some((vote_id, _)), None) => {
                sqlx::query("DELETE FROM votes WHERE id = $1")
                    .bind(vote_id)
                    .execute(&mut *tx)
                    .await?;
            }
            (Some((vote_id, _)), Some(standing)) => {
                sqlx::query("UPDATE votes SET vote_value = $2 WHERE id = $1")
                    .bind(vote_id)
                    .bind(standing.value())
                    .execute(&mut *tx)
                    .await?;
            }
        }

        let (vote_count,): (i32,) = sqlx::query_as(&format!(
            "UPDATE {table} SET vote_count = vote_count + $2 WHERE id = $1 RETURNING vote_count"
        ))
        .bind(content_id)
        .bind(outcome.delta)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;

        tracing::debug!(
            user_id,
            content_type = %content_type,
            content_id,
            transition = ?outcome.transition,
            vote_count,
            "Vote applied",
        );

        Ok(Some(VoteResult {
            content_type,
            content_id,
            vote_count,
            user_vote: outcome.standing,
            transition: outcome.transition,
        }))
    }
}
