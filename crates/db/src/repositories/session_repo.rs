//! Repository for refresh sessions (`user_sessions`).

use quorum_core::types::{DbId, Timestamp};
use sqlx::{PgExecutor, PgPool};

use crate::models::session::{NewSession, RefreshSession, Rotation};

const COLUMNS: &str = "id, user_id, refresh_token_hash, expires_at, is_revoked, replaced_by, \
                        created_at";

pub struct SessionRepo;

impl SessionRepo {
    /// Open a session for a fresh login or registration.
    pub async fn create(pool: &PgPool, input: &NewSession) -> Result<RefreshSession, sqlx::Error> {
        insert(pool, input).await
    }

    /// Replace the session behind `presented_hash` with a new one keyed by
    /// `next_hash`, in one transaction.
    ///
    /// The presented row is locked `FOR UPDATE`, so two refreshes racing on
    /// the same token cannot both succeed: the loser sees `replaced_by` set
    /// and is treated as a replay.
    pub async fn rotate(
        pool: &PgPool,
        presented_hash: &str,
        next_hash: &str,
        expires_at: Timestamp,
    ) -> Result<Rotation, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let presented: Option<(DbId, DbId, bool, Option<DbId>, bool)> = sqlx::query_as(
            "SELECT id, user_id, is_revoked, replaced_by, expires_at > NOW() \
             FROM user_sessions WHERE refresh_token_hash = $1 FOR UPDATE",
        )
        .bind(presented_hash)
        .fetch_optional(&mut *tx)
        .await?;

        let Some((id, user_id, is_revoked, replaced_by, live)) = presented else {
            return Ok(Rotation::Rejected);
        };

        if replaced_by.is_some() {
            let revoked = revoke_all(&mut *tx, user_id).await?;
            tx.commit().await?;
            tracing::warn!(user_id, session_id = id, revoked, "Refresh token replayed");
            return Ok(Rotation::Replayed { user_id, revoked });
        }
        if is_revoked || !live {
            return Ok(Rotation::Rejected);
        }

        let next = NewSession {
            user_id,
            refresh_token_hash: next_hash.to_string(),
            expires_at,
        };
        let session = insert(&mut *tx, &next).await?;
        sqlx::query("UPDATE user_sessions SET is_revoked = true, replaced_by = $2 WHERE id = $1")
            .bind(id)
            .bind(session.id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        tracing::debug!(user_id, from = id, to = session.id, "Session rotated");
        Ok(Rotation::Rotated(session))
    }

    /// Revoke every live session of a user. Returns how many were revoked.
    pub async fn revoke_all_for_user(pool: &PgPool, user_id: DbId) -> Result<u64, sqlx::Error> {
        revoke_all(pool, user_id).await
    }
}

async fn insert<'e>(
    executor: impl PgExecutor<'e>,
    input: &NewSession,
) -> Result<RefreshSession, sqlx::Error> {
    let query = format!(
        "INSERT INTO user_sessions (user_id, refresh_token_hash, expires_at)
         VALUES ($1, $2, $3)
         RETURNING {COLUMNS}"
    );
    sqlx::query_as::<_, RefreshSession>(&query)
        .bind(input.user_id)
        .bind(&input.refresh_token_hash)
        .bind(input.expires_at)
        .fetch_one(executor)
        .await
}

async fn revoke_all<'e>(
    executor: impl PgExecutor<'e>,
    user_id: DbId,
) -> Result<u64, sqlx::Error> {
    let result = sqlx::query(
        "UPDATE user_sessions SET is_revoked = true WHERE user_id = $1 AND is_revoked = false",
    )
    .bind(user_id)
    .execute(executor)
    .await?;
    Ok(result.rows_affected())
}
