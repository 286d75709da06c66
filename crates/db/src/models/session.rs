//! Refresh sessions.
//!
//! Every refresh replaces the presented session with a new one and links the
//! two through `replaced_by`. A replaced session presented again means the
//! refresh token leaked, so the whole chain for that user is revoked.

use quorum_core::types::{DbId, Timestamp};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow)]
pub struct RefreshSession {
    pub id: DbId,
    pub user_id: DbId,
    /// SHA-256 of the refresh token; the token itself is never stored.
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub is_revoked: bool,
    pub replaced_by: Option<DbId>,
    pub created_at: Timestamp,
}

pub struct NewSession {
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
}

/// Result of presenting a refresh token for rotation.
#[derive(Debug)]
pub enum Rotation {
    /// The token was live; this is the session that replaced it.
    Rotated(RefreshSession),
    /// The token had already been rotated away. All of the user's sessions
    /// were revoked.
    Replayed { user_id: DbId, revoked: u64 },
    /// Unknown, expired, or logged-out token. Nothing was written.
    Rejected,
}
