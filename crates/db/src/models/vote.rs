//! Vote models and the vote transaction result.

use quorum_core::types::{DbId, Timestamp};
use quorum_core::voting::{ContentType, VoteTransition, VoteValue};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `votes` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Vote {
    pub id: DbId,
    pub user_id: DbId,
    pub content_type: String,
    pub content_id: DbId,
    pub vote_value: i16,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of a committed vote transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct VoteResult {
    pub content_type: ContentType,
    pub content_id: DbId,
    /// Authoritative `vote_count` after the transaction.
    pub vote_count: i32,
    /// The caller's standing vote, `None` after a retraction.
    pub user_vote: Option<VoteValue>,
    pub transition: VoteTransition,
}
