//! Sorting and pagination parameters for list endpoints.

use serde::Deserialize;

/// Default number of questions per page.
pub const DEFAULT_QUESTION_LIMIT: i64 = 20;

/// Maximum number of questions per page.
pub const MAX_QUESTION_LIMIT: i64 = 100;

/// Default number of profiles per page.
pub const DEFAULT_PROFILE_LIMIT: i64 = 20;

/// Maximum number of profiles per page.
pub const MAX_PROFILE_LIMIT: i64 = 100;

/// Ordering for question lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QuestionSort {
    /// Most recently asked first.
    #[default]
    Newest,
    /// Highest `vote_count` first.
    Votes,
    /// Only questions with no answers, newest first.
    Unanswered,
}

/// Ordering for profile lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileSort {
    #[default]
    Reputation,
    Newest,
}

/// Clamp a user-provided limit to `[1, max]`, using `default` when absent.
pub fn clamp_limit(limit: Option<i64>, default: i64, max: i64) -> i64 {
    limit.unwrap_or(default).max(1).min(max)
}

/// Clamp a user-provided offset to non-negative.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
