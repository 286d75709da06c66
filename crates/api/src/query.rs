//! Query parameter types shared by list endpoints.

use quorum_core::listing::{ProfileSort, QuestionSort};
use serde::Deserialize;

/// `?sort=&tag=&limit=&offset=` for question lists.
///
/// Values are clamped in the handler via `clamp_limit` / `clamp_offset`.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionListParams {
    #[serde(default)]
    pub sort: QuestionSort,
    pub tag: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// `?sort=&limit=&offset=` for the user directory.
#[derive(Debug, Default, Deserialize)]
pub struct ProfileListParams {
    #[serde(default)]
    pub sort: ProfileSort,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}
