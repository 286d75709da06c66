//! Question, answer, tag, and username validation.
//!
//! Lives in `core` so the HTTP layer and any future tooling apply the same
//! rules before anything reaches the database.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Limits
// ---------------------------------------------------------------------------

pub const MIN_TITLE_LEN: usize = 15;
pub const MAX_TITLE_LEN: usize = 150;
pub const MIN_QUESTION_BODY_LEN: usize = 30;
pub const MAX_BODY_LEN: usize = 30_000;
pub const MAX_TAGS: usize = 5;
pub const MAX_TAG_LEN: usize = 35;
pub const MIN_USERNAME_LEN: usize = 3;
pub const MAX_USERNAME_LEN: usize = 32;

/// Lowercase tag names: alphanumeric start, then alphanumerics or `+ # . -`.
const TAG_PATTERN: &str = r"^[a-z0-9][a-z0-9+#.\-]*$";

static TAG_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(TAG_PATTERN).expect("valid regex"));

// ---------------------------------------------------------------------------
// Tags
// ---------------------------------------------------------------------------

/// Parse a comma-separated tag string as typed into the ask form.
///
/// `"Rust, async,,RUST "` becomes `["rust", "async"]`.
pub fn parse_tag_list(input: &str) -> Vec<String> {
    normalize_tag_iter(input.split(','))
}

/// Normalize a tag array: trim, lowercase, drop empties, dedupe keeping the
/// first occurrence.
pub fn normalize_tags(tags: &[String]) -> Vec<String> {
    normalize_tag_iter(tags.iter().map(String::as_str))
}

fn normalize_tag_iter<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for tag in raw {
        let tag = tag.trim().to_lowercase();
        if !tag.is_empty() && !out.contains(&tag) {
            out.push(tag);
        }
    }
    out
}

/// Validate an already-normalized tag set.
pub fn validate_tags(tags: &[String]) -> Result<(), CoreError> {
    if tags.is_empty() {
        return Err(CoreError::Validation(
            "At least one tag is required".into(),
        ));
    }
    if tags.len() > MAX_TAGS {
        return Err(CoreError::Validation(format!(
            "A maximum of {MAX_TAGS} tags is allowed"
        )));
    }
    for tag in tags {
        if tag.chars().count() > MAX_TAG_LEN {
            return Err(CoreError::Validation(format!(
                "Tag '{tag}' must be at most {MAX_TAG_LEN} characters"
            )));
        }
        if !TAG_RE.is_match(tag) {
            return Err(CoreError::Validation(format!(
                "Tag '{tag}' may only contain lowercase letters, digits, and + # . -"
            )));
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Questions and answers
// ---------------------------------------------------------------------------

pub fn validate_question_title(title: &str) -> Result<(), CoreError> {
    let len = title.trim().chars().count();
    if len == 0 {
        return Err(CoreError::Validation("Title must not be empty".into()));
    }
    if len < MIN_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at least {MIN_TITLE_LEN} characters"
        )));
    }
    if len > MAX_TITLE_LEN {
        return Err(CoreError::Validation(format!(
            "Title must be at most {MAX_TITLE_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_question_body(body: &str) -> Result<(), CoreError> {
    let len = body.trim().chars().count();
    if len < MIN_QUESTION_BODY_LEN {
        return Err(CoreError::Validation(format!(
            "Body must be at least {MIN_QUESTION_BODY_LEN} characters"
        )));
    }
    if len > MAX_BODY_LEN {
        return Err(CoreError::Validation(format!(
            "Body must be at most {MAX_BODY_LEN} characters"
        )));
    }
    Ok(())
}

pub fn validate_answer_body(body: &str) -> Result<(), CoreError> {
    let len = body.trim().chars().count();
    if len == 0 {
        return Err(CoreError::Validation("Answer body is required".into()));
    }
    if len > MAX_BODY_LEN {
        return Err(CoreError::Validation(format!(
            "Answer body must be at most {MAX_BODY_LEN} characters"
        )));
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Profiles
// ---------------------------------------------------------------------------

/// Usernames are 3-32 characters of ASCII alphanumerics, `_`, or `-`.
pub fn validate_username(username: &str) -> Result<(), CoreError> {
    let len = username.chars().count();
    if !(MIN_USERNAME_LEN..=MAX_USERNAME_LEN).contains(&len) {
        return Err(CoreError::Validation(format!(
            "Username must be between {MIN_USERNAME_LEN} and {MAX_USERNAME_LEN} characters"
        )));
    }
    if !username
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
    {
        return Err(CoreError::Validation(
            "Username may only contain letters, digits, '_' and '-'".into(),
        ));
    }
    Ok(())
}
