//! Vote transitions for questions and answers.
//!
//! A voter holds at most one standing vote per piece of content. Casting a
//! vote is resolved against the voter's existing vote:
//!
//! | existing | requested | transition | `vote_count` delta |
//! |----------|-----------|------------|--------------------|
//! | none     | `v`       | `Cast`     | `+v`               |
//! | `v`      | `v`       | `Retract`  | `-v`               |
//! | `-v`     | `v`       | `Flip`     | `+2v`              |
//!
//! The repository layer applies the resulting delta and vote-row change in a
//! single transaction; nothing here touches storage.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

pub const CONTENT_TYPE_QUESTION: &str = "question";
pub const CONTENT_TYPE_ANSWER: &str = "answer";

/// The two kinds of votable content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    Question,
    Answer,
}

impl ContentType {
    /// Discriminator stored in `votes.content_type`.
    pub fn as_str(self) -> &'static str {
        match self {
            ContentType::Question => CONTENT_TYPE_QUESTION,
            ContentType::Answer => CONTENT_TYPE_ANSWER,
        }
    }

    /// Table holding the content rows and their `vote_count` column.
    pub fn table(self) -> &'static str {
        match self {
            ContentType::Question => "questions",
            ContentType::Answer => "answers",
        }
    }

    /// Entity name used in not-found errors.
    pub fn entity_name(self) -> &'static str {
        match self {
            ContentType::Question => "Question",
            ContentType::Answer => "Answer",
        }
    }
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ContentType {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            CONTENT_TYPE_QUESTION => Ok(ContentType::Question),
            CONTENT_TYPE_ANSWER => Ok(ContentType::Answer),
            other => Err(CoreError::Validation(format!(
                "Invalid content type '{other}'. Expected 'question' or 'answer'"
            ))),
        }
    }
}

/// An upvote or a downvote. Serialized as the integer `1` or `-1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "i16", into = "i16")]
pub enum VoteValue {
    Up,
    Down,
}

impl VoteValue {
    /// Signed value stored in `votes.vote_value`.
    pub fn value(self) -> i16 {
        match self {
            VoteValue::Up => 1,
            VoteValue::Down => -1,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            VoteValue::Up => VoteValue::Down,
            VoteValue::Down => VoteValue::Up,
        }
    }
}

impl TryFrom<i16> for VoteValue {
    type Error = CoreError;

    fn try_from(value: i16) -> Result<Self, Self::Error> {
        match value {
            1 => Ok(VoteValue::Up),
            -1 => Ok(VoteValue::Down),
            other => Err(CoreError::Validation(format!(
                "Vote value must be 1 or -1, got {other}"
            ))),
        }
    }
}

impl From<VoteValue> for i16 {
    fn from(value: VoteValue) -> Self {
        value.value()
    }
}

/// How a requested vote changed the voter's standing vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VoteTransition {
    /// No prior vote; a new vote row is inserted.
    Cast,
    /// Same value requested again; the vote row is deleted.
    Retract,
    /// Opposite value requested; the vote row is updated in place.
    Flip,
}

/// Result of resolving a requested vote against the existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoteOutcome {
    pub transition: VoteTransition,
    /// Amount to add to the content's `vote_count`.
    pub delta: i32,
    /// The voter's vote after the transition, `None` when retracted.
    pub standing: Option<VoteValue>,
}

/// Resolve `requested` against the voter's `existing` vote.
pub fn resolve_vote(existing: Option<VoteValue>, requested: VoteValue) -> VoteOutcome {
    let v = i32::from(requested.value());
    match existing {
        None => VoteOutcome {
            transition: VoteTransition::Cast,
            delta: v,
            standing: Some(requested),
        },
        Some(prev) if prev == requested => VoteOutcome {
            transition: VoteTransition::Retract,
            delta: -v,
            standing: None,
        },
        Some(_) => VoteOutcome {
            transition: VoteTransition::Flip,
            delta: 2 * v,
            standing: Some(requested),
        },
    }
}
