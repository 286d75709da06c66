//! Answer acceptance planning.
//!
//! A question has at most one accepted answer, and `accepted_answer_id`
//! always names it. Accepting an answer that is already accepted toggles it
//! off; accepting a different one moves the flag.

use crate::error::CoreError;
use crate::types::DbId;

/// The flag changes required to accept (or un-accept) an answer.
///
/// Writes must be applied in field order: `unaccept` before `accept`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AcceptancePlan {
    /// Answer whose `is_accepted` flag must be cleared.
    pub unaccept: Option<DbId>,
    /// Answer whose `is_accepted` flag must be set.
    pub accept: Option<DbId>,
}

impl AcceptancePlan {
    /// Value of the question's `accepted_answer_id` once the plan is applied.
    pub fn accepted_after(&self) -> Option<DbId> {
        self.accept
    }
}

/// Plan the acceptance of `target` given the currently accepted answer.
pub fn plan_acceptance(current: Option<DbId>, target: DbId) -> AcceptancePlan {
    match current {
        Some(id) if id == target => AcceptancePlan {
            unaccept: Some(target),
            accept: None,
        },
        other => AcceptancePlan {
            unaccept: other,
            accept: Some(target),
        },
    }
}

/// Only the author of a question may accept answers to it.
pub fn ensure_question_owner(owner_id: DbId, caller_id: DbId) -> Result<(), CoreError> {
    if owner_id != caller_id {
        return Err(CoreError::Forbidden(
            "Only the question owner can accept an answer".into(),
        ));
    }
    Ok(())
}
