use crate::types::DbId;

/// Domain-level error shared by the repository and HTTP layers.
///
/// `Unauthorized` means no identity was presented (authentication required);
/// `Forbidden` means the identity lacks rights for the operation.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    /// The store rejected a write and rolled it back.
    #[error("Write failed: {0}")]
    WriteFailed(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
