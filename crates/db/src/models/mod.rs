//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` + `Serialize` entity struct matching the database row
//! - A create DTO for inserts
//! - Result types for multi-statement transactions where relevant

pub mod answer;
pub mod question;
pub mod session;
pub mod user;
pub mod vote;
