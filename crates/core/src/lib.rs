//! Domain logic for the Quorum Q&A forum.
//!
//! This crate performs no I/O. It owns the rules that the database and HTTP
//! layers apply: vote transitions, answer-acceptance plans, content and tag
//! validation, and listing parameters.

pub mod acceptance;
pub mod content;
pub mod error;
pub mod listing;
pub mod types;
pub mod voting;
