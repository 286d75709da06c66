//! Request extractors.
//!
//! - [`auth::AuthUser`] -- the authenticated caller from a Bearer token.

pub mod auth;
