pub mod answers;
pub mod auth;
pub mod questions;
pub mod tags;
pub mod users;
pub mod votes;
