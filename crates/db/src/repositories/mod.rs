//! Repository structs, one per table.
//!
//! Repositories take a `&PgPool` and return `Result<_, sqlx::Error>`.
//! Multi-statement operations open their own transaction.

pub mod answer_repo;
pub mod question_repo;
pub mod session_repo;
pub mod user_repo;
pub mod vote_repo;

pub use answer_repo::AnswerRepo;
pub use question_repo::QuestionRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
pub use vote_repo::VoteRepo;
