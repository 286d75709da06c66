//! Fixture builders shared by the repository integration tests.

#![allow(dead_code)]

use quorum_core::types::DbId;
use quorum_db::models::answer::{Answer, CreateAnswer};
use quorum_db::models::question::{CreateQuestion, Question};
use quorum_db::models::user::{CreateUser, User};
use quorum_db::repositories::{AnswerRepo, QuestionRepo, UserRepo};
use sqlx::PgPool;

pub async fn create_user(pool: &PgPool, username: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@test.com"),
        password_hash: "not-a-real-hash".to_string(),
    };
    UserRepo::create(pool, &input)
        .await
        .expect("user creation should succeed")
}

pub async fn create_question(pool: &PgPool, user_id: DbId, tags: &[&str]) -> Question {
    let input = CreateQuestion {
        user_id,
        title: "How do I share state between axum handlers?".to_string(),
        body: "I have a connection pool and need it inside every handler.".to_string(),
        tags: tags.iter().map(|t| t.to_string()).collect(),
    };
    QuestionRepo::create(pool, &input)
        .await
        .expect("question creation should succeed")
}

pub async fn create_answer(pool: &PgPool, question_id: DbId, user_id: DbId) -> Answer {
    let input = CreateAnswer {
        question_id,
        user_id,
        body: "Put it in a State extractor.".to_string(),
    };
    AnswerRepo::create(pool, &input)
        .await
        .expect("answer creation should succeed")
        .expect("question should exist")
}
