//! HTTP-level tests for `POST /votes` and `GET /votes/{type}/{id}`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get_auth, post_json, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn vote(
    app: axum::Router,
    token: &str,
    content_type: &str,
    content_id: i64,
    value: i64,
) -> (StatusCode, serde_json::Value) {
    let body = json!({ "content_id": content_id, "content_type": content_type, "value": value });
    let response = post_json_auth(app, "/api/v1/votes", body, token).await;
    let status = response.status();
    (status, body_json(response).await)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn cast_retract_and_flip(pool: PgPool) {
    let (_, asker) = common::create_user_with_token(&pool, "asker").await;
    let (_, voter) = common::create_user_with_token(&pool, "voter").await;
    let app = common::build_test_app(pool);
    let qid = common::create_question(app.clone(), &asker, json!(["rust"])).await;

    let (status, json) = vote(app.clone(), &voter, "question", qid, 1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["vote_count"], 1);
    assert_eq!(json["data"]["user_vote"], 1);
    assert_eq!(json["data"]["transition"], "cast");

    let (_, json) = vote(app.clone(), &voter, "question", qid, -1).await;
    assert_eq!(json["data"]["vote_count"], -1);
    assert_eq!(json["data"]["user_vote"], -1);
    assert_eq!(json["data"]["transition"], "flip");

    let (_, json) = vote(app.clone(), &voter, "question", qid, -1).await;
    assert_eq!(json["data"]["vote_count"], 0);
    assert!(json["data"]["user_vote"].is_null());
    assert_eq!(json["data"]["transition"], "retract");

    let detail = body_json(common::get(app, &format!("/api/v1/questions/{qid}")).await).await;
    assert_eq!(detail["data"]["vote_count"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn answer_votes_and_my_vote_lookup(pool: PgPool) {
    let (_, asker) = common::create_user_with_token(&pool, "asker").await;
    let (_, voter) = common::create_user_with_token(&pool, "voter").await;
    let app = common::build_test_app(pool);
    let qid = common::create_question(app.clone(), &asker, json!(["rust"])).await;
    let aid = common::create_answer(app.clone(), &asker, qid).await;

    let uri = format!("/api/v1/votes/answer/{aid}");
    let before = body_json(get_auth(app.clone(), &uri, &voter).await).await;
    assert_eq!(before["data"]["user_vote"], 0);

    let (_, json) = vote(app.clone(), &voter, "answer", aid, 1).await;
    assert_eq!(json["data"]["content_type"], "answer");
    assert_eq!(json["data"]["vote_count"], 1);

    let after = body_json(get_auth(app.clone(), &uri, &voter).await).await;
    assert_eq!(after["data"]["user_vote"], 1);

    // Another voter sees their own (absent) vote.
    let other = body_json(get_auth(app, &uri, &asker).await).await;
    assert_eq!(other["data"]["user_vote"], 0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn invalid_votes_are_rejected(pool: PgPool) {
    let (_, token) = common::create_user_with_token(&pool, "voter").await;
    let app = common::build_test_app(pool);
    let qid = common::create_question(app.clone(), &token, json!(["rust"])).await;

    let (status, json) = vote(app.clone(), &token, "comment", qid, 1).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");

    let (status, _) = vote(app.clone(), &token, "question", qid, 2).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, _) = vote(app.clone(), &token, "question", qid, 0).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, json) = vote(app.clone(), &token, "answer", 55_555, 1).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], "Answer with id 55555 not found");

    let response = get_auth(app, "/api/v1/votes/comment/1", &token).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn voting_requires_login(pool: PgPool) {
    let app = common::build_test_app(pool);
    let body = json!({ "content_id": 1, "content_type": "question", "value": 1 });
    let response = post_json(app, "/api/v1/votes", body).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn rejected_write_rolls_back_and_reports_write_failed(pool: PgPool) {
    let (_, asker) = common::create_user_with_token(&pool, "asker").await;
    let (_, voter) = common::create_user_with_token(&pool, "voter").await;
    let app = common::build_test_app(pool.clone());
    let qid = common::create_question(app.clone(), &asker, json!(["rust"])).await;

    // The next upvote overflows the INTEGER counter.
    sqlx::query("UPDATE questions SET vote_count = 2147483647 WHERE id = $1")
        .bind(qid)
        .execute(&pool)
        .await
        .unwrap();

    let (status, json) = vote(app, &voter, "question", qid, 1).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "WRITE_FAILED");
    assert_eq!(json["error"], "The change could not be saved");

    let (vote_rows,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM votes")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(vote_rows, 0);

    let (vote_count,): (i32,) = sqlx::query_as("SELECT vote_count FROM questions WHERE id = $1")
        .bind(qid)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(vote_count, i32::MAX);
}
