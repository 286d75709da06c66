//! HTTP-level tests for `POST /questions/{id}/accept`.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, post_json_auth};
use serde_json::json;
use sqlx::PgPool;

async fn accept(
    app: axum::Router,
    token: &str,
    question_id: i64,
    answer_id: i64,
) -> (StatusCode, serde_json::Value) {
    let uri = format!("/api/v1/questions/{question_id}/accept");
    let response = post_json_auth(app, &uri, json!({ "answer_id": answer_id }), token).await;
    let status = response.status();
    (status, body_json(response).await)
}

/// `(accepted_answer_id, ids of answers flagged is_accepted)` as seen through the API.
async fn visible_state(app: axum::Router, question_id: i64) -> (serde_json::Value, Vec<i64>) {
    let json = body_json(get(app, &format!("/api/v1/questions/{question_id}")).await).await;
    let flagged = json["data"]["answers"]
        .as_array()
        .unwrap()
        .iter()
        .filter(|a| a["is_accepted"] == true)
        .map(|a| a["id"].as_i64().unwrap())
        .collect();
    (json["data"]["accepted_answer_id"].clone(), flagged)
}

#[sqlx::test(migrations = "../db/migrations")]
async fn accept_switch_then_toggle_off(pool: PgPool) {
    let (_, owner) = common::create_user_with_token(&pool, "owner").await;
    let (_, helper) = common::create_user_with_token(&pool, "helper").await;
    let app = common::build_test_app(pool);

    let qid = common::create_question(app.clone(), &owner, json!(["rust"])).await;
    let a1 = common::create_answer(app.clone(), &helper, qid).await;
    let a2 = common::create_answer(app.clone(), &helper, qid).await;

    let (status, json) = accept(app.clone(), &owner, qid, a1).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["data"]["accepted_answer_id"], a1);
    assert_eq!(visible_state(app.clone(), qid).await, (json!(a1), vec![a1]));

    let (_, json) = accept(app.clone(), &owner, qid, a2).await;
    assert_eq!(json["data"]["accepted_answer_id"], a2);
    assert_eq!(json["data"]["unaccepted_answer_id"], a1);
    assert_eq!(visible_state(app.clone(), qid).await, (json!(a2), vec![a2]));

    let (_, json) = accept(app.clone(), &owner, qid, a2).await;
    assert!(json["data"]["accepted_answer_id"].is_null());
    assert_eq!(visible_state(app, qid).await, (json!(null), vec![]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn non_owner_is_forbidden_and_nothing_changes(pool: PgPool) {
    let (_, owner) = common::create_user_with_token(&pool, "owner").await;
    let (_, intruder) = common::create_user_with_token(&pool, "intruder").await;
    let app = common::build_test_app(pool);

    let qid = common::create_question(app.clone(), &owner, json!(["rust"])).await;
    let a1 = common::create_answer(app.clone(), &intruder, qid).await;
    let a2 = common::create_answer(app.clone(), &intruder, qid).await;
    accept(app.clone(), &owner, qid, a1).await;

    let (status, json) = accept(app.clone(), &intruder, qid, a2).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(json["code"], "FORBIDDEN");
    assert_eq!(visible_state(app, qid).await, (json!(a1), vec![a1]));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn answer_must_belong_to_the_question(pool: PgPool) {
    let (_, owner) = common::create_user_with_token(&pool, "owner").await;
    let app = common::build_test_app(pool);

    let q1 = common::create_question(app.clone(), &owner, json!(["rust"])).await;
    let q2 = common::create_question(app.clone(), &owner, json!(["go"])).await;
    let foreign = common::create_answer(app.clone(), &owner, q2).await;

    let (status, json) = accept(app.clone(), &owner, q1, foreign).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["error"], format!("Answer with id {foreign} not found"));

    let (status, _) = accept(app, &owner, 999_999, foreign).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
