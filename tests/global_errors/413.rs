//! tests/global_errors/413.rs
//! Ensures that a payload above MAX_REQUEST_BODY_SIZE triggers 413.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_413_when_payload_exceeds_global_limit() {
    let mut env = common::test_env(Some("api"));
    env.max_request_body_size = 1024;
    let base_url: String = common::spawn_app(env);

    let oversized_payload: Vec<u8> = vec![b'X'; 1024 + 100];

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/status", base_url))
        .body(oversized_payload)
        .send()
        .await
        .expect("Failed to send large request.");

    assert_eq!(resp.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "PAYLOAD_TOO_LARGE");
    assert_eq!(json["code"], 413);
}

#[tokio::test]
async fn accepts_payload_within_limit() {
    let mut env = common::test_env(Some("api"));
    env.max_request_body_size = 1024;
    let base_url: String = common::spawn_app(env);

    let resp: reqwest::Response = reqwest::Client::new()
        .post(format!("{}/api/status", base_url))
        .body(vec![b'X'; 512])
        .send()
        .await
        .expect("Failed to send request.");

    assert_eq!(resp.status(), StatusCode::OK);
}
