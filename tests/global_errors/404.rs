//! tests/global_errors/404.rs
//! Ensures that unknown routes return HTTP 404 in the API envelope.

#[path = "../mod.rs"]
mod common;

use reqwest::StatusCode;
use serde_json::Value;

#[tokio::test]
async fn returns_404_for_nonexistent_route() {
    let base_url: String = common::spawn_app(common::test_env(Some("api")));

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
    assert_eq!(json["messages"][0], "Route not found: /does-not-exist");
}

#[tokio::test]
async fn returns_404_for_unknown_route_under_prefix() {
    let base_url: String = common::spawn_app(common::test_env(Some("api")));

    let resp: reqwest::Response = reqwest::Client::new()
        .get(format!("{}/api/does-not-exist", base_url))
        .send()
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "NOT_FOUND");
    assert_eq!(json["code"], 404);
}

#[tokio::test]
async fn unprefixed_health_is_404_when_prefix_is_set() {
    let base_url: String = common::spawn_app(common::test_env(Some("api")));

    let resp: reqwest::Response = reqwest::get(format!("{}/health", base_url))
        .await
        .expect("Failed to execute request.");

    assert_eq!(resp.status(), StatusCode::NOT_FOUND);
}
