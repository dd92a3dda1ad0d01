//! tests/global_errors/408.rs
//! Ensures that requests taking longer than DEFAULT_TIMEOUT_SECONDS result in a 408 envelope.

#[path = "../mod.rs"]
mod common;

use axum::{routing::get, Router};
use reqwest::StatusCode;
use serde_json::Value;
use std::time::Duration;
use tokio::time::timeout;

use api_server::config::state::AppState;

async fn slow_handler() -> StatusCode {
    tokio::time::sleep(Duration::from_secs(3)).await;
    StatusCode::OK
}

#[tokio::test]
async fn returns_408_when_request_times_out() {
    let mut env = common::test_env(Some("api"));
    env.default_timeout_seconds = 1;
    let slow: Router<AppState> = Router::new().route("/slow", get(slow_handler));
    let base_url: String = common::spawn_app_with_routes(env, slow);

    let resp_result: Result<Result<reqwest::Response, reqwest::Error>, tokio::time::error::Elapsed> = timeout(
        Duration::from_secs(5), // client-side timeout duration
        reqwest::Client::new()
            .get(format!("{}/api/slow", base_url))
            .send(),
    )
    .await;

    assert!(resp_result.is_ok(), "Client timed out waiting for server.");
    let resp: reqwest::Response = resp_result.unwrap().expect("Request failed unexpectedly.");

    assert_eq!(resp.status(), StatusCode::REQUEST_TIMEOUT);

    let json: Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "REQUEST_TIMEOUT");
    assert_eq!(json["code"], 408);
}
