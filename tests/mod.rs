//! tests/mod.rs
//! A shared test helper to spawn the app on an ephemeral port.

#![allow(dead_code)]

use std::borrow::Cow;

use api_server::config::{environment::EnvironmentVariables, state::AppState};
use api_server::api::system::system_routes;
use api_server::core::server::build_router;

use axum::{Router, serve};
use tokio::net::TcpListener as TokioTcpListener;

/// Configuration used by most tests: defaults, with the prefix set as given.
pub fn test_env(global_prefix: Option<&str>) -> EnvironmentVariables {
    EnvironmentVariables {
        environment: Cow::Borrowed("test"),
        global_prefix: global_prefix.map(str::to_owned),
        ..EnvironmentVariables::default()
    }
}

/// Spawns the app on a random unused port and returns its base URL.
pub fn spawn_app(env: EnvironmentVariables) -> String {
    spawn_app_with_routes(env, Router::new())
}

/// Same as `spawn_app`, with extra test-only routes mounted next to the real API routes.
pub fn spawn_app_with_routes(env: EnvironmentVariables, extra: Router<AppState>) -> String {
    // * Build the application through the same stack as main() does.
    let app: Router = build_router(AppState::new(env), system_routes().merge(extra));

    // * Bind an ephemeral port using std::net::TcpListener.
    let std_listener: std::net::TcpListener = std::net::TcpListener::bind("127.0.0.1:0")
        .expect("Failed to bind random port");
    std_listener.set_nonblocking(true).unwrap();

    // * Convert std::net::TcpListener to tokio::net::TcpListener.
    let tokio_listener: TokioTcpListener = TokioTcpListener::from_std(std_listener)
        .expect("Failed to convert to tokio listener");

    let addr: std::net::SocketAddr = tokio_listener.local_addr().unwrap();

    // * Spawn the server in a background task.
    tokio::spawn(async move {
        serve(tokio_listener, app)
            .await
            .expect("Server failed");
    });

    // * Return the base URL, e.g. "http://127.0.0.1:12345".
    format!("http://{}", addr)
}
