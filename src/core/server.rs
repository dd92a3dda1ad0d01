// Application server configuration and setup

use std::{sync::Arc, time::Duration};
use axum::{
    Router,
    middleware::from_fn,
    extract::DefaultBodyLimit,
    error_handling::HandleErrorLayer,
};
use tower::{ServiceBuilder, timeout::TimeoutLayer};
use tower_http::trace::TraceLayer;
use tokio::{signal, net::TcpListener};
use listenfd::ListenFd;
use anyhow::{Context, Result};

use crate::api::{health::health_routes, system::system_routes};
use crate::config::{environment::EnvironmentVariables, state::AppState};
use crate::core::cors::cors_layer;
use crate::utils::{
    error_handler::handle_global_error,
    response_handler::{fallback_handler, response_wrapper},
};

/// Creates and configures the application router with all middleware layers
pub fn create_app(state: AppState) -> Router {
    let api_routes: Router<AppState> = Router::new()
        .merge(system_routes());
        // Add new routes here

    build_router(state, api_routes)
}

/// Mounts `api_routes` under the global prefix with the envelope, timeout and
/// body limit, next to the health check, fallback, tracing and CORS
pub fn build_router(state: AppState, api_routes: Router<AppState>) -> Router {
    let env: Arc<EnvironmentVariables> = state.environment.clone();

    let api: Router = api_routes
        .layer(
            ServiceBuilder::new()
                .layer(from_fn(response_wrapper))
                .layer(HandleErrorLayer::new(handle_global_error))
                .layer(TimeoutLayer::new(Duration::from_secs(env.default_timeout_seconds)))
                .layer(DefaultBodyLimit::max(env.max_request_body_size))
        )
        .with_state(state);

    let router: Router = match env.global_prefix.as_deref() {
        Some(prefix) => Router::new().nest(&format!("/{prefix}"), api),
        None => api,
    };

    // Health check sits outside the envelope, only CORS and tracing apply
    router
        .merge(health_routes(&env))
        .fallback(fallback_handler)
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(&env.cors_origins))
}

/// Sets up the TCP listener from environment or binds to new address
pub async fn setup_listener(env: &EnvironmentVariables) -> Result<TcpListener> {
    let mut listenfd: ListenFd = ListenFd::from_env();

    let listener: TcpListener = match listenfd.take_tcp_listener(0)? {
        Some(std_listener) => {
            std_listener.set_nonblocking(true)?;
            TcpListener::from_std(std_listener)?
        }
        None => {
            let addr: String = env.bind_address();
            TcpListener::bind(&addr)
                .await
                .with_context(|| format!("Failed to bind {addr}"))?
        }
    };

    Ok(listener)
}

/// Handles graceful shutdown signals (Ctrl+C and TERM)
pub async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(err) = signal::ctrl_c().await {
            tracing::error!("Failed to listen for Ctrl+C: {}", err);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(err) => {
                tracing::error!("Failed to install TERM handler: {}", err);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Shutting down via Ctrl+C"),
        _ = terminate => tracing::info!("Shutting down via TERM signal"),
    }
}
