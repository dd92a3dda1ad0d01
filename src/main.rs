// Start of file: src/main.rs

use axum::{Router, serve};
use tokio::net::TcpListener;
use tracing::info;

use api_server::config::state::AppState;
use api_server::core::{logging, server};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_tracing();

    // Malformed configuration aborts start-up with the offending variable named
    let state: &'static AppState = AppState::instance()?;

    let app: Router = server::create_app(state.clone());
    let listener: TcpListener = server::setup_listener(&state.environment).await?;

    info!(
        "Server listening on: {} (health check at {})",
        listener.local_addr()?,
        state.environment.prefixed("/health")
    );

    serve(listener, app)
        .with_graceful_shutdown(server::shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

// End of file: src/main.rs
