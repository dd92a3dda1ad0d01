// System status handler

use serde_json::json;
use axum::{http::StatusCode, extract::State, body::Bytes};
use tracing::{instrument, info};

use crate::config::state::AppState;
use crate::utils::response_handler::HandlerResponse;

/// Returns version, environment and instance information
#[instrument(skip(state, _body))]
pub async fn status_handler(
    State(state): State<AppState>,
    _body: Bytes, // Buffered under DefaultBodyLimit
) -> HandlerResponse {
    info!("Status endpoint called");

    HandlerResponse::new(StatusCode::OK)
        .data(json!({
            "version": env!("CARGO_PKG_VERSION"),
            "environment": state.environment.environment.as_ref(),
            "instance": state.instance_id.as_ref(),
            "started_at": state.started_at.to_rfc3339(),
            "uptime_seconds": state.uptime_seconds(),
        }))
        .message("API is running successfully")
}
