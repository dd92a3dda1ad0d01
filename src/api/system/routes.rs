// System route definitions

use axum::{routing::get, Router};

use crate::config::state::AppState;
use super::handler;

/// Creates router with service status endpoints (mounted under the global prefix)
pub fn system_routes() -> Router<AppState> {
    Router::new()
        // GET and POST share the handler; POST bodies count against the size limit
        .route("/status", get(handler::status_handler).post(handler::status_handler))
}
