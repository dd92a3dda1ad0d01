// Health check handler polled by the load balancer

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Body returned by the health check: `{"status":"ok"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
}

impl HealthStatus {
    pub fn ok() -> Self {
        Self { status: "ok".to_owned() }
    }
}

/// Always answers 200; the process being able to respond is the whole check
#[instrument]
pub async fn health_handler() -> (StatusCode, Json<HealthStatus>) {
    debug!("Health check endpoint accessed");
    (StatusCode::OK, Json(HealthStatus::ok()))
}
