// Health check route definition

use axum::{routing::get, Router};

use crate::config::environment::EnvironmentVariables;
use super::handler;

/// `/health`, or `/{prefix}/health` when a global prefix is configured
pub fn health_routes(env: &EnvironmentVariables) -> Router {
    Router::new().route(&env.prefixed("/health"), get(handler::health_handler))
}
