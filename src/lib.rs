// Library root for the API server: health check, CORS and router bootstrap

pub mod api;
pub mod config;
pub mod core;
pub mod utils;

pub use crate::config::environment::EnvironmentVariables;
pub use crate::config::state::AppState;
pub use crate::core::server::{build_router, create_app, setup_listener, shutdown_signal};
