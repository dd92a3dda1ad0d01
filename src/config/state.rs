// Application state management with singleton pattern

use std::sync::Arc;
use chrono::{DateTime, Utc};
use once_cell::sync::OnceCell;
use crate::config::environment::EnvironmentVariables;

// AppState singleton
#[derive(Debug, Clone)]
pub struct AppState {
    pub environment: Arc<EnvironmentVariables>,
    pub started_at: DateTime<Utc>,
    pub instance_id: Arc<str>,
}

impl AppState {
    /// Creates a state around an already loaded configuration
    pub fn new(environment: EnvironmentVariables) -> Self {
        Self {
            environment: Arc::new(environment),
            started_at: Utc::now(),
            instance_id: instance_identifier().into(),
        }
    }

    /// Returns the singleton instance built from the process environment
    pub fn instance() -> anyhow::Result<&'static Self> {
        static INSTANCE: OnceCell<AppState> = OnceCell::new();
        INSTANCE.get_or_try_init(|| {
            let environment: &'static EnvironmentVariables = EnvironmentVariables::instance()?;
            Ok::<AppState, anyhow::Error>(AppState::new(environment.clone()))
        })
    }

    /// Whole seconds elapsed since the state was created
    pub fn uptime_seconds(&self) -> i64 {
        (Utc::now() - self.started_at).num_seconds().max(0)
    }
}

/// Generate a unique identifier for this application instance
fn instance_identifier() -> String {
    // Try to get container ID first (for Docker environments)
    if let Ok(hostname) = std::env::var("HOSTNAME") {
        if hostname.len() > 8 && hostname.chars().all(|c: char| c.is_ascii_hexdigit() || c == '-') {
            let short: &str = &hostname[..hostname.len().min(12)];
            return format!("container_{}", short);
        }
        return format!("host_{}", hostname);
    }

    // Fallback to hostname
    if let Ok(hostname) = hostname::get() {
        if let Some(hostname_str) = hostname.to_str() {
            return format!("host_{}", hostname_str);
        }
    }

    // Last resort: process-unique ID
    format!("process_{}", std::process::id())
}
