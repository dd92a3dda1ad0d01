// Configuration: environment variables (bind address, route prefix, CORS, limits) and shared app state.

pub mod environment;
pub mod state;

pub use environment::{CorsOrigins, EnvironmentVariables};
pub use state::AppState;
