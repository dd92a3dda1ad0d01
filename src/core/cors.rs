// Cross-origin policy applied to every route, health check included

use axum::http::{HeaderValue, Method};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

use crate::config::environment::CorsOrigins;

/// Methods allowed on cross-origin requests
const ALLOWED_METHODS: [Method; 6] = [
    Method::GET,
    Method::HEAD,
    Method::PUT,
    Method::PATCH,
    Method::POST,
    Method::DELETE,
];

/// Builds the CORS layer: `*` for any origin, otherwise only the configured list is echoed.
/// Preflight requests are answered with 200 (tower-http), not the 204 NestJS's
/// `enableCors()` sends by default; browsers accept either.
pub fn cors_layer(origins: &CorsOrigins) -> CorsLayer {
    let layer: CorsLayer = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers(Any);

    match origins {
        CorsOrigins::Any => layer.allow_origin(Any),
        CorsOrigins::List(list) => {
            let allowed: Vec<HeaderValue> = list
                .iter()
                .filter_map(|origin| match origin.parse::<HeaderValue>() {
                    Ok(value) => Some(value),
                    Err(err) => {
                        warn!("Skipping invalid CORS origin '{}': {}", origin, err);
                        None
                    }
                })
                .collect();

            layer.allow_origin(AllowOrigin::list(allowed))
        }
    }
}
