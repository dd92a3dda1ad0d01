// Global error handling for HTTP middleware layers

use axum::{
    BoxError,
    http::StatusCode,
};
use std::error::Error;
// tower's error type for timeouts
use tower::timeout::error::Elapsed;
use tracing::warn;

/// Maps layer errors to status codes; the response wrapper turns them into the envelope
pub async fn handle_global_error(err: BoxError) -> StatusCode {
    let status: StatusCode = status_for_error(&*err);
    warn!(%status, "Request failed in middleware: {}", err);
    status
}

/// Picks the status code for an error raised by a middleware layer.
/// Oversized bodies never reach here: under `DefaultBodyLimit` the `Bytes`
/// extractor rejects them with its own 413 response.
pub fn status_for_error(err: &(dyn Error + 'static)) -> StatusCode {
    // 408 if the request took too long
    if err.is::<Elapsed>() || find_cause::<Elapsed>(err).is_some() {
        return StatusCode::REQUEST_TIMEOUT;
    }

    StatusCode::INTERNAL_SERVER_ERROR
}

/// Helper function to find specific error type in error chain
pub fn find_cause<T: Error + 'static>(err: &dyn Error) -> Option<&T> {
    let mut source: Option<&dyn Error> = err.source();

    while let Some(s) = source {
        if let Some(typed) = s.downcast_ref::<T>() {
            return Some(typed);
        }
        source = s.source();
    }

    None
}
