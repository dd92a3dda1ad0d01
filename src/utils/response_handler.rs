// Unified response envelope for API routes
// Provides HandlerResponse for handlers and the middleware that wraps every API response

use axum::{
    body::Body,
    http::{
        header::CONTENT_TYPE, HeaderValue, Request, Response,
        response::Parts, StatusCode, Uri,
    },
    middleware::Next,
    response::IntoResponse,
    Json,
};
use chrono::Utc;
use tracing::{error, info};
use std::convert::Infallible;
use serde_json::{json, Value};
use serde::{Serialize, Deserialize};
use crate::utils::json::to_two_space_indented_json;

/// Standard JSON response format for all API endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct ResponseFormat {
    pub status: String,          // HTTP status text (e.g. "OK", "NOT_FOUND")
    pub code: u16,               // HTTP status code
    pub data: Value,             // Response payload
    pub messages: Vec<String>,   // Informational messages
    pub date: String,            // ISO timestamp
}

impl ResponseFormat {
    pub fn new(status_code: StatusCode, data: Value, messages: Vec<String>) -> Self {
        Self {
            status: status_label(status_code),
            code: status_code.as_u16(),
            data,
            messages,
            date: Utc::now().to_rfc3339(),
        }
    }
}

/// Convenience struct for building responses in handlers
#[derive(Debug, Clone)]
pub struct HandlerResponse {
    pub status_code: StatusCode,
    pub data: Value,
    pub messages: Vec<String>,
}

impl HandlerResponse {
    /// Creates a new response with specified status code
    pub fn new(status_code: StatusCode) -> Self {
        Self {
            status_code,
            data: Value::Null,
            messages: Vec::new(),
        }
    }

    /// Adds JSON data payload to the response
    pub fn data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }

    /// Adds an informational message to the response
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.messages.push(message.into());
        self
    }
}

impl IntoResponse for HandlerResponse {
    fn into_response(self) -> axum::response::Response {
        let mut response: Response<Body> = Json(json!({
            "data": self.data,
            "messages": self.messages
        })).into_response();

        *response.status_mut() = self.status_code;

        // Store HandlerResponse in extensions for middleware processing
        response.extensions_mut().insert(self);
        response
    }
}

/// "Not Found" -> "NOT_FOUND"
fn status_label(status: StatusCode) -> String {
    status
        .canonical_reason()
        .unwrap_or("UNKNOWN STATUS")
        .to_uppercase()
        .replace(' ', "_")
}

/// Logs the formatted response with proper JSON indentation
fn log_formatted_response(wrapped: &ResponseFormat) {
    match to_two_space_indented_json(wrapped) {
        Ok(spaced_json) => info!("\nFinal response:\n{}", spaced_json),
        Err(err) => error!("Failed to format response JSON: {:?}", err),
    }
}

/// Builds the final response with JSON content type
fn build_final_response(mut parts: Parts, wrapped: &ResponseFormat) -> Response<Body> {
    let json_body: Vec<u8> = serde_json::to_vec(wrapped).unwrap_or_else(|_| b"{}".to_vec());

    parts.headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    // Body length changed; let hyper recompute it
    parts.headers.remove(axum::http::header::CONTENT_LENGTH);

    Response::from_parts(parts, Body::from(json_body))
}

/// Middleware that wraps all API responses in the standard ResponseFormat structure
pub async fn response_wrapper(
    req: Request<Body>,
    next: Next,
) -> Result<Response<Body>, Infallible> {
    let response: Response<Body> = next.run(req).await;

    let (messages, data) = match response.extensions().get::<HandlerResponse>() {
        Some(r) => (r.messages.clone(), r.data.clone()),
        None => (Vec::new(), Value::Null),
    };
    let (parts, _) = response.into_parts();

    let wrapped: ResponseFormat = ResponseFormat::new(parts.status, data, messages);

    log_formatted_response(&wrapped);

    Ok(build_final_response(parts, &wrapped))
}

/// Fallback for unknown routes, rendered directly in the envelope format
pub async fn fallback_handler(uri: Uri) -> Response<Body> {
    let wrapped: ResponseFormat = ResponseFormat::new(
        StatusCode::NOT_FOUND,
        Value::Null,
        vec![format!("Route not found: {}", uri.path())],
    );

    (StatusCode::NOT_FOUND, Json(wrapped)).into_response()
}
