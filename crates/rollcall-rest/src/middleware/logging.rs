//! Request logging middleware.

use crate::responses::error_response;
use axum::{
    body::Body,
    http::{header::CONTENT_LENGTH, Request},
    middleware::Next,
    response::Response,
};
use rollcall_core::ErrorResponse;
use std::time::Instant;
use tracing::{info, warn};

/// Header carrying the per-request id.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Request logging middleware.
///
/// Emits one event per request. Server errors are logged at warn level.
/// Error bodies are stamped with the request id as their `trace_id`.
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let start = Instant::now();

    let mut response = next.run(request).await;

    let duration = start.elapsed();
    let status = response.status();
    let request_id_field = request_id.as_deref().unwrap_or("-");

    if status.is_server_error() {
        warn!(
            target: "http",
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            request_id = %request_id_field,
            "HTTP request completed"
        );
    } else {
        info!(
            target: "http",
            method = %method,
            uri = %uri,
            status = %status.as_u16(),
            duration_ms = %duration.as_millis(),
            request_id = %request_id_field,
            "HTTP request completed"
        );
    }

    if let Some(request_id) = request_id {
        response = attach_trace_id(response, request_id);
    }
    response
}

/// Re-renders an error body with the given trace id. Other responses pass
/// through untouched.
fn attach_trace_id(response: Response, trace_id: String) -> Response {
    let Some(body) = response.extensions().get::<ErrorResponse>().cloned() else {
        return response;
    };

    let mut stamped = error_response(response.status(), body.with_trace_id(trace_id));
    for (name, value) in response.headers() {
        if name != CONTENT_LENGTH && !stamped.headers().contains_key(name) {
            stamped.headers_mut().insert(name.clone(), value.clone());
        }
    }
    stamped
}
