use std::net::SocketAddr;
use std::time::Instant;

use axum::{
    body::Body,
    extract::{ConnectInfo, Request},
    http::HeaderValue,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

pub const X_REQUEST_ID: &str = "x-request-id";

const MAX_LOGGED_BODY_CHARS: usize = 1000;

/// Request ID wrapper type for extension
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

/// Logs every request: id, method, path, status, latency in milliseconds,
/// client address, and the request body truncated to 1000 characters.
/// Handler failures surface as 5xx responses and are logged at error level
/// with the same fields.
///
/// The body is buffered once here and handed back to the router untouched.
pub async fn request_log_middleware(
    addr: Option<ConnectInfo<SocketAddr>>,
    request: Request,
    next: Next,
) -> Response {
    let start_time = Instant::now();
    let request_id = Uuid::new_v4().to_string();

    let method = request.method().clone();
    let path = request.uri().path().to_string();
    let client = addr
        .map(|ConnectInfo(a)| a.to_string())
        .unwrap_or_else(|| "unknown".to_string());

    let (mut parts, body) = request.into_parts();
    let body_bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .unwrap_or_default();
    let body_text = truncate_chars(&String::from_utf8_lossy(&body_bytes), MAX_LOGGED_BODY_CHARS);

    parts.extensions.insert(RequestId(request_id.clone()));
    let request = Request::from_parts(parts, Body::from(body_bytes));

    let mut response = next.run(request).await;

    let latency_ms = start_time.elapsed().as_millis();
    let status = response.status();

    if status.is_server_error() {
        tracing::error!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            client = %client,
            body = %body_text,
            "request failed"
        );
    } else {
        tracing::info!(
            request_id = %request_id,
            method = %method,
            path = %path,
            status = status.as_u16(),
            latency_ms,
            client = %client,
            body = %body_text,
            "request handled"
        );
    }

    if let Ok(header_value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(X_REQUEST_ID, header_value);
    }

    response
}

/// Cut at a character boundary, never mid-codepoint.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...(truncated)", &text[..idx]),
        None => text.to_string(),
    }
}
