//! Error types for the Gemini proxy
//!
//! Every step of the proxy function returns its own variant so the origin of
//! a failure stays visible to callers in Rust, even though several variants
//! collapse to the same HTTP response.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Proxy function errors
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    #[error("Server configuration error: Gemini API Key is missing.")]
    MissingApiKey,

    #[error("Failed to read request body: {0}")]
    BodyRead(String),

    #[error("{0}")]
    InvalidRequestBody(#[source] serde_json::Error),

    #[error("Gemini API responded with status {}", .status.as_u16())]
    Upstream { status: StatusCode, details: Value },

    /// The URL is stripped before construction, it carries the API key
    #[error("{0}")]
    Transport(#[source] reqwest::Error),

    #[error("Invalid JSON from Gemini API: {0}")]
    InvalidUpstreamBody(#[source] serde_json::Error),
}

impl ProxyError {
    /// Wrap a reqwest error, dropping the request URL from its message
    pub fn transport(err: reqwest::Error) -> Self {
        ProxyError::Transport(err.without_url())
    }

    /// Short label used for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            ProxyError::MethodNotAllowed => "method_not_allowed",
            ProxyError::MissingApiKey => "missing_api_key",
            ProxyError::BodyRead(_) => "body_read",
            ProxyError::InvalidRequestBody(_) => "invalid_request_body",
            ProxyError::Upstream { .. } => "upstream",
            ProxyError::Transport(_) => "transport",
            ProxyError::InvalidUpstreamBody(_) => "invalid_upstream_body",
        }
    }
}

/// Error envelope for configuration failures and upstream rejections
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        match self {
            ProxyError::MethodNotAllowed => (
                StatusCode::METHOD_NOT_ALLOWED,
                [(header::ALLOW, "POST")],
                "Method Not Allowed",
            )
                .into_response(),
            ProxyError::MissingApiKey => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: self.to_string(),
                    details: None,
                }),
            )
                .into_response(),
            ProxyError::Upstream { status, ref details } => (
                status,
                Json(ErrorResponse {
                    error: self.to_string(),
                    details: Some(details.clone()),
                }),
            )
                .into_response(),
            ProxyError::BodyRead(_)
            | ProxyError::InvalidRequestBody(_)
            | ProxyError::Transport(_)
            | ProxyError::InvalidUpstreamBody(_) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse {
                    error: "Internal Server Error".to_string(),
                    details: Some(Value::String(self.to_string())),
                }),
            )
                .into_response(),
        }
    }
}

/// Result type alias for convenience
pub type ProxyResult<T> = Result<T, ProxyError>;
