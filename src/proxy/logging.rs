//! Request logging for the proxy function
//!
//! Provides structured logging with short correlation IDs. Nothing logged
//! here ever includes the upstream URL, since it carries the API key.

use std::time::Instant;
use tracing::{debug, error, info, warn, Span};
use uuid::Uuid;

use crate::error::ProxyError;

/// Logged when a request arrives while the API key is unusable
pub const MISSING_API_KEY_MESSAGE: &str = "GEMINI_API_KEY environment variable is not set or empty";

/// Context for tracking one invocation through the system
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Unique identifier for this invocation (for log correlation)
    pub trace_id: String,
    /// When the invocation started
    pub start_time: Instant,
    /// Model the request is forwarded to
    pub model: String,
}

impl RequestContext {
    /// Create a new request context
    pub fn new(model: &str) -> Self {
        Self {
            trace_id: Uuid::new_v4().to_string()[..8].to_string(), // Short ID for readability
            start_time: Instant::now(),
            model: model.to_string(),
        }
    }

    /// Get elapsed time in milliseconds
    pub fn elapsed_ms(&self) -> u128 {
        self.start_time.elapsed().as_millis()
    }

    /// Log request initiation
    pub fn log_request_start(&self, body_size: usize) {
        debug!(
            trace_id = %self.trace_id,
            model = %self.model,
            body_size = %body_size,
            "Forwarding request to Gemini"
        );
    }

    /// Log response received from upstream
    pub fn log_upstream_response(&self, status: u16) {
        debug!(
            trace_id = %self.trace_id,
            model = %self.model,
            status = %status,
            elapsed_ms = %self.elapsed_ms(),
            "Response received from Gemini"
        );
    }

    /// Log successful request completion
    pub fn log_request_complete(&self) {
        info!(
            trace_id = %self.trace_id,
            model = %self.model,
            elapsed_ms = %self.elapsed_ms(),
            "Request completed successfully"
        );
    }

    /// Log a failed invocation with the detail appropriate to its category
    pub fn log_failure(&self, err: &ProxyError) {
        match err {
            // Client protocol violations are not logged
            ProxyError::MethodNotAllowed => {}
            ProxyError::MissingApiKey => {
                error!(trace_id = %self.trace_id, "{}", MISSING_API_KEY_MESSAGE);
            }
            ProxyError::Upstream { status, details } => {
                warn!(
                    trace_id = %self.trace_id,
                    model = %self.model,
                    status = %status.as_u16(),
                    details = %details,
                    elapsed_ms = %self.elapsed_ms(),
                    "Gemini API returned an error"
                );
            }
            other => {
                error!(
                    trace_id = %self.trace_id,
                    model = %self.model,
                    kind = %other.kind(),
                    error = %other,
                    elapsed_ms = %self.elapsed_ms(),
                    "Proxy function failed"
                );
            }
        }
    }

    /// Create a tracing span for this invocation
    pub fn create_span(&self) -> Span {
        tracing::info_span!(
            "gemini_request",
            trace_id = %self.trace_id,
            model = %self.model,
        )
    }
}
