//! Content generation backend abstraction
//!
//! The proxy function talks to the upstream through this trait so the
//! backend can be substituted in tests or by other hosts.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::ProxyResult;

/// Trait defining the interface for a `generateContent` backend
///
/// # Security
///
/// Implementations MUST:
/// - Take the API key from server-side configuration only
/// - Never include the API key in returned errors or log output
#[async_trait]
pub trait ContentGenerator: Send + Sync {
    /// Get the backend name for logging and metrics
    fn name(&self) -> &'static str;

    /// Model identifier requests are sent to
    fn model(&self) -> &str;

    /// Forward a `generateContent` payload using the given API key
    ///
    /// Returns the upstream JSON body on success. A non-success upstream
    /// status is reported as [`crate::error::ProxyError::Upstream`] carrying
    /// the upstream's JSON error body.
    async fn generate_content(&self, api_key: &str, payload: &Value) -> ProxyResult<Value>;
}
