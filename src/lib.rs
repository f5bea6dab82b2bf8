//! Gemini Proxy - credential-forwarding proxy for the Gemini API
//!
//! This library provides the proxy function and the HTTP surface around it.
//! Callers POST a `generateContent` payload; the server forwards it to Gemini
//! with an API key that never leaves the server.

pub mod config;
pub mod error;
pub mod proxy;
pub mod routes;

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::Result;

pub use crate::config::Config;
pub use crate::error::{ProxyError, ProxyResult};
pub use crate::proxy::{ContentGenerator, GeminiClient};

/// Application state shared across all request handlers
pub struct AppState {
    pub config: Config,
    pub start_time: Instant,
    /// Backend requests are forwarded to
    pub generator: Arc<dyn ContentGenerator>,
}

impl AppState {
    /// Create a new application state
    pub fn new(config: Config) -> Result<Self> {
        // Initialize HTTP client with connection pooling
        let http_client = reqwest::Client::builder()
            .pool_max_idle_per_host(100)
            .timeout(Duration::from_secs(config.upstream_timeout_seconds))
            .build()?;

        let generator: Arc<dyn ContentGenerator> =
            Arc::new(GeminiClient::new(http_client, &config));

        Ok(Self {
            config,
            start_time: Instant::now(),
            generator,
        })
    }

    /// Create a new application state with a substituted backend
    #[cfg(any(test, feature = "test-utils"))]
    pub fn new_for_testing(config: Config, generator: Arc<dyn ContentGenerator>) -> Self {
        Self {
            config,
            start_time: Instant::now(),
            generator,
        }
    }
}
