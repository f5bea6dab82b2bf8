//! Configuration management for the Gemini proxy
//!
//! Configuration is loaded from environment variables once at startup and
//! injected into the handlers through [`crate::AppState`].

use anyhow::{ensure, Context, Result};
use std::env;
use std::fmt;

/// Default upstream base URL (versioned path included)
pub const DEFAULT_GEMINI_API_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
/// Default model used in the upstream path
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-2.0-flash";
/// Default route the function is mounted on
pub const DEFAULT_FUNCTION_PATH: &str = "/.netlify/functions/gemini-proxy";

/// Application configuration
#[derive(Clone)]
pub struct Config {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,

    /// Route the proxy function is served on
    pub function_path: String,

    /// Gemini API base URL, including the version segment
    pub gemini_api_url: String,
    /// Gemini model identifier
    pub gemini_model: String,
    /// Gemini API key. Absence is reported per request, not at load time.
    pub gemini_api_key: Option<String>,

    /// Overall timeout for upstream requests (in seconds)
    pub upstream_timeout_seconds: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let function_path =
            var("FUNCTION_PATH").unwrap_or_else(|| DEFAULT_FUNCTION_PATH.to_string());
        ensure!(
            function_path.starts_with('/'),
            "Invalid FUNCTION_PATH: must start with '/'"
        );

        Ok(Self {
            host: var("PROXY_HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: var("PROXY_PORT")
                .unwrap_or_else(|| "8888".to_string())
                .parse()
                .context("Invalid PROXY_PORT")?,

            function_path,

            gemini_api_url: var("GEMINI_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_GEMINI_API_URL.to_string()),
            gemini_model: var("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
            gemini_api_key: var("GEMINI_API_KEY"),

            upstream_timeout_seconds: var("UPSTREAM_TIMEOUT_SECONDS")
                .unwrap_or_else(|| "300".to_string())
                .parse()
                .context("Invalid UPSTREAM_TIMEOUT_SECONDS")?,
        })
    }

    /// Configuration pointing at the given upstream, used by tests and embedders
    pub fn for_upstream(gemini_api_url: &str, gemini_api_key: Option<&str>) -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 0,
            function_path: DEFAULT_FUNCTION_PATH.to_string(),
            gemini_api_url: gemini_api_url.trim_end_matches('/').to_string(),
            gemini_model: DEFAULT_GEMINI_MODEL.to_string(),
            gemini_api_key: gemini_api_key.map(str::to_string),
            upstream_timeout_seconds: 300,
        }
    }

    /// The API key, treating an empty value as missing
    pub fn api_key(&self) -> Option<&str> {
        self.gemini_api_key
            .as_deref()
            .filter(|key| !key.is_empty())
    }

    /// Full `generateContent` endpoint, without the credential
    pub fn generate_content_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.gemini_api_url, self.gemini_model
        )
    }
}

// Hand-written so the key never ends up in a log line.
impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("function_path", &self.function_path)
            .field("gemini_api_url", &self.gemini_api_url)
            .field("gemini_model", &self.gemini_model)
            .field(
                "gemini_api_key",
                &self.gemini_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("upstream_timeout_seconds", &self.upstream_timeout_seconds)
            .finish()
    }
}
