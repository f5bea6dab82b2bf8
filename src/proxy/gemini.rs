//! Gemini API client
//!
//! Forwards `generateContent` payloads to the Gemini API with the API key
//! passed as the `key` query parameter.

use async_trait::async_trait;
use axum::http::StatusCode;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

use crate::{
    config::Config,
    error::{ProxyError, ProxyResult},
    proxy::ContentGenerator,
};

/// Gemini `generateContent` client
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
}

impl GeminiClient {
    /// Create a new Gemini client
    pub fn new(client: reqwest::Client, config: &Config) -> Self {
        Self {
            client,
            endpoint: config.generate_content_url(),
            model: config.gemini_model.clone(),
        }
    }

    /// Endpoint requests are posted to, without the credential
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Build default headers for Gemini requests
    fn default_headers() -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers
    }
}

#[async_trait]
impl ContentGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        "gemini"
    }

    fn model(&self) -> &str {
        &self.model
    }

    async fn generate_content(&self, api_key: &str, payload: &Value) -> ProxyResult<Value> {
        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .headers(Self::default_headers())
            .json(payload)
            .send()
            .await
            .map_err(ProxyError::transport)?;

        let status = StatusCode::from_u16(response.status().as_u16())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        let body = response.bytes().await.map_err(ProxyError::transport)?;

        let json: Value =
            serde_json::from_slice(&body).map_err(ProxyError::InvalidUpstreamBody)?;

        if !status.is_success() {
            return Err(ProxyError::Upstream {
                status,
                details: json,
            });
        }

        Ok(json)
    }
}
