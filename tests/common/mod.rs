//! Common test utilities for the Gemini proxy
//!
//! This module provides shared fixtures and helpers for driving the real
//! router against a mocked upstream or a stubbed backend.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::Value;

use gemini_proxy::{
    routes::create_router, AppState, Config, ContentGenerator, ProxyResult,
};

/// Test configuration constants
pub mod constants {
    /// API key configured on the server side in tests
    pub const TEST_API_KEY: &str = "test-gemini-api-key-5f2c9d";
    /// Route the proxy function is mounted on
    pub const FUNCTION_PATH: &str = "/.netlify/functions/gemini-proxy";
}

/// Build a test server backed by the real Gemini client pointing at `upstream_url`
pub fn server_for_upstream(upstream_url: &str, api_key: Option<&str>) -> TestServer {
    server_for_config(Config::for_upstream(upstream_url, api_key))
}

/// Build a test server backed by the real Gemini client for an explicit config
pub fn server_for_config(config: Config) -> TestServer {
    let state = AppState::new(config).expect("Failed to create app state");
    TestServer::new(create_router(Arc::new(state))).expect("Failed to create test server")
}

/// Build a test server with a substituted backend
pub fn server_with_generator(
    api_key: Option<&str>,
    generator: Arc<dyn ContentGenerator>,
) -> TestServer {
    let config = Config::for_upstream("http://127.0.0.1:1", api_key);
    let state = AppState::new_for_testing(config, generator);
    TestServer::new(create_router(Arc::new(state))).expect("Failed to create test server")
}

/// Backend stub that answers every call with the same result and counts calls
pub struct StubGenerator {
    response: Value,
    calls: AtomicUsize,
}

impl StubGenerator {
    pub fn new(response: Value) -> Arc<Self> {
        Arc::new(Self {
            response,
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContentGenerator for StubGenerator {
    fn name(&self) -> &'static str {
        "stub"
    }

    fn model(&self) -> &str {
        "stub-model"
    }

    async fn generate_content(&self, _api_key: &str, _payload: &Value) -> ProxyResult<Value> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// Backend stub that echoes the payload back, to observe what the handler forwards
pub struct EchoGenerator;

#[async_trait]
impl ContentGenerator for EchoGenerator {
    fn name(&self) -> &'static str {
        "echo"
    }

    fn model(&self) -> &str {
        "echo-model"
    }

    async fn generate_content(&self, _api_key: &str, payload: &Value) -> ProxyResult<Value> {
        Ok(payload.clone())
    }
}
