//! Gemini proxy function handler
//!
//! Validates the method, injects the server-side API key and forwards the
//! caller's `generateContent` payload to the Gemini API. Every step returns
//! its own [`ProxyError`] variant; the mapping to HTTP happens in
//! [`crate::error`].

use std::sync::Arc;

use axum::{
    body::Body,
    extract::{Request, State},
    http::{Method, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use bytes::Bytes;
use serde_json::Value;
use tracing::Instrument;

use crate::{
    config::Config,
    error::{ProxyError, ProxyResult},
    proxy::RequestContext,
    routes::metrics::record_request,
    AppState,
};

/// Proxy function entry point, mounted for every method on the function path
///
/// This handler:
/// 1. Rejects anything but POST with 405
/// 2. Requires the API key to be configured
/// 3. Parses the body as JSON
/// 4. Forwards it to Gemini and relays the response
pub async fn gemini_proxy(
    State(state): State<Arc<AppState>>,
    request: Request,
) -> ProxyResult<Response> {
    let ctx = RequestContext::new(state.generator.model());

    let outcome = handle(&state, &ctx, request)
        .instrument(ctx.create_span())
        .await;

    let duration = ctx.start_time.elapsed().as_secs_f64();
    match outcome {
        Ok(body) => {
            record_request("success", duration);
            ctx.log_request_complete();
            Ok((StatusCode::OK, Json(body)).into_response())
        }
        Err(err) => {
            record_request(err.kind(), duration);
            ctx.log_failure(&err);
            Err(err)
        }
    }
}

async fn handle(state: &AppState, ctx: &RequestContext, request: Request) -> ProxyResult<Value> {
    check_method(request.method())?;
    let api_key = require_api_key(&state.config)?;

    let body = read_body(request.into_body()).await?;
    ctx.log_request_start(body.len());
    let payload = parse_payload(&body)?;

    let result = state.generator.generate_content(api_key, &payload).await;
    match &result {
        Ok(_) => ctx.log_upstream_response(StatusCode::OK.as_u16()),
        Err(ProxyError::Upstream { status, .. }) => ctx.log_upstream_response(status.as_u16()),
        Err(_) => {}
    }
    result
}

/// Only POST reaches the upstream
pub fn check_method(method: &Method) -> ProxyResult<()> {
    if method == Method::POST {
        Ok(())
    } else {
        Err(ProxyError::MethodNotAllowed)
    }
}

/// The configured API key, or a configuration error when absent or empty
pub fn require_api_key(config: &Config) -> ProxyResult<&str> {
    config.api_key().ok_or(ProxyError::MissingApiKey)
}

async fn read_body(body: Body) -> ProxyResult<Bytes> {
    axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(|e| ProxyError::BodyRead(e.to_string()))
}

/// Parse the inbound body; its shape is not validated beyond being JSON
pub fn parse_payload(body: &[u8]) -> ProxyResult<Value> {
    serde_json::from_slice(body).map_err(ProxyError::InvalidRequestBody)
}
