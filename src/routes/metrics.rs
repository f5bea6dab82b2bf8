//! Prometheus metrics endpoint
//!
//! Exposes proxy metrics in Prometheus format for monitoring.

use anyhow::{Context, Result};
use axum::response::IntoResponse;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use once_cell::sync::OnceCell;

/// Global Prometheus handle for metrics export
static PROMETHEUS_HANDLE: OnceCell<PrometheusHandle> = OnceCell::new();

/// Initialize metrics (call once at startup, later calls are no-ops)
pub fn init_metrics() -> Result<()> {
    PROMETHEUS_HANDLE.get_or_try_init(|| {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .context("Failed to install Prometheus recorder")?;
        register_metrics();
        Ok::<_, anyhow::Error>(handle)
    })?;
    Ok(())
}

fn register_metrics() {
    metrics::describe_counter!(
        "gemini_proxy_requests_total",
        "Total number of proxy invocations by outcome"
    );
    metrics::describe_histogram!(
        "gemini_proxy_request_duration_seconds",
        "Proxy invocation duration in seconds"
    );
}

/// Prometheus metrics endpoint handler
///
/// Returns metrics in Prometheus text format for scraping. Empty until
/// [`init_metrics`] has run.
pub async fn prometheus_metrics() -> impl IntoResponse {
    PROMETHEUS_HANDLE
        .get()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

/// Record one proxy invocation
pub fn record_request(outcome: &str, duration_secs: f64) {
    metrics::counter!("gemini_proxy_requests_total", "outcome" => outcome.to_string())
        .increment(1);
    metrics::histogram!("gemini_proxy_request_duration_seconds").record(duration_secs);
}
