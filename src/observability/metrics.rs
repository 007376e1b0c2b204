//! Metrics collection and exposition.
//!
//! # Metrics
//! - `relay_requests_total` (counter): relayed requests by resource, status
//! - `relay_request_duration_seconds` (histogram): end-to-end relay latency
//!
//! # Design Decisions
//! - Labels are the resource name and the status returned to the caller
//! - Exporter is optional; recording is free when it is not installed

use std::net::SocketAddr;
use std::time::Instant;

use metrics_exporter_prometheus::{BuildError, PrometheusBuilder};

/// Install the Prometheus recorder and its HTTP scrape listener.
///
/// Must be called from within a Tokio runtime.
pub fn init_metrics(addr: SocketAddr) -> Result<(), BuildError> {
    PrometheusBuilder::new().with_http_listener(addr).install()?;
    tracing::info!(address = %addr, "Metrics endpoint listening");
    Ok(())
}

/// Record the outcome of one relayed request.
pub fn record_relay(resource: &'static str, status: u16, start_time: Instant) {
    metrics::counter!(
        "relay_requests_total",
        "resource" => resource,
        "status" => status.to_string()
    )
    .increment(1);

    metrics::histogram!("relay_request_duration_seconds", "resource" => resource)
        .record(start_time.elapsed().as_secs_f64());
}
