use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle, PrometheusRecorder};
use std::sync::Arc;

/// Request counting service
///
/// Owns its Prometheus recorder instead of installing a process-global one,
/// so several instances (e.g. in tests) can run side by side. Counting goes
/// through [`track_requests`]; the /metrics handler renders snapshots via
/// [`RequestMetrics::render`].
pub struct RequestMetrics {
    recorder: PrometheusRecorder,
    handle: PrometheusHandle,
}

impl RequestMetrics {
    /// Create a recorder with the request counter described
    pub fn new() -> Self {
        let recorder = PrometheusBuilder::new().build_recorder();
        let handle = recorder.handle();

        metrics::with_local_recorder(&recorder, || {
            describe_counter!("http_requests_total", "Total HTTP requests");
        });

        Self { recorder, handle }
    }

    /// Count one request for the given method and path
    pub fn record_request(&self, method: &str, path: &str) {
        metrics::with_local_recorder(&self.recorder, || {
            counter!(
                "http_requests_total",
                "method" => method.to_string(),
                "path" => path.to_string(),
            )
            .increment(1);
        });
    }

    /// Render the current Prometheus text exposition
    pub fn render(&self) -> String {
        self.handle.render()
    }
}

impl Default for RequestMetrics {
    fn default() -> Self {
        Self::new()
    }
}

/// Request tracking middleware
///
/// Counts every inbound request before dispatch, labeled by method and the
/// raw request path (e.g. "/view/3"). Running before dispatch means the
/// /metrics request itself appears in the snapshot it returns, and requests
/// that end up as errors are still counted.
pub async fn track_requests(
    State(metrics): State<Arc<RequestMetrics>>,
    req: Request,
    next: Next,
) -> Response {
    metrics.record_request(req.method().as_str(), req.uri().path());
    next.run(req).await
}
