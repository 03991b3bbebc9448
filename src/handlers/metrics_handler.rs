use axum::{
    extract::State,
    http::{header::CONTENT_TYPE, StatusCode},
    response::IntoResponse,
};
use std::sync::Arc;

use crate::metrics::RequestMetrics;

/// Prometheus text exposition content type
const PROMETHEUS_CONTENT_TYPE: &str = "text/plain; version=0.0.4; charset=utf-8";

/// Handle /metrics endpoint
pub async fn metrics(State(metrics): State<Arc<RequestMetrics>>) -> impl IntoResponse {
    let body = metrics.render();
    (
        StatusCode::OK,
        [(CONTENT_TYPE, PROMETHEUS_CONTENT_TYPE)],
        body,
    )
}
