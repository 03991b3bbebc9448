//! Prometheus text format parsing
//!
//! Extracts the http_requests_total counter into per-(method, path) rows
//! for the `stats` subcommand.

use anyhow::Result;
use prometheus_parse::{Sample, Scrape, Value};

/// Cumulative request count for one (method, path) label pair
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestCount {
    pub method: String,
    pub path: String,
    pub count: u64,
}

/// Parse Prometheus text and extract request counts
///
/// Rows are sorted by count descending, then method and path, so the
/// busiest routes come first.
pub fn parse_request_counts(prometheus_text: &str) -> Result<Vec<RequestCount>> {
    let lines: Vec<_> = prometheus_text.lines().map(|s| Ok(s.to_owned())).collect();
    let scrape = Scrape::parse(lines.into_iter())?;

    let mut counts = Vec::new();
    for sample in &scrape.samples {
        if sample.metric != "http_requests_total" {
            continue;
        }

        if let Some(count) = extract_counter_value(&sample.value) {
            counts.push(RequestCount {
                method: get_label(sample, "method"),
                path: get_label(sample, "path"),
                count,
            });
        }
    }

    counts.sort_by(|a, b| {
        b.count
            .cmp(&a.count)
            .then_with(|| a.method.cmp(&b.method))
            .then_with(|| a.path.cmp(&b.path))
    });

    Ok(counts)
}

/// Extract counter value from Prometheus value
fn extract_counter_value(value: &Value) -> Option<u64> {
    match value {
        Value::Counter(v) | Value::Gauge(v) | Value::Untyped(v) => Some(*v as u64),
        _ => None,
    }
}

/// Get label value from sample, returning empty string if not found
fn get_label(sample: &Sample, label_name: &str) -> String {
    sample
        .labels
        .get(label_name)
        .map(|s| s.to_string())
        .unwrap_or_default()
}
