//! HTTP client for reading the /metrics endpoint of a running instance

use anyhow::Result;
use reqwest::Client;
use std::time::Duration;

/// HTTP client wrapper for fetching metrics
pub struct MetricsFetcher {
    client: Client,
    url: String,
}

impl MetricsFetcher {
    /// Create a new metrics fetcher
    ///
    /// # Arguments
    /// * `url` - Full URL to the metrics endpoint (e.g., "http://127.0.0.1:8080/metrics")
    pub fn new(url: String) -> Self {
        Self {
            client: Client::new(),
            url,
        }
    }

    /// Fetch the raw Prometheus text exposition
    ///
    /// # Errors
    /// Returns an error if the request fails, the response status is not
    /// successful, or the body cannot be read as text.
    pub async fn fetch(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.url)
            .timeout(Duration::from_secs(10))
            .send()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to fetch metrics: {}", e))?;

        if !response.status().is_success() {
            anyhow::bail!("Failed to fetch metrics: HTTP {}", response.status());
        }

        let text = response
            .text()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to read metrics response: {}", e))?;

        Ok(text)
    }
}
