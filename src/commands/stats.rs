//! Stats command implementation
//!
//! Fetches the /metrics endpoint of a running instance and prints the
//! cumulative request count per method and path.

use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use item_catalog::{
    config,
    stats::{fetcher::MetricsFetcher, parser::parse_request_counts},
};

/// Execute the stats command
///
/// # Arguments
/// * `url` - Optional metrics endpoint URL (auto-detected from config if None)
pub async fn execute(config_path: &Path, url: Option<String>) -> Result<()> {
    let metrics_url = build_metrics_url(config_path, url)?;

    println!("{}", format!("Fetching {}...", metrics_url).yellow());

    let fetcher = MetricsFetcher::new(metrics_url);
    let text = fetcher.fetch().await?;
    let counts = parse_request_counts(&text)?;

    if counts.is_empty() {
        println!("{}", "No requests recorded yet".yellow());
        return Ok(());
    }

    println!();
    println!("{}", "Requests by method and path:".green().bold());
    for row in &counts {
        println!("  {:>8}  {:<6} {}", row.count, row.method, row.path);
    }

    let total: u64 = counts.iter().map(|c| c.count).sum();
    println!();
    println!("{} {}", "Total requests:".bold(), total);

    Ok(())
}

/// Build metrics URL from config or override
fn build_metrics_url(config_path: &Path, url_override: Option<String>) -> Result<String> {
    if let Some(url) = url_override {
        return Ok(url);
    }

    // Auto-detect from the configuration file
    let cfg = config::load_config(config_path)?;
    Ok(format!(
        "http://{}:{}/metrics",
        cfg.server.host, cfg.server.port
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_metrics_url_prefers_override() {
        let url = build_metrics_url(
            Path::new("does-not-exist.toml"),
            Some("http://10.0.0.5:9000/metrics".to_string()),
        )
        .unwrap();

        assert_eq!(url, "http://10.0.0.5:9000/metrics");
    }
}
