use anyhow::Result;
use colored::Colorize;
use item_catalog::{config, server};
use std::path::Path;
use tracing::info;

/// Execute the start command
///
/// Loads configuration and runs the server until a shutdown signal arrives.
pub async fn execute(config_path: &Path) -> Result<()> {
    println!("{}", "Starting item catalog...".green());

    let cfg = config::load_config(config_path)?;

    info!(
        host = %cfg.server.host,
        port = cfg.server.port,
        database_url = %cfg.database_url,
        "Configuration loaded"
    );

    // Blocks until shutdown
    server::start_server(cfg).await?;

    Ok(())
}
