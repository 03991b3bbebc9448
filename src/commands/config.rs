use anyhow::Result;
use colored::Colorize;
use item_catalog::config::{self, Config};
use std::path::Path;
use tracing::info;

/// Execute the config show command
///
/// Displays the resolved configuration with secrets masked
pub fn show(config_path: &Path) -> Result<()> {
    println!("{}", "Loading configuration...".yellow());
    info!("Loading configuration for display");

    let cfg = config::load_config(config_path)?;
    let sanitized = sanitize_secrets(&cfg);

    println!("{}", "Current Configuration:".green().bold());
    println!();

    // Serialize to TOML format
    let toml_string = toml::to_string_pretty(&sanitized)?;
    println!("{}", toml_string);

    Ok(())
}

/// Execute the config validate command
pub fn validate(config_path: &Path) -> Result<()> {
    println!("{}", "Validating configuration...".yellow());

    let cfg = config::load_config(config_path)?;

    println!("{}", "✓ Configuration is valid".green());
    println!();
    println!("{}", "Summary:".bold());
    println!("  Listen Address: {}:{}", cfg.server.host, cfg.server.port);
    println!("  Database URL: {}", mask_database_url(&cfg.database_url));

    info!("Configuration validation successful");
    Ok(())
}

/// Sanitize secrets in configuration for safe display
fn sanitize_secrets(cfg: &Config) -> Config {
    let mut sanitized = cfg.clone();
    sanitized.database_url = mask_database_url(&cfg.database_url);
    sanitized
}

/// Mask any password embedded in a database URL
///
/// Example: "postgres://app:hunter2@db/items" -> "postgres://app:***@db/items"
fn mask_database_url(url: &str) -> String {
    let Some((scheme, rest)) = url.split_once("://") else {
        return url.to_string();
    };
    let Some((credentials, host)) = rest.split_once('@') else {
        return url.to_string();
    };

    match credentials.split_once(':') {
        Some((user, _password)) => format!("{}://{}:***@{}", scheme, user, host),
        None => url.to_string(),
    }
}
