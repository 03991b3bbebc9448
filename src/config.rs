use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8080;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub database_url: String,
    pub server: ServerConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

/// Load configuration from defaults, an optional TOML file, and the environment
///
/// `database_url` has no default: it must come from the DATABASE_URL
/// environment variable or the configuration file, otherwise loading fails
/// and the process does not start. Nested keys use `__` in the environment
/// (e.g. SERVER__PORT=9000).
pub fn load_config(config_path: &Path) -> anyhow::Result<Config> {
    let settings = config::Config::builder()
        .set_default("server.host", DEFAULT_HOST)?
        .set_default("server.port", i64::from(DEFAULT_PORT))?
        .add_source(config::File::from(config_path.to_path_buf()).required(false))
        .add_source(
            config::Environment::default()
                .separator("__")
                .try_parsing(true),
        )
        .build()?;

    if settings.get_string("database_url").is_err() {
        anyhow::bail!("DATABASE_URL environment variable is not set");
    }

    let cfg: Config = settings.try_deserialize()?;
    validate_config(&cfg)?;

    Ok(cfg)
}

pub fn validate_config(cfg: &Config) -> anyhow::Result<()> {
    if cfg.database_url.is_empty() {
        anyhow::bail!("database_url cannot be empty");
    }

    if cfg.server.port == 0 {
        anyhow::bail!("server.port must be non-zero");
    }

    if cfg.server.host.parse::<std::net::IpAddr>().is_err() {
        anyhow::bail!("server.host is not a valid IP address: {}", cfg.server.host);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_config() -> Config {
        Config {
            database_url: "sqlite:items.db".to_string(),
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 8080,
            },
        }
    }

    #[test]
    fn test_validate_config_accepts_valid() {
        let cfg = create_test_config();
        assert!(validate_config(&cfg).is_ok());
    }

    #[test]
    fn test_validate_config_rejects_empty_database_url() {
        let mut cfg = create_test_config();
        cfg.database_url.clear();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("database_url cannot be empty"));
    }

    #[test]
    fn test_validate_config_rejects_port_zero() {
        let mut cfg = create_test_config();
        cfg.server.port = 0;

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("server.port must be non-zero"));
    }

    #[test]
    fn test_validate_config_rejects_bad_host() {
        let mut cfg = create_test_config();
        cfg.server.host = "not-an-ip".to_string();

        let result = validate_config(&cfg);
        assert!(result.is_err());
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not a valid IP address"));
    }
}
