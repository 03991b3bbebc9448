pub mod config;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod models;
pub mod server;
pub mod stats;
pub mod store;
pub mod views;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize tracing/logging
///
/// The filter is taken from RUST_LOG, falling back to "info".
/// This function can only be called once.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .init();
}
