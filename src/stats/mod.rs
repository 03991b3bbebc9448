//! Metrics inspection for the `stats` subcommand
//!
//! Fetches the Prometheus exposition from a running instance and turns it
//! into per-route request counts.

pub mod fetcher;
pub mod parser;

// Re-export commonly used types
pub use parser::RequestCount;
