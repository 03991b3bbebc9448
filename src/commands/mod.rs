//! Command implementations for the CLI
//!
//! This module contains the implementation of all CLI commands:
//! - start: Run the web server
//! - config: Configuration display and validation
//! - stats: Show request counts from a running instance

pub mod config;
pub mod start;
pub mod stats;
