//! HTTP request handlers
//!
//! - items: the CRUD pages (list, create, view, edit, delete)
//! - metrics_handler: Prometheus text exposition at /metrics

pub mod items;
pub mod metrics_handler;
