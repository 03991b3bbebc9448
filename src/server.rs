use anyhow::Result;
use axum::{middleware, routing::get, Router};
use std::{net::SocketAddr, sync::Arc};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::{
    config::Config,
    handlers,
    metrics::{self, RequestMetrics},
    store::ItemStore,
};

/// Start the item catalog server
///
/// This function:
/// 1. Creates the request metrics recorder
/// 2. Opens the item store
/// 3. Creates the Axum application
/// 4. Binds to the configured address
/// 5. Serves requests with graceful shutdown support
pub async fn start_server(config: Config) -> Result<()> {
    let request_metrics = Arc::new(RequestMetrics::new());

    info!(database_url = %config.database_url, "Opening item store");
    let store = ItemStore::connect(&config.database_url).await?;

    let app_state = handlers::items::AppState { store };

    let app = create_router(app_state, request_metrics);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    info!("Starting item catalog on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped gracefully");

    Ok(())
}

/// Create the Axum router with all routes and middleware
///
/// The request-tracking layer wraps the whole router, so every inbound
/// request is counted, /metrics and unmatched paths included.
pub fn create_router(
    app_state: handlers::items::AppState,
    request_metrics: Arc<RequestMetrics>,
) -> Router {
    let item_routes = Router::new()
        .route("/", get(handlers::items::index))
        .route(
            "/create",
            get(handlers::items::create_form).post(handlers::items::create),
        )
        .route("/view/:id", get(handlers::items::view))
        .route(
            "/edit/:id",
            get(handlers::items::edit_form).post(handlers::items::edit),
        )
        .route("/delete/:id", get(handlers::items::delete))
        .with_state(app_state);

    Router::new()
        .route("/metrics", get(handlers::metrics_handler::metrics))
        .with_state(request_metrics.clone())
        .merge(item_routes)
        .layer(middleware::from_fn_with_state(
            request_metrics,
            metrics::track_requests,
        ))
        .layer(TraceLayer::new_for_http())
}

/// Resolve when Ctrl-C or SIGTERM is received
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl-C handler: {}", e);
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => tracing::error!("Failed to install SIGTERM handler: {}", e),
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received, draining connections...");
}
