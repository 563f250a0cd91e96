//! HTTP surface of the proxy

pub mod handlers;

use crate::config::ProxyConfig;
use crate::error::Result;
use crate::whois::WhoisService;
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Shared state for all handlers
pub struct AppState {
    pub service: WhoisService,
}

impl AppState {
    pub fn new(service: WhoisService) -> Self {
        Self { service }
    }
}

/// Build the application router.
///
/// Cross-origin requests are allowed from anywhere so browser clients can
/// call the proxy directly.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/whois/:domain", get(handlers::whois_handler))
        .route("/health", get(handlers::health_handler))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Serve on an already bound listener until ctrl-c
pub async fn serve_on(listener: TcpListener, service: WhoisService) -> Result<()> {
    let state = Arc::new(AppState::new(service));

    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

/// Bind the configured address and serve
pub async fn serve(config: ProxyConfig) -> Result<()> {
    let service = WhoisService::from_config(&config)?;
    let listener = TcpListener::bind(config.bind_addr).await?;

    tracing::info!(
        addr = %config.bind_addr,
        providers = ?service.resolver().provider_names(),
        timeout_secs = %config.provider_timeout.as_secs(),
        "whois-proxy listening"
    );

    serve_on(listener, service).await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
