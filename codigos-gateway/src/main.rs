//! Entry point for the `codigos-gateway` HTTP server.

use std::sync::Arc;

use axum::{extract::Request, ServiceExt};
use codigos_core::RecordStore;
use codigos_gateway::{config::GatewayConfig, routes::create_router};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match GatewayConfig::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!(error = %e, "invalid configuration");
            std::process::exit(1);
        }
    };
    let addr = config.listen_addr();

    let store = Arc::new(RecordStore::seeded());
    info!(records = store.len(), "record store seeded");
    let app = create_router(store);

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!(addr = %addr, error = %e, "failed to bind");
            std::process::exit(1);
        }
    };

    info!(addr = %addr, url = %format!("http://localhost:{}", config.port), "codigos-gateway listening");

    if let Err(e) = axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await {
        tracing::error!(error = %e, "server error");
        std::process::exit(1);
    }
}
