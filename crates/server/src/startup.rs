use std::net::SocketAddr;

use axum::Router;
use common::utils::logging::init_logging_from_env;
use configs::AppConfig;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ENDPOINTS};
use crate::state::ServerState;

pub fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Host/port from `CONFIG_PATH` (default `config.toml`), else env vars, else defaults.
fn load_bind_addr() -> Result<SocketAddr, StartupError> {
    let cfg = AppConfig::load_or_env().map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
    cfg.server
        .bind_addr()
        .map_err(|e| StartupError::InvalidConfig(e.to_string()))
}

/// Build the app around a fresh, empty catalog.
pub fn build_app() -> Router {
    routes::build_router(ServerState::in_memory(), build_cors())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "cannot listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("received Ctrl+C, shutting down");
}

/// Public entry: build the app and run the HTTP server until Ctrl+C
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging_from_env();

    let app = build_app();

    let addr = load_bind_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr, source })?;
    info!(%addr, "starting marketplace server");
    for (method, path, summary) in ENDPOINTS {
        info!(%method, %path, "{summary}");
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}
