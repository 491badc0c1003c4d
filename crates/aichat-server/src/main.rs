//! aichat HTTP Server
//!
//! Serves the compiled WASM frontend. Client-side routes are answered with the
//! app shell so deep links and reloads work under history-mode routing.

mod app;
mod config;
mod handlers;
mod state;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env()?;

    if !config.index_path().exists() {
        tracing::warn!("⚠ {} not found - build the frontend first", config.index_path().display());
        tracing::warn!("  cd crates/aichat-web && trunk build --release");
    }

    let state = AppState::new(config);
    let addr = state.config.bind_addr;
    let app = app::build_router(state.clone());

    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🚀 aichat running on http://{}", addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("Base: {}", state.config.router.base);
    tracing::info!("Routes:");
    for entry in state.table.iter() {
        tracing::info!("  {:<8} {}{}", entry.name, state.config.router.base.as_str(), entry.path);
    }
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health      - Health check");
    tracing::info!("  GET  /api/routes  - Route table");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}
