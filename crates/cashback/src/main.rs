use anyhow::{Context, Result};
use cashback::{config::CashbackConfig, handler::cashback_routes, state::AppState};
use dotenv::dotenv;
use shared::utils::{Logger, shutdown_signal};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);

    let _logger = Logger::new("cashback-service", is_dev);

    let config = CashbackConfig::init().context("Failed to load configuration")?;

    let state = Arc::new(AppState::new(&config).context("Failed to create AppState")?);

    let app = cashback_routes(state).layer(TraceLayer::new_for_http());

    let addr = format!("0.0.0.0:{}", config.port);
    info!("🚀 Cashback service listening on {addr}");

    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("✅ Cashback service shutdown complete.");

    Ok(())
}
