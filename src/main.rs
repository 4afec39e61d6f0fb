use crate::app_config::AppConfig;
use tokio::net::TcpListener;
use tracing::{info, warn};

mod api;
mod app_config;
mod domain;
mod geo_location_deserializer;
mod randomness;
mod simulator;
mod tracker;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🛰️ Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let random = randomness::from_seed(config.tracker().seed());
    let tracker = tracker::start(config.tracker(), random);
    info!(device_id = config.tracker().device_id(), "✅  Initialized tracker");

    let listener = TcpListener::bind(config.server().address()).await?;
    let app = api::router(tracker, config.server().static_dir());
    info!("🔥 {} is listening on http://{}", env!("CARGO_PKG_NAME"), listener.local_addr()?);

    axum::serve(listener, app).with_graceful_shutdown(shutdown_signal()).await?;

    info!("👋 {} stopped", env!("CARGO_PKG_NAME"));
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("⚠️ Could not listen for Ctrl-C, running until killed: {}", e);
        std::future::pending::<()>().await;
    }
}
