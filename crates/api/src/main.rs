use anyhow::{Context, Result};
use std::time::Duration;
use tracing::info;

use eco_pulse_api::app::{create_app_with_state, AppState};
use eco_pulse_api::config::Config;
use eco_pulse_api::jobs::{JobScheduler, SessionSweepJob};
use eco_pulse_api::middleware::{init_metrics, logging::init_logging};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    // Load configuration
    let config = Config::load()?;

    // Initialize logging
    init_logging(&config.logging).context("Failed to initialize logging")?;

    info!("Starting Eco-Pulse dashboard v{}", env!("CARGO_PKG_VERSION"));

    init_metrics().context("Failed to install Prometheus recorder")?;

    let addr = config
        .socket_addr()
        .context("Invalid server host/port")?;
    let sweep_interval = Duration::from_secs(config.session.sweep_interval_secs);

    // Build application
    let state = AppState::new(config);

    // Start background jobs
    let mut scheduler = JobScheduler::new();
    scheduler.register(SessionSweepJob::new(state.sessions.clone(), sweep_interval));
    scheduler.start();

    let app = create_app_with_state(state);

    // Start server
    info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped, shutting down background jobs");
    scheduler.shutdown();
    scheduler.wait_for_shutdown(Duration::from_secs(10)).await;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
    }
}
