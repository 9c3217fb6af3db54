use anyhow::{Context, Result};
use clap::Parser;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::info;

mod aggregate;
mod config;
mod dashboard;
mod data;

use config::Config;
use dashboard::AppState;
use data::{CsvSource, MatchTable};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing / logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::parse();
    config.validate()?;

    // Load the season table once; every view is derived from this copy
    // until the process restarts.
    let source = CsvSource::new(&config.dataset_path);
    let table = MatchTable::load(&source)
        .with_context(|| format!("failed to load dataset from {}", config.dataset_path))?;
    info!(
        "Season table ready: {} matches, {} teams",
        table.len(),
        aggregate::teams(table.records()).len()
    );

    let state = AppState {
        table: Arc::new(table),
    };
    let app = dashboard::router(state);
    let addr: SocketAddr = config.dashboard_addr.parse()?;
    info!("Dashboard listening on http://{}", addr);
    let listener = tokio::net::TcpListener::bind(addr).await?;

    // Run dashboard server (blocks until shutdown)
    axum::serve(listener, app).await?;

    Ok(())
}
