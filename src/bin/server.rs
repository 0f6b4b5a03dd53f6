//! Quick Commerce Dashboard Server
//!
//! Run with: cargo run --bin qc-dash-server
//!
//! Serves the metrics provider API and the built dashboard bundle.
//!
//! # Configuration
//!
//! - `QC_DASH_CONFIG`: Explicit config file (otherwise the default search path)
//! - `QC_DASH_HOST`, `QC_DASH_PORT`: Bind address (default: 0.0.0.0:8085)
//! - `QC_DASH_STATIC_DIR`: Built dashboard bundle (default: dashboard-ui/dist)
//! - `QC_DASH_LOG_LEVEL`, `QC_DASH_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Overrides the log level entirely

use anyhow::Context;
use quickcommerce::api::{serve, AppState};
use quickcommerce::config::Config;
use quickcommerce::dashboard::StaticSource;
use std::path::PathBuf;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = match std::env::var("QC_DASH_CONFIG") {
        Ok(path) => Config::load_with_env(&PathBuf::from(&path))
            .with_context(|| format!("loading config from {}", path))?,
        Err(_) => Config::load_default(),
    };

    quickcommerce::logging::init(&config.logging).context("initializing logging")?;

    tracing::info!("Starting Quick Commerce dashboard server v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Static directory: {:?}", config.server.static_dir);

    let (state, report) = AppState::from_source(StaticSource, config.server.clone()).await;
    if !report.is_complete() {
        tracing::warn!(failed = report.failed.len(), "Serving with incomplete metric groups");
    }

    serve(state, &config.server).await?;

    tracing::info!("Dashboard server stopped");
    Ok(())
}
