//! MarketPulse - Market sentiment and webhook intake service
//!
//! Serves the data behind a market-intelligence dashboard: classified
//! sentiment per market category, news feeds, cross-asset correlations
//! and user alerts, and forwards IFTTT webhooks to the remote backend.

pub mod alerts;
pub mod config;
pub mod error;
pub mod market;
pub mod remote;
pub mod scheduler;
pub mod sentiment;
pub mod services;
pub mod state;
pub mod webhook;

use config::AppConfig;
use scheduler::SentimentRefresher;
use state::AppState;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use webhook::WebhookServer;

/// Initialize tracing/logging
pub fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "marketpulse_lib=debug,marketpulse=debug,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Start the service and run until Ctrl-C
pub async fn run(config: AppConfig) -> error::Result<()> {
    tracing::info!("Starting MarketPulse...");

    let state = Arc::new(AppState::new(config)?);

    // Start sentiment refresh (default every 30s)
    let mut refresher = SentimentRefresher::start(state.clone());
    tracing::info!("Sentiment refresher started");

    let mut server = WebhookServer::new(state.clone());
    server.start().await?;

    tokio::signal::ctrl_c().await?;
    tracing::info!("Shutdown requested");

    server.stop();
    refresher.stop();

    tracing::info!("MarketPulse stopped");
    Ok(())
}
