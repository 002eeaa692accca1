//! Periodic sentiment overview refresh

use super::interval::ScopedInterval;
use crate::services::SentimentService;
use crate::state::AppState;
use std::sync::Arc;
use tracing::warn;

/// Keeps the cached sentiment overview fresh while it is alive
pub struct SentimentRefresher {
    task: ScopedInterval,
}

impl SentimentRefresher {
    /// Start refreshing every `config.refresh_interval`
    pub fn start(state: Arc<AppState>) -> Self {
        let period = state.config.refresh_interval;

        let task = ScopedInterval::spawn("sentiment-refresh", period, move || {
            let state = state.clone();
            async move {
                // Keep the previous snapshot on failure
                if let Err(e) = SentimentService::refresh(&state).await {
                    warn!("Sentiment refresh failed: {}", e);
                }
            }
        });

        Self { task }
    }

    pub fn is_running(&self) -> bool {
        self.task.is_running()
    }

    pub fn stop(&mut self) {
        self.task.cancel();
    }
}
