//! Application state management

use crate::alerts::AlertStore;
use crate::config::AppConfig;
use crate::error::Result;
use crate::market::{MarketDataProvider, MockMarketData};
use crate::remote::{RemoteFunctions, SupabaseFunctions};
use crate::services::MarketOverview;
use parking_lot::RwLock;
use std::sync::Arc;

/// Application state shared across all handlers and background tasks
pub struct AppState {
    /// Loaded configuration
    pub config: AppConfig,

    /// Remote backend function client
    pub remote: Arc<dyn RemoteFunctions>,

    /// Market data source
    pub market: Arc<dyn MarketDataProvider>,

    /// User alert registry
    pub alerts: AlertStore,

    /// Last computed sentiment overview
    pub overview: RwLock<Option<MarketOverview>>,
}

impl AppState {
    /// Create state wired to the configured backend and the mock data feed
    pub fn new(config: AppConfig) -> Result<Self> {
        let remote: Arc<dyn RemoteFunctions> = Arc::new(SupabaseFunctions::new(&config.backend)?);
        let market: Arc<dyn MarketDataProvider> = Arc::new(MockMarketData::from_seed(config.mock_seed));

        tracing::info!("Remote backend: {}", config.backend.url);

        Ok(Self::with_components(config, remote, market))
    }

    /// Create state from explicit collaborators
    pub fn with_components(
        config: AppConfig,
        remote: Arc<dyn RemoteFunctions>,
        market: Arc<dyn MarketDataProvider>,
    ) -> Self {
        Self {
            config,
            remote,
            market,
            alerts: AlertStore::new(),
            overview: RwLock::new(None),
        }
    }

    /// Get the cached overview
    pub fn get_overview(&self) -> Option<MarketOverview> {
        self.overview.read().clone()
    }

    /// Replace the cached overview
    pub fn set_overview(&self, overview: MarketOverview) {
        *self.overview.write() = Some(overview);
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::error::AppError;
    use async_trait::async_trait;
    use parking_lot::Mutex;
    use serde_json::Value;

    /// Remote double that records calls and returns a canned result
    pub struct StubRemote {
        pub calls: Mutex<Vec<(String, Value)>>,
        response: std::result::Result<Value, String>,
    }

    impl StubRemote {
        pub fn ok(response: Value) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response: Ok(response),
            }
        }

        pub fn failing(message: &str) -> Self {
            Self {
                calls: Mutex::new(Vec::new()),
                response: Err(message.to_string()),
            }
        }
    }

    #[async_trait]
    impl RemoteFunctions for StubRemote {
        async fn invoke(&self, name: &str, payload: Value) -> Result<Value> {
            self.calls.lock().push((name.to_string(), payload));
            self.response.clone().map_err(AppError::Remote)
        }
    }

    pub fn test_config() -> AppConfig {
        AppConfig::from_lookup(|key| match key {
            crate::config::ENV_BACKEND_URL => Some("https://test.supabase.co".to_string()),
            crate::config::ENV_PUBLIC_API_KEY => Some("test-key".to_string()),
            _ => None,
        })
        .expect("test config")
    }

    pub fn test_state(remote: Arc<StubRemote>) -> Arc<AppState> {
        Arc::new(AppState::with_components(
            test_config(),
            remote,
            Arc::new(MockMarketData::seeded(1)),
        ))
    }
}
