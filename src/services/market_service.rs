//! Market Service
//!
//! News feeds and cross-asset correlations.

use crate::error::Result;
use crate::market::{CorrelationMatrix, MarketCategory, NewsItem};
use crate::state::AppState;
use serde::Serialize;
use tracing::debug;

/// News for one category
#[derive(Debug, Clone, Serialize)]
pub struct NewsResult {
    pub category: MarketCategory,
    pub count: usize,
    pub items: Vec<NewsItem>,
}

pub struct MarketService;

impl MarketService {
    pub async fn news(state: &AppState, category: MarketCategory) -> Result<NewsResult> {
        debug!("MarketService::news - {}", category);

        let mut items = state.market.get_news(category).await?;
        items.sort_by(|a, b| b.published_at.cmp(&a.published_at));

        Ok(NewsResult {
            category,
            count: items.len(),
            items,
        })
    }

    pub async fn correlations(state: &AppState) -> Result<CorrelationMatrix> {
        state.market.get_correlations().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::test_support::{test_state, StubRemote};
    use serde_json::Value;
    use std::sync::Arc;

    #[tokio::test]
    async fn test_news_result() {
        let state = test_state(Arc::new(StubRemote::ok(Value::Null)));
        let result = MarketService::news(&state, MarketCategory::Crypto).await.unwrap();
        assert_eq!(result.count, result.items.len());
        assert!(result
            .items
            .iter()
            .all(|item| item.sectors.contains(&MarketCategory::Crypto)));
    }

    #[tokio::test]
    async fn test_correlations() {
        let state = test_state(Arc::new(StubRemote::ok(Value::Null)));
        let matrix = MarketService::correlations(&state).await.unwrap();
        assert_eq!(matrix.values.len(), matrix.categories.len());
    }
}
