//! Market data module
//!
//! The dashboard reads sentiment scores, news and correlations through the
//! [`MarketDataProvider`] trait so a live feed can replace the bundled mock
//! generator without touching classification or the HTTP layer.

mod mock;
pub mod types;

use crate::error::Result;
use async_trait::async_trait;

pub use mock::MockMarketData;
pub use types::{
    AiValidation, CorrelationMatrix, MarketCategory, NewsItem, SentimentReading,
};

/// Source of market data
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Current sentiment reading for a category
    async fn get_sentiment(&self, category: MarketCategory) -> Result<SentimentReading>;

    /// News for a category, newest first
    async fn get_news(&self, category: MarketCategory) -> Result<Vec<NewsItem>>;

    /// Correlation matrix across all categories
    async fn get_correlations(&self) -> Result<CorrelationMatrix>;
}
