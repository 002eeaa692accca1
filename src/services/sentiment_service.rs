//! Sentiment Service
//!
//! Reads sentiment from the market data provider and classifies it.
//! Called by the REST API and the background refresher.

use crate::error::{AppError, Result};
use crate::market::{MarketCategory, SentimentReading};
use crate::sentiment::{classify, directive_for, Classification, ThresholdScheme};
use crate::state::AppState;
use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info};

/// Classified sentiment for one category
#[derive(Debug, Clone, Serialize)]
pub struct CategorySentiment {
    pub category: MarketCategory,
    pub name: &'static str,
    pub reading: SentimentReading,
    pub classification: Classification,
}

/// Sentiment across every category plus the overall market view
#[derive(Debug, Clone, Serialize)]
pub struct MarketOverview {
    pub categories: Vec<CategorySentiment>,
    /// Five-band classification of the mean score, with directive
    pub overall: Classification,
    pub generated_at: DateTime<Utc>,
}

/// Sentiment service for business logic
pub struct SentimentService;

impl SentimentService {
    /// Classify an arbitrary score
    pub fn classify(score: f64, trend: f64, scheme: ThresholdScheme) -> Result<Classification> {
        if !score.is_finite() {
            return Err(AppError::Validation("Score must be a finite number".to_string()));
        }
        if !trend.is_finite() {
            return Err(AppError::Validation("Trend must be a finite number".to_string()));
        }
        Ok(classify(score, trend, scheme))
    }

    /// Current sentiment for one category under the given scheme
    pub async fn category(
        state: &AppState,
        category: MarketCategory,
        scheme: ThresholdScheme,
    ) -> Result<CategorySentiment> {
        debug!("SentimentService::category - {} ({})", category, scheme);

        let reading = state.market.get_sentiment(category).await?;
        let classification = classify(reading.score, reading.trend, scheme);

        Ok(CategorySentiment {
            category,
            name: category.display_name(),
            reading,
            classification,
        })
    }

    /// Recompute the overview and store it in state
    pub async fn refresh(state: &AppState) -> Result<MarketOverview> {
        let mut categories = Vec::with_capacity(MarketCategory::ALL.len());
        for category in MarketCategory::ALL {
            categories.push(Self::category(state, category, ThresholdScheme::FiveBand).await?);
        }

        let overall = Self::overall(&categories);
        info!(
            "Sentiment overview refreshed: {} ({})",
            overall.label, overall.display_score
        );

        let overview = MarketOverview {
            categories,
            overall,
            generated_at: Utc::now(),
        };
        state.set_overview(overview.clone());

        Ok(overview)
    }

    /// Cached overview, computed on first use
    pub async fn overview(state: &AppState) -> Result<MarketOverview> {
        match state.get_overview() {
            Some(overview) => Ok(overview),
            None => Self::refresh(state).await,
        }
    }

    /// Overall market view; the only classification that carries a directive
    fn overall(categories: &[CategorySentiment]) -> Classification {
        let n = categories.len().max(1) as f64;
        let score = categories.iter().map(|c| c.reading.score).sum::<f64>() / n;
        let trend = categories.iter().map(|c| c.reading.trend).sum::<f64>() / n;

        let mut overall = classify(
            (score * 10.0).round() / 10.0,
            (trend * 10.0).round() / 10.0,
            ThresholdScheme::FiveBand,
        );
        overall.directive = Some(directive_for(overall.score));
        overall
    }
}
