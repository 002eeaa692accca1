//! Market data types

use crate::error::AppError;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Market category tracked by the dashboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MarketCategory {
    Stocks,
    Crypto,
    RealEstate,
    Forex,
    Indices,
}

impl MarketCategory {
    pub const ALL: [MarketCategory; 5] = [
        MarketCategory::Stocks,
        MarketCategory::Crypto,
        MarketCategory::RealEstate,
        MarketCategory::Forex,
        MarketCategory::Indices,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MarketCategory::Stocks => "stocks",
            MarketCategory::Crypto => "crypto",
            MarketCategory::RealEstate => "real_estate",
            MarketCategory::Forex => "forex",
            MarketCategory::Indices => "indices",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            MarketCategory::Stocks => "Stocks",
            MarketCategory::Crypto => "Crypto",
            MarketCategory::RealEstate => "Real Estate",
            MarketCategory::Forex => "Forex",
            MarketCategory::Indices => "Indices",
        }
    }
}

impl fmt::Display for MarketCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MarketCategory {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "stocks" | "stock" => Ok(MarketCategory::Stocks),
            "crypto" => Ok(MarketCategory::Crypto),
            "real_estate" | "realestate" => Ok(MarketCategory::RealEstate),
            "forex" | "fx" => Ok(MarketCategory::Forex),
            "indices" | "index" => Ok(MarketCategory::Indices),
            other => Err(AppError::NotFound(format!("Market category '{}'", other))),
        }
    }
}

/// A sentiment score for one category at a point in time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SentimentReading {
    pub category: MarketCategory,
    /// 0-100
    pub score: f64,
    /// Change versus the prior period
    pub trend: f64,
    pub updated_at: DateTime<Utc>,
}

/// AI validation attached to a news item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AiValidation {
    /// 0-100
    pub score: u8,
    pub summary: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: Uuid,
    pub title: String,
    pub source: String,
    pub url: String,
    pub published_at: DateTime<Utc>,
    /// -1.0 (bearish) to 1.0 (bullish)
    pub sentiment: f64,
    pub sectors: Vec<MarketCategory>,
    pub symbols: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ai_validation: Option<AiValidation>,
}

/// Pairwise correlation coefficients between categories
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationMatrix {
    pub categories: Vec<MarketCategory>,
    /// Row-major, `values[i][j]` correlates `categories[i]` with `categories[j]`
    pub values: Vec<Vec<f64>>,
}

impl CorrelationMatrix {
    /// Coefficient for a pair of categories, if both are present
    pub fn get(&self, a: MarketCategory, b: MarketCategory) -> Option<f64> {
        let i = self.categories.iter().position(|c| *c == a)?;
        let j = self.categories.iter().position(|c| *c == b)?;
        Some(self.values[i][j])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parsing() {
        assert_eq!("stocks".parse::<MarketCategory>().unwrap(), MarketCategory::Stocks);
        assert_eq!("real-estate".parse::<MarketCategory>().unwrap(), MarketCategory::RealEstate);
        assert_eq!("Real_Estate".parse::<MarketCategory>().unwrap(), MarketCategory::RealEstate);
        assert!(matches!(
            "commodities".parse::<MarketCategory>(),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_category_wire_names_round_trip_display() {
        for category in MarketCategory::ALL {
            let json = serde_json::to_value(category).unwrap();
            assert_eq!(json, category.as_str());
        }
    }
}
