//! Mock market data provider
//!
//! Stands in for a live market-data feed. Scores wander around fixed
//! per-category baselines, headlines come from a small template set, and
//! correlations jitter around a baseline table.

use super::types::*;
use super::MarketDataProvider;
use crate::error::Result;
use async_trait::async_trait;
use chrono::{Duration, Utc};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Uuid;

const SCORE_JITTER: f64 = 4.0;
const TREND_RANGE: f64 = 3.0;
const CORRELATION_JITTER: f64 = 0.05;
const NEWS_PER_CATEGORY: usize = 4;

struct Headline {
    title: &'static str,
    source: &'static str,
    symbols: &'static [&'static str],
}

/// Mock provider with an optional deterministic seed
pub struct MockMarketData {
    rng: Mutex<StdRng>,
}

impl MockMarketData {
    /// Provider seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }

    /// Provider producing a reproducible sequence
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
        }
    }

    pub fn from_seed(seed: Option<u64>) -> Self {
        match seed {
            Some(seed) => Self::seeded(seed),
            None => Self::new(),
        }
    }

    fn baseline(category: MarketCategory) -> f64 {
        match category {
            MarketCategory::Stocks => 68.0,
            MarketCategory::Crypto => 72.0,
            MarketCategory::RealEstate => 45.0,
            MarketCategory::Forex => 52.0,
            MarketCategory::Indices => 61.0,
        }
    }

    fn baseline_correlation(a: MarketCategory, b: MarketCategory) -> f64 {
        use MarketCategory::*;
        if a == b {
            return 1.0;
        }
        let pair = if a < b { (a, b) } else { (b, a) };
        match pair {
            (Stocks, Crypto) => 0.45,
            (Stocks, RealEstate) => 0.35,
            (Stocks, Forex) => -0.15,
            (Stocks, Indices) => 0.92,
            (Crypto, RealEstate) => 0.10,
            (Crypto, Forex) => -0.05,
            (Crypto, Indices) => 0.40,
            (RealEstate, Forex) => -0.20,
            (RealEstate, Indices) => 0.30,
            (Forex, Indices) => -0.12,
            _ => 0.0,
        }
    }

    fn headlines(category: MarketCategory) -> &'static [Headline] {
        match category {
            MarketCategory::Stocks => &[
                Headline { title: "Tech earnings beat expectations as AI spending accelerates", source: "MarketWatch", symbols: &["NVDA", "MSFT"] },
                Headline { title: "Bank stocks slip on renewed credit concerns", source: "Reuters", symbols: &["JPM", "BAC"] },
                Headline { title: "Retail sales data lifts consumer discretionary names", source: "Bloomberg", symbols: &["AMZN", "HD"] },
                Headline { title: "Energy sector rallies as crude inventories fall", source: "CNBC", symbols: &["XOM", "CVX"] },
            ],
            MarketCategory::Crypto => &[
                Headline { title: "Bitcoin ETF inflows hit weekly record", source: "CoinDesk", symbols: &["BTC"] },
                Headline { title: "Ethereum upgrade reduces layer-2 fees", source: "The Block", symbols: &["ETH"] },
                Headline { title: "Regulators signal tighter oversight of stablecoins", source: "Reuters", symbols: &["USDT", "USDC"] },
                Headline { title: "Solana network activity climbs to yearly high", source: "Decrypt", symbols: &["SOL"] },
            ],
            MarketCategory::RealEstate => &[
                Headline { title: "Mortgage rates edge lower for third straight week", source: "Bloomberg", symbols: &["VNQ"] },
                Headline { title: "Commercial office vacancies remain elevated", source: "Wall Street Journal", symbols: &["BXP", "SLG"] },
                Headline { title: "Housing starts surprise to the upside", source: "Reuters", symbols: &["DHI", "LEN"] },
                Headline { title: "REITs rebound as yields stabilize", source: "Barron's", symbols: &["O", "PLD"] },
            ],
            MarketCategory::Forex => &[
                Headline { title: "Dollar firms ahead of central bank minutes", source: "Reuters", symbols: &["DXY"] },
                Headline { title: "Yen weakens as policy divergence widens", source: "Bloomberg", symbols: &["USDJPY"] },
                Headline { title: "Euro steadies after inflation print", source: "Financial Times", symbols: &["EURUSD"] },
                Headline { title: "Emerging market currencies gain on risk appetite", source: "CNBC", symbols: &["USDMXN", "USDBRL"] },
            ],
            MarketCategory::Indices => &[
                Headline { title: "S&P 500 closes at record high", source: "CNBC", symbols: &["SPX"] },
                Headline { title: "Nasdaq volatility spikes into options expiry", source: "MarketWatch", symbols: &["NDX", "VIX"] },
                Headline { title: "Small caps lag as rate-cut bets fade", source: "Bloomberg", symbols: &["RUT"] },
                Headline { title: "European indices track global gains", source: "Reuters", symbols: &["STOXX50E", "DAX"] },
            ],
        }
    }
}

impl Default for MockMarketData {
    fn default() -> Self {
        Self::new()
    }
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

#[async_trait]
impl MarketDataProvider for MockMarketData {
    async fn get_sentiment(&self, category: MarketCategory) -> Result<SentimentReading> {
        let mut rng = self.rng.lock();
        let jitter = rng.gen_range(-SCORE_JITTER..=SCORE_JITTER);
        let score = round_to((Self::baseline(category) + jitter).clamp(0.0, 100.0), 1);
        let trend = round_to(rng.gen_range(-TREND_RANGE..=TREND_RANGE), 1);

        Ok(SentimentReading {
            category,
            score,
            trend,
            updated_at: Utc::now(),
        })
    }

    async fn get_news(&self, category: MarketCategory) -> Result<Vec<NewsItem>> {
        let mut rng = self.rng.lock();
        let now = Utc::now();
        let mut minutes_ago = 0i64;

        let items = Self::headlines(category)
            .iter()
            .take(NEWS_PER_CATEGORY)
            .enumerate()
            .map(|(i, headline)| {
                minutes_ago += rng.gen_range(15..=180);
                let id = Uuid::new_v4();
                let sentiment = round_to(rng.gen_range(-1.0..=1.0), 2);

                let ai_validation = (i % 2 == 0).then(|| {
                    let score: u8 = rng.gen_range(60..=95);
                    AiValidation {
                        score,
                        summary: format!(
                            "Headline corroborated by {} independent sources with {} tone.",
                            rng.gen_range(2..=6),
                            if sentiment >= 0.0 { "positive" } else { "negative" }
                        ),
                    }
                });

                NewsItem {
                    id,
                    title: headline.title.to_string(),
                    source: headline.source.to_string(),
                    url: format!("https://news.example.com/{}/{}", category.as_str(), id),
                    published_at: now - Duration::minutes(minutes_ago),
                    sentiment,
                    sectors: vec![category],
                    symbols: headline.symbols.iter().map(|s| s.to_string()).collect(),
                    ai_validation,
                }
            })
            .collect();

        Ok(items)
    }

    async fn get_correlations(&self) -> Result<CorrelationMatrix> {
        let mut rng = self.rng.lock();
        let categories = MarketCategory::ALL.to_vec();
        let n = categories.len();
        let mut values = vec![vec![0.0; n]; n];

        for i in 0..n {
            values[i][i] = 1.0;
            for j in (i + 1)..n {
                let base = Self::baseline_correlation(categories[i], categories[j]);
                let jitter = rng.gen_range(-CORRELATION_JITTER..=CORRELATION_JITTER);
                let value = round_to((base + jitter).clamp(-1.0, 1.0), 2);
                values[i][j] = value;
                values[j][i] = value;
            }
        }

        Ok(CorrelationMatrix { categories, values })
    }
}
