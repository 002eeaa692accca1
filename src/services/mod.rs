//! Services Layer
//!
//! Business logic called by the REST API handlers and background tasks.
//!
//! # Architecture
//!
//! ```text
//! REST API ────────┐
//!                  ├──> Services --> Market data / Alert store / Remote backend
//! Scheduler ───────┘
//! ```
//!
//! # Services
//!
//! - `SentimentService` - Category sentiment, overview, ad-hoc classification
//! - `MarketService` - News feeds, correlation matrix
//! - `AlertService` - Alert CRUD
//! - `WebhookService` - IFTTT webhook forwarding

pub mod sentiment_service;
pub mod market_service;
pub mod alert_service;
pub mod webhook_service;

// Re-export commonly used types and services
pub use sentiment_service::{SentimentService, CategorySentiment, MarketOverview};
pub use market_service::{MarketService, NewsResult};
pub use alert_service::AlertService;
pub use webhook_service::{WebhookService, WebhookOutcome, IFTTT_FUNCTION};
