//! Scheduler module for MarketPulse
//!
//! Handles scheduled tasks including:
//! - Periodic sentiment overview refresh (default every 30 seconds)
//!
//! Every task is owned by a handle and stops when that handle is dropped.

mod interval;
mod refresh;

pub use interval::ScopedInterval;
pub use refresh::SentimentRefresher;
