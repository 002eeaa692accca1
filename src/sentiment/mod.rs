//! Sentiment classification
//!
//! Maps a 0-100 sentiment score onto a category label, a color bucket and,
//! for the overall market view, an investor directive. Two threshold
//! schemes are in use across the dashboard and both are supported:
//! - five-band: 30 / 45 / 55 / 70
//! - three-band: 41 / 71

mod classifier;
mod directive;
mod trend;

pub use classifier::{
    classify, format_score, Classification, ColorBucket, SentimentCategory, ThresholdScheme,
};
pub use directive::{directive_for, DISCLAIMER};
pub use trend::{trend_indicator, TrendDirection, TrendIndicator};
