//! Trend delta indicators

use super::classifier::ColorBucket;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn icon(&self) -> &'static str {
        match self {
            TrendDirection::Up => "arrow-up",
            TrendDirection::Down => "arrow-down",
            TrendDirection::Flat => "minus",
        }
    }

    pub fn color(&self) -> ColorBucket {
        match self {
            TrendDirection::Up => ColorBucket::Green,
            TrendDirection::Down => ColorBucket::Red,
            TrendDirection::Flat => ColorBucket::Gray,
        }
    }
}

/// Display-ready trend information
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TrendIndicator {
    pub delta: f64,
    pub direction: TrendDirection,
    pub icon: &'static str,
    pub color: ColorBucket,
    /// One decimal, `+` prefix on positive values
    pub display: String,
}

/// Build the indicator for a trend delta
pub fn trend_indicator(delta: f64) -> TrendIndicator {
    let direction = if delta > 0.0 {
        TrendDirection::Up
    } else if delta < 0.0 {
        TrendDirection::Down
    } else {
        TrendDirection::Flat
    };

    // -0.0 is flat and must not render a sign
    let display = match direction {
        TrendDirection::Up => format!("+{:.1}", delta),
        TrendDirection::Down => format!("{:.1}", delta),
        TrendDirection::Flat => format!("{:.1}", 0.0),
    };

    TrendIndicator {
        delta,
        direction,
        icon: direction.icon(),
        color: direction.color(),
        display,
    }
}
