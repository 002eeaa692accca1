//! Investor directives for the overall market sentiment view

use super::classifier::{band_for, ThresholdScheme};

/// Appended verbatim to every directive
pub const DISCLAIMER: &str = "This is data-driven AI detection technology, not financial advice.";

pub(super) const STRONG_BULLISH: &str = "Consider long positions in quality assets with strong momentum. \
     Market conditions favor risk-on strategies, but maintain stop losses.";
pub(super) const MODERATELY_BULLISH: &str = "Selective buying opportunities exist. Focus on sectors showing \
     relative strength and keep position sizes measured.";
pub(super) const NEUTRAL: &str = "Market direction is unclear. Maintain balanced exposure and wait for \
     confirmation before adding new positions.";
pub(super) const MODERATELY_BEARISH: &str = "Reduce exposure to high-beta assets. Tighten stop losses and \
     consider hedging existing positions.";
pub(super) const STRONG_BEARISH: &str = "Defensive positioning recommended. Prioritize capital preservation \
     and consider cash or safe-haven assets.";

/// Directive text for a score, taken from the five-band table
pub fn directive_for(score: f64) -> String {
    let text = band_for(score, ThresholdScheme::FiveBand)
        .directive
        .unwrap_or(NEUTRAL);

    format!("{} {}", text, DISCLAIMER)
}
