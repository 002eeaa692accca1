//! Threshold-band classifier

use super::directive;
use super::trend::{trend_indicator, TrendIndicator};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Named threshold scheme
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ThresholdScheme {
    /// 70 / 55 / 45 / 30 cut points, used by most widgets
    #[default]
    #[serde(rename = "five-band")]
    FiveBand,
    /// 71 / 41 cut points, used by the core sentiment meter
    #[serde(rename = "three-band")]
    ThreeBand,
}

impl ThresholdScheme {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThresholdScheme::FiveBand => "five-band",
            ThresholdScheme::ThreeBand => "three-band",
        }
    }

    /// Bands ordered from the highest lower bound down. The last band has
    /// no lower bound and catches everything below the previous cut.
    fn bands(&self) -> &'static [Band] {
        match self {
            ThresholdScheme::FiveBand => FIVE_BAND,
            ThresholdScheme::ThreeBand => THREE_BAND,
        }
    }
}

impl fmt::Display for ThresholdScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThresholdScheme {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "five-band" | "five_band" | "5" => Ok(ThresholdScheme::FiveBand),
            "three-band" | "three_band" | "3" => Ok(ThresholdScheme::ThreeBand),
            other => Err(AppError::Validation(format!(
                "Unknown threshold scheme '{}', expected five-band or three-band",
                other
            ))),
        }
    }
}

/// Category label derived from a score
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SentimentCategory {
    Bullish,
    ModeratelyBullish,
    Neutral,
    ModeratelyBearish,
    Bearish,
    HighConfidence,
    PoorSentiment,
}

impl SentimentCategory {
    pub fn label(&self) -> &'static str {
        match self {
            SentimentCategory::Bullish => "Bullish",
            SentimentCategory::ModeratelyBullish => "Moderately Bullish",
            SentimentCategory::Neutral => "Neutral",
            SentimentCategory::ModeratelyBearish => "Moderately Bearish",
            SentimentCategory::Bearish => "Bearish",
            SentimentCategory::HighConfidence => "High Confidence",
            SentimentCategory::PoorSentiment => "Poor Sentiment",
        }
    }
}

impl fmt::Display for SentimentCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Presentation color token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorBucket {
    Green,
    Lime,
    Gray,
    Orange,
    Red,
    Amber,
}

impl ColorBucket {
    pub fn as_str(&self) -> &'static str {
        match self {
            ColorBucket::Green => "green",
            ColorBucket::Lime => "lime",
            ColorBucket::Gray => "gray",
            ColorBucket::Orange => "orange",
            ColorBucket::Red => "red",
            ColorBucket::Amber => "amber",
        }
    }
}

impl fmt::Display for ColorBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

pub(super) struct Band {
    min: Option<f64>,
    category: SentimentCategory,
    color: ColorBucket,
    /// Investor directive, only present on five-band entries
    pub(super) directive: Option<&'static str>,
}

const FIVE_BAND: &[Band] = &[
    Band {
        min: Some(70.0),
        category: SentimentCategory::Bullish,
        color: ColorBucket::Green,
        directive: Some(directive::STRONG_BULLISH),
    },
    Band {
        min: Some(55.0),
        category: SentimentCategory::ModeratelyBullish,
        color: ColorBucket::Lime,
        directive: Some(directive::MODERATELY_BULLISH),
    },
    Band {
        min: Some(45.0),
        category: SentimentCategory::Neutral,
        color: ColorBucket::Gray,
        directive: Some(directive::NEUTRAL),
    },
    Band {
        min: Some(30.0),
        category: SentimentCategory::ModeratelyBearish,
        color: ColorBucket::Orange,
        directive: Some(directive::MODERATELY_BEARISH),
    },
    Band {
        min: None,
        category: SentimentCategory::Bearish,
        color: ColorBucket::Red,
        directive: Some(directive::STRONG_BEARISH),
    },
];

const THREE_BAND: &[Band] = &[
    Band { min: Some(71.0), category: SentimentCategory::HighConfidence, color: ColorBucket::Green, directive: None },
    Band { min: Some(41.0), category: SentimentCategory::Neutral, color: ColorBucket::Amber, directive: None },
    Band { min: None, category: SentimentCategory::PoorSentiment, color: ColorBucket::Red, directive: None },
];

/// Result of classifying a score
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub score: f64,
    pub display_score: String,
    pub scheme: ThresholdScheme,
    pub category: SentimentCategory,
    pub label: &'static str,
    pub color_bucket: ColorBucket,
    pub trend: TrendIndicator,
    /// Set only on the overall market sentiment view
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directive: Option<String>,
}

/// Classify a score under the given scheme.
///
/// Scores outside 0-100 are not clamped: they land in the highest or
/// lowest band. A NaN score fails every cut and lands in the lowest band.
/// No directive is attached; see [`directive_for`](super::directive_for).
pub fn classify(score: f64, trend: f64, scheme: ThresholdScheme) -> Classification {
    let band = band_for(score, scheme);

    Classification {
        score,
        display_score: format_score(score),
        scheme,
        category: band.category,
        label: band.category.label(),
        color_bucket: band.color,
        trend: trend_indicator(trend),
        directive: None,
    }
}

pub(super) fn band_for(score: f64, scheme: ThresholdScheme) -> &'static Band {
    let bands = scheme.bands();
    bands
        .iter()
        .find(|band| band.min.map_or(true, |min| score >= min))
        .unwrap_or(&bands[bands.len() - 1])
}

/// One-decimal display of a score
pub fn format_score(score: f64) -> String {
    format!("{:.1}", score)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn five(score: f64) -> (SentimentCategory, ColorBucket) {
        let c = classify(score, 0.0, ThresholdScheme::FiveBand);
        (c.category, c.color_bucket)
    }

    fn three(score: f64) -> (SentimentCategory, ColorBucket) {
        let c = classify(score, 0.0, ThresholdScheme::ThreeBand);
        (c.category, c.color_bucket)
    }

    #[test]
    fn test_five_band_ranges() {
        for score in [70.0, 82.0, 100.0] {
            assert_eq!(five(score), (SentimentCategory::Bullish, ColorBucket::Green));
        }
        for score in [55.0, 62.5, 69.99] {
            assert_eq!(five(score), (SentimentCategory::ModeratelyBullish, ColorBucket::Lime));
        }
        for score in [45.0, 50.0, 54.9] {
            assert_eq!(five(score), (SentimentCategory::Neutral, ColorBucket::Gray));
        }
        for score in [30.0, 40.0, 44.9] {
            assert_eq!(five(score), (SentimentCategory::ModeratelyBearish, ColorBucket::Orange));
        }
        for score in [0.0, 10.0, 29.99] {
            assert_eq!(five(score), (SentimentCategory::Bearish, ColorBucket::Red));
        }
    }

    #[test]
    fn test_three_band_ranges() {
        for score in [71.0, 90.0, 100.0] {
            assert_eq!(three(score), (SentimentCategory::HighConfidence, ColorBucket::Green));
        }
        for score in [41.0, 55.0, 70.99] {
            assert_eq!(three(score), (SentimentCategory::Neutral, ColorBucket::Amber));
        }
        for score in [0.0, 20.0, 40.99] {
            assert_eq!(three(score), (SentimentCategory::PoorSentiment, ColorBucket::Red));
        }
    }

    #[test]
    fn test_boundaries_are_lower_closed() {
        assert_eq!(five(70.0).0, SentimentCategory::Bullish);
        assert_eq!(five(55.0).0, SentimentCategory::ModeratelyBullish);
        assert_eq!(five(45.0).0, SentimentCategory::Neutral);
        assert_eq!(five(30.0).0, SentimentCategory::ModeratelyBearish);

        assert_eq!(three(71.0).0, SentimentCategory::HighConfidence);
        assert_eq!(three(70.0).0, SentimentCategory::Neutral);
        assert_eq!(three(41.0).0, SentimentCategory::Neutral);
        assert_eq!(three(40.0).0, SentimentCategory::PoorSentiment);
    }

    #[test]
    fn test_out_of_range_falls_through() {
        assert_eq!(five(150.0).0, SentimentCategory::Bullish);
        assert_eq!(five(-20.0).0, SentimentCategory::Bearish);
        assert_eq!(three(101.0).0, SentimentCategory::HighConfidence);
        assert_eq!(three(-1.0).0, SentimentCategory::PoorSentiment);
        assert_eq!(five(f64::NAN).0, SentimentCategory::Bearish);
    }

    #[test]
    fn test_classify_never_attaches_directive() {
        for scheme in [ThresholdScheme::FiveBand, ThresholdScheme::ThreeBand] {
            for score in [10.0, 50.0, 82.0] {
                assert!(classify(score, 1.2, scheme).directive.is_none());
            }
        }
        let json = serde_json::to_value(classify(82.0, 0.0, ThresholdScheme::FiveBand)).unwrap();
        assert!(json.get("directive").is_none());
    }

    #[test]
    fn test_directive_text_only_on_five_band_table() {
        assert!(FIVE_BAND.iter().all(|b| b.directive.is_some()));
        assert!(THREE_BAND.iter().all(|b| b.directive.is_none()));
    }

    #[test]
    fn test_classification_is_idempotent() {
        let a = classify(57.3, -0.4, ThresholdScheme::FiveBand);
        let b = classify(57.3, -0.4, ThresholdScheme::FiveBand);
        assert_eq!(a, b);
    }

    #[test]
    fn test_labels_and_display() {
        let c = classify(62.0, 0.0, ThresholdScheme::FiveBand);
        assert_eq!(c.label, "Moderately Bullish");
        assert_eq!(c.display_score, "62.0");
        assert_eq!(classify(20.0, 0.0, ThresholdScheme::ThreeBand).label, "Poor Sentiment");
    }

    #[test]
    fn test_scheme_parsing() {
        assert_eq!("five-band".parse::<ThresholdScheme>().unwrap(), ThresholdScheme::FiveBand);
        assert_eq!("THREE-BAND".parse::<ThresholdScheme>().unwrap(), ThresholdScheme::ThreeBand);
        assert!("seven-band".parse::<ThresholdScheme>().is_err());
        assert_eq!(ThresholdScheme::ThreeBand.to_string(), "three-band");
    }

    #[test]
    fn test_serialized_shape() {
        let c = classify(72.0, 0.5, ThresholdScheme::FiveBand);
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["scheme"], "five-band");
        assert_eq!(json["category"], "bullish");
        assert_eq!(json["label"], "Bullish");
        assert_eq!(json["color_bucket"], "green");
        assert_eq!(json["trend"]["direction"], "up");
    }
}
