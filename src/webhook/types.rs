//! REST API request and response types

use crate::alerts::AlertStatus;
use crate::sentiment::ThresholdScheme;
use serde::{Deserialize, Deserializer, Serialize};

/// Deserialize a value that can be either a number or a string representation of a number
fn deserialize_flexible_f64<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum FlexibleFloat {
        Float(f64),
        Int(i64),
        Str(String),
    }

    match FlexibleFloat::deserialize(deserializer)? {
        FlexibleFloat::Float(f) => Ok(f),
        FlexibleFloat::Int(i) => Ok(i as f64),
        FlexibleFloat::Str(s) => s.trim().parse().map_err(serde::de::Error::custom),
    }
}

fn default_f64() -> f64 {
    0.0
}

// ============================================================================
// Common Types
// ============================================================================

/// Standard API response format
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    pub fn success_with_message(message: &str) -> Self {
        Self {
            status: "success".to_string(),
            message: Some(message.to_string()),
            data: None,
        }
    }

    pub fn success_with_data(data: T) -> Self {
        Self {
            status: "success".to_string(),
            message: None,
            data: Some(data),
        }
    }
}

/// Empty data type for responses without data
#[derive(Debug, Clone, Serialize)]
pub struct Empty {}

// ============================================================================
// Request Types
// ============================================================================

/// Classify request - POST /api/sentiment/classify
///
/// Numbers may arrive as strings from form-driven clients.
#[derive(Debug, Clone, Deserialize)]
pub struct ClassifyRequest {
    #[serde(deserialize_with = "deserialize_flexible_f64")]
    pub score: f64,
    #[serde(default = "default_f64", deserialize_with = "deserialize_flexible_f64")]
    pub trend: f64,
    #[serde(default)]
    pub scheme: ThresholdScheme,
}

/// Query string for GET /api/sentiment/:category
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SchemeQuery {
    pub scheme: Option<String>,
}

/// Status change - PUT /api/alerts/:id/status
#[derive(Debug, Clone, Deserialize)]
pub struct AlertStatusRequest {
    pub status: AlertStatus,
}
