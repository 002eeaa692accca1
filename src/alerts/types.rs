//! Alert types

use crate::market::MarketCategory;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AlertCondition {
    Above,
    Below,
    ChangeAbove,
    ChangeBelow,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationMethod {
    #[default]
    Email,
    Push,
    Sms,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatus {
    Pending,
    Triggered,
    Inactive,
}

/// A user-defined alert record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Alert {
    pub id: Uuid,
    pub sector: MarketCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
    pub condition: AlertCondition,
    pub threshold: f64,
    pub notification: NotificationMethod,
    pub active: bool,
    pub status: AlertStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Request to create an alert
#[derive(Debug, Clone, Deserialize)]
pub struct NewAlert {
    pub sector: MarketCategory,
    #[serde(default)]
    pub symbol: Option<String>,
    pub condition: AlertCondition,
    pub threshold: f64,
    #[serde(default)]
    pub notification: NotificationMethod,
}

/// Partial update of an alert
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AlertUpdate {
    pub sector: Option<MarketCategory>,
    pub symbol: Option<String>,
    pub condition: Option<AlertCondition>,
    pub threshold: Option<f64>,
    pub notification: Option<NotificationMethod>,
}
