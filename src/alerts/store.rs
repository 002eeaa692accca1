//! In-memory alert registry

use super::types::*;
use crate::error::{AppError, Result};
use chrono::Utc;
use dashmap::DashMap;
use uuid::Uuid;

/// Alert registry keyed by id
#[derive(Debug, Default)]
pub struct AlertStore {
    alerts: DashMap<Uuid, Alert>,
}

fn validate_threshold(threshold: f64) -> Result<()> {
    if !threshold.is_finite() {
        return Err(AppError::Validation("Threshold must be a finite number".to_string()));
    }
    Ok(())
}

fn normalize_symbol(symbol: Option<String>) -> Option<String> {
    symbol
        .map(|s| s.trim().to_uppercase())
        .filter(|s| !s.is_empty())
}

fn not_found(id: Uuid) -> AppError {
    AppError::NotFound(format!("Alert {}", id))
}

impl AlertStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an alert. New alerts are active and pending.
    pub fn create(&self, request: NewAlert) -> Result<Alert> {
        validate_threshold(request.threshold)?;

        let now = Utc::now();
        let alert = Alert {
            id: Uuid::new_v4(),
            sector: request.sector,
            symbol: normalize_symbol(request.symbol),
            condition: request.condition,
            threshold: request.threshold,
            notification: request.notification,
            active: true,
            status: AlertStatus::Pending,
            created_at: now,
            updated_at: now,
        };

        self.alerts.insert(alert.id, alert.clone());
        Ok(alert)
    }

    /// All alerts, oldest first
    pub fn list(&self) -> Vec<Alert> {
        let mut alerts: Vec<Alert> = self.alerts.iter().map(|r| r.value().clone()).collect();
        alerts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        alerts
    }

    pub fn get(&self, id: Uuid) -> Result<Alert> {
        self.alerts
            .get(&id)
            .map(|r| r.value().clone())
            .ok_or_else(|| not_found(id))
    }

    pub fn update(&self, id: Uuid, update: AlertUpdate) -> Result<Alert> {
        if let Some(threshold) = update.threshold {
            validate_threshold(threshold)?;
        }

        let mut entry = self.alerts.get_mut(&id).ok_or_else(|| not_found(id))?;
        let alert = entry.value_mut();

        if let Some(sector) = update.sector {
            alert.sector = sector;
        }
        if update.symbol.is_some() {
            alert.symbol = normalize_symbol(update.symbol);
        }
        if let Some(condition) = update.condition {
            alert.condition = condition;
        }
        if let Some(threshold) = update.threshold {
            alert.threshold = threshold;
        }
        if let Some(notification) = update.notification {
            alert.notification = notification;
        }
        alert.updated_at = Utc::now();

        Ok(alert.clone())
    }

    pub fn delete(&self, id: Uuid) -> Result<Alert> {
        self.alerts
            .remove(&id)
            .map(|(_, alert)| alert)
            .ok_or_else(|| not_found(id))
    }

    /// Flip the active flag. Deactivated alerts become inactive,
    /// reactivated ones return to pending.
    pub fn toggle(&self, id: Uuid) -> Result<Alert> {
        let mut entry = self.alerts.get_mut(&id).ok_or_else(|| not_found(id))?;
        let alert = entry.value_mut();

        alert.active = !alert.active;
        alert.status = if alert.active {
            AlertStatus::Pending
        } else {
            AlertStatus::Inactive
        };
        alert.updated_at = Utc::now();

        Ok(alert.clone())
    }

    /// Record a user-driven status change
    pub fn set_status(&self, id: Uuid, status: AlertStatus) -> Result<Alert> {
        let mut entry = self.alerts.get_mut(&id).ok_or_else(|| not_found(id))?;
        let alert = entry.value_mut();

        alert.status = status;
        alert.active = status != AlertStatus::Inactive;
        alert.updated_at = Utc::now();

        Ok(alert.clone())
    }

    pub fn len(&self) -> usize {
        self.alerts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.alerts.is_empty()
    }
}
