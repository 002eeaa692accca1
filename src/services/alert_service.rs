//! Alert Service
//!
//! CRUD over the alert registry.

use crate::alerts::{Alert, AlertStatus, AlertUpdate, NewAlert};
use crate::error::Result;
use crate::state::AppState;
use tracing::info;
use uuid::Uuid;

pub struct AlertService;

impl AlertService {
    pub fn list(state: &AppState) -> Vec<Alert> {
        state.alerts.list()
    }

    pub fn get(state: &AppState, id: Uuid) -> Result<Alert> {
        state.alerts.get(id)
    }

    pub fn create(state: &AppState, request: NewAlert) -> Result<Alert> {
        let alert = state.alerts.create(request)?;
        info!(
            "AlertService::create - {} {} {:?} {}",
            alert.id, alert.sector, alert.condition, alert.threshold
        );
        Ok(alert)
    }

    pub fn update(state: &AppState, id: Uuid, update: AlertUpdate) -> Result<Alert> {
        info!("AlertService::update - {}", id);
        state.alerts.update(id, update)
    }

    pub fn delete(state: &AppState, id: Uuid) -> Result<Alert> {
        info!("AlertService::delete - {}", id);
        state.alerts.delete(id)
    }

    pub fn toggle(state: &AppState, id: Uuid) -> Result<Alert> {
        let alert = state.alerts.toggle(id)?;
        info!("AlertService::toggle - {} active={}", id, alert.active);
        Ok(alert)
    }

    pub fn set_status(state: &AppState, id: Uuid, status: AlertStatus) -> Result<Alert> {
        info!("AlertService::set_status - {} {:?}", id, status);
        state.alerts.set_status(id, status)
    }
}
