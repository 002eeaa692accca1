//! Price and sentiment alerts
//!
//! Alerts are user-managed records. Their status changes only through
//! explicit actions (toggle, set status); see [`evaluate_condition`].

mod evaluator;
mod store;
pub mod types;

pub use evaluator::evaluate_condition;
pub use store::AlertStore;
pub use types::{Alert, AlertCondition, AlertStatus, AlertUpdate, NewAlert, NotificationMethod};
