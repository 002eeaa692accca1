//! Webhook Service
//!
//! Forwards IFTTT webhook payloads to the backend's processing function.

use crate::remote::RemoteFunctions;
use serde::Serialize;
use serde_json::Value;
use tracing::{error, info};

/// Remote function that validates and stores IFTTT payloads
pub const IFTTT_FUNCTION: &str = "process_ifttt_webhook";

/// Result of forwarding a webhook
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WebhookOutcome {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl WebhookOutcome {
    pub fn ok(data: Value) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }

    pub fn failed(error: String) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(error),
        }
    }
}

pub struct WebhookService;

impl WebhookService {
    /// Forward `payload` verbatim with a single remote invocation.
    /// Errors are logged and folded into the outcome.
    pub async fn handle_ifttt_webhook(remote: &dyn RemoteFunctions, payload: Value) -> WebhookOutcome {
        info!("WebhookService::handle_ifttt_webhook");

        match remote.invoke(IFTTT_FUNCTION, payload).await {
            Ok(data) => WebhookOutcome::ok(data),
            Err(e) => {
                error!("Error processing IFTTT webhook: {}", e);
                WebhookOutcome::failed(e.to_string())
            }
        }
    }
}
