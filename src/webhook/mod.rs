//! Webhook and REST API server module
//!
//! Provides:
//! - IFTTT webhook intake (/api/webhook/ifttt), forwarded to the backend's
//!   `process_ifttt_webhook` function
//! - Dashboard REST API (/api/sentiment, /api/news, /api/correlations,
//!   /api/alerts)
//!
//! Usage:
//! 1. Set MARKETPULSE_BACKEND_URL and MARKETPULSE_PUBLIC_API_KEY
//! 2. Start the service
//! 3. Point the IFTTT applet at `<host>/api/webhook/ifttt`

mod server;
pub mod handlers;
mod rate_limiter;
mod types;

pub use server::{router, WebhookServer};
pub use types::{
    ApiResponse,
    ClassifyRequest,
    SchemeQuery,
    AlertStatusRequest,
    Empty,
};
