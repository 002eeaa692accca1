//! HTTP server for webhooks and REST API
//!
//! Provides:
//! - IFTTT webhook intake (/api/webhook/ifttt)
//! - Dashboard REST API (/api/*)
//! - Rate limiting per route class

use crate::error::{AppError, Result};
use crate::state::AppState;
use crate::webhook::handlers;
use crate::webhook::rate_limiter::{rate_limit_middleware, RateLimiter};
use axum::{
    middleware,
    routing::{get, post, put},
    Router,
};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::oneshot;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{error, info};

/// Build the application router
pub fn router(state: Arc<AppState>) -> Router {
    let rate_limiter = Arc::new(RateLimiter::new(
        state.config.server.api_rate_limit,
        state.config.server.webhook_rate_limit,
    ));

    // Dashboard clients are served from other origins
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // ================================================================
        // Health check
        // ================================================================
        .route("/health", get(handlers::health_check))
        .route("/", get(handlers::health_check))

        // ================================================================
        // Webhook intake
        // ================================================================
        .route("/api/webhook/ifttt", post(handlers::ifttt_webhook))

        // ================================================================
        // Sentiment
        // ================================================================
        .route("/api/sentiment", get(handlers::get_overview))
        .route("/api/sentiment/classify", post(handlers::classify_score))
        .route("/api/sentiment/:category", get(handlers::get_category_sentiment))

        // ================================================================
        // News & correlations
        // ================================================================
        .route("/api/news/:category", get(handlers::get_news))
        .route("/api/correlations", get(handlers::get_correlations))

        // ================================================================
        // Alerts
        // ================================================================
        .route("/api/alerts", get(handlers::list_alerts).post(handlers::create_alert))
        .route(
            "/api/alerts/:id",
            get(handlers::get_alert)
                .put(handlers::update_alert)
                .delete(handlers::delete_alert),
        )
        .route("/api/alerts/:id/toggle", post(handlers::toggle_alert))
        .route("/api/alerts/:id/status", put(handlers::set_alert_status))

        // ================================================================
        // Add state and middleware
        // ================================================================
        .with_state(state)
        .layer(middleware::from_fn_with_state(rate_limiter, rate_limit_middleware))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// Webhook/API server manager
pub struct WebhookServer {
    state: Arc<AppState>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl WebhookServer {
    /// Create a new server
    pub fn new(state: Arc<AppState>) -> Self {
        Self {
            state,
            shutdown_tx: None,
        }
    }

    /// Bind and start serving in the background. Returns the bound address.
    pub async fn start(&mut self) -> Result<SocketAddr> {
        let addr = self.state.config.server.socket_addr()?;
        let app = router(self.state.clone());

        let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .map_err(|e| AppError::Config(format!("Failed to bind to {}: {}", addr, e)))?;
        let local_addr = listener.local_addr()?;

        info!("Starting MarketPulse API server on {}", local_addr);

        tokio::spawn(async move {
            let server = axum::serve(listener, app).with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
                info!("API server shutting down");
            });

            if let Err(e) = server.await {
                error!("API server error: {}", e);
            }
        });

        self.shutdown_tx = Some(shutdown_tx);

        info!("=== Endpoints ===");
        info!("  GET  http://{}/health", local_addr);
        info!("  POST http://{}/api/webhook/ifttt", local_addr);
        info!("  GET  http://{}/api/sentiment[/{{category}}]", local_addr);
        info!("  POST http://{}/api/sentiment/classify", local_addr);
        info!("  GET  http://{}/api/news/{{category}}", local_addr);
        info!("  GET  http://{}/api/correlations", local_addr);
        info!("  *    http://{}/api/alerts", local_addr);

        Ok(local_addr)
    }

    /// Stop the server
    pub fn stop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
            info!("API server stop signal sent");
        }
    }

    /// Check if server is running
    pub fn is_running(&self) -> bool {
        self.shutdown_tx.is_some()
    }
}

impl Drop for WebhookServer {
    fn drop(&mut self) {
        self.stop();
    }
}
