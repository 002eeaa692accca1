//! Webhook and REST API endpoint handlers
//!
//! Provides handlers for:
//! - IFTTT webhook intake (/api/webhook/ifttt)
//! - Sentiment, news and correlation reads (/api/sentiment, /api/news, /api/correlations)
//! - Alert management (/api/alerts)

use crate::alerts::{Alert, AlertUpdate, NewAlert};
use crate::error::Result;
use crate::market::{CorrelationMatrix, MarketCategory};
use crate::sentiment::{Classification, ThresholdScheme};
use crate::services::{
    AlertService, CategorySentiment, MarketOverview, MarketService, NewsResult, SentimentService,
    WebhookOutcome, WebhookService,
};
use crate::state::AppState;
use crate::webhook::types::*;
use axum::{
    body::Bytes,
    extract::{Json, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::Value;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

type ApiResult<T> = Result<Json<ApiResponse<T>>>;

fn ok<T: serde::Serialize>(data: T) -> ApiResult<T> {
    Ok(Json(ApiResponse::success_with_data(data)))
}

// ============================================================================
// Health Check
// ============================================================================

/// Health check endpoint - GET /health or GET /
pub async fn health_check() -> impl IntoResponse {
    Json(ApiResponse::<Empty>::success_with_message("MarketPulse API is running"))
}

// ============================================================================
// Webhook Intake
// ============================================================================

/// IFTTT webhook - POST /api/webhook/ifttt
///
/// Body is conceptually `{summary, link, timestamp}` but is forwarded
/// verbatim without validation. IFTTT does not always send a JSON content
/// type, so the raw body is read and parsed here; anything that is not
/// JSON is answered with the failure envelope.
pub async fn ifttt_webhook(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> (StatusCode, Json<WebhookOutcome>) {
    info!("Received IFTTT webhook ({} bytes)", body.len());

    let payload: Value = match serde_json::from_slice(&body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("IFTTT webhook body is not JSON: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(WebhookOutcome::failed(format!("Invalid JSON body: {}", e))),
            );
        }
    };

    let outcome = WebhookService::handle_ifttt_webhook(state.remote.as_ref(), payload).await;
    let status = if outcome.success {
        StatusCode::OK
    } else {
        StatusCode::BAD_GATEWAY
    };

    (status, Json(outcome))
}

// ============================================================================
// Sentiment
// ============================================================================

/// Overview of all categories - GET /api/sentiment
pub async fn get_overview(State(state): State<Arc<AppState>>) -> ApiResult<MarketOverview> {
    ok(SentimentService::overview(&state).await?)
}

/// One category - GET /api/sentiment/:category?scheme=five-band|three-band
pub async fn get_category_sentiment(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
    Query(query): Query<SchemeQuery>,
) -> ApiResult<CategorySentiment> {
    let category: MarketCategory = category.parse()?;
    let scheme = match query.scheme.as_deref() {
        Some(raw) => raw.parse()?,
        None => ThresholdScheme::FiveBand,
    };

    ok(SentimentService::category(&state, category, scheme).await?)
}

/// Ad-hoc classification - POST /api/sentiment/classify
pub async fn classify_score(Json(req): Json<ClassifyRequest>) -> ApiResult<Classification> {
    ok(SentimentService::classify(req.score, req.trend, req.scheme)?)
}

// ============================================================================
// News & Correlations
// ============================================================================

/// News feed - GET /api/news/:category
pub async fn get_news(
    State(state): State<Arc<AppState>>,
    Path(category): Path<String>,
) -> ApiResult<NewsResult> {
    let category: MarketCategory = category.parse()?;
    ok(MarketService::news(&state, category).await?)
}

/// Correlation matrix - GET /api/correlations
pub async fn get_correlations(State(state): State<Arc<AppState>>) -> ApiResult<CorrelationMatrix> {
    ok(MarketService::correlations(&state).await?)
}

// ============================================================================
// Alerts
// ============================================================================

/// List alerts - GET /api/alerts
pub async fn list_alerts(State(state): State<Arc<AppState>>) -> ApiResult<Vec<Alert>> {
    ok(AlertService::list(&state))
}

/// Create alert - POST /api/alerts
pub async fn create_alert(
    State(state): State<Arc<AppState>>,
    Json(req): Json<NewAlert>,
) -> Result<(StatusCode, Json<ApiResponse<Alert>>)> {
    let alert = AlertService::create(&state, req)?;
    Ok((StatusCode::CREATED, Json(ApiResponse::success_with_data(alert))))
}

/// Get alert - GET /api/alerts/:id
pub async fn get_alert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Alert> {
    ok(AlertService::get(&state, id)?)
}

/// Update alert - PUT /api/alerts/:id
pub async fn update_alert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<AlertUpdate>,
) -> ApiResult<Alert> {
    ok(AlertService::update(&state, id, req)?)
}

/// Delete alert - DELETE /api/alerts/:id
pub async fn delete_alert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Alert> {
    let result = AlertService::delete(&state, id);
    if result.is_err() {
        warn!("Delete requested for unknown alert {}", id);
    }
    ok(result?)
}

/// Toggle alert - POST /api/alerts/:id/toggle
pub async fn toggle_alert(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
) -> ApiResult<Alert> {
    ok(AlertService::toggle(&state, id)?)
}

/// Set alert status - PUT /api/alerts/:id/status
pub async fn set_alert_status(
    State(state): State<Arc<AppState>>,
    Path(id): Path<Uuid>,
    Json(req): Json<AlertStatusRequest>,
) -> ApiResult<Alert> {
    ok(AlertService::set_status(&state, id, req.status)?)
}
