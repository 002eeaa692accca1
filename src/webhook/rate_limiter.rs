//! Per-route-class request throttling
//!
//! Two independent token buckets sit in front of the router:
//! - dashboard reads and alert management: api_rate_limit (default 100/s)
//! - IFTTT intake, which costs a remote call per request: webhook_rate_limit
//!   (default 10/s)
//!
//! A throttled request answers 429 with `Retry-After`, in the envelope its
//! route normally uses: `{success:false, error}` for the webhook and the
//! `AppError` body everywhere else.

use crate::error::AppError;
use crate::services::WebhookOutcome;
use axum::{
    body::Body,
    extract::State,
    http::{HeaderValue, Request, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
    Json,
};
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Which bucket a request draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteClass {
    Dashboard,
    Webhook,
}

impl RouteClass {
    pub fn for_path(path: &str) -> Self {
        if path.starts_with("/api/webhook") {
            RouteClass::Webhook
        } else {
            RouteClass::Dashboard
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RouteClass::Dashboard => "dashboard",
            RouteClass::Webhook => "webhook",
        }
    }
}

/// Requests-per-second budget, refilled continuously up to one second's worth
#[derive(Debug)]
struct Budget {
    per_second: f64,
    available: f64,
    updated: Instant,
}

impl Budget {
    fn new(per_second: u32, now: Instant) -> Self {
        Self {
            per_second: per_second as f64,
            available: per_second as f64,
            updated: now,
        }
    }

    /// Spend one request at `now`, or report how long until one is free
    fn spend(&mut self, now: Instant) -> Result<(), Duration> {
        let elapsed = now.saturating_duration_since(self.updated).as_secs_f64();
        self.available = (self.available + elapsed * self.per_second).min(self.per_second);
        self.updated = now;

        if self.available >= 1.0 {
            self.available -= 1.0;
            return Ok(());
        }

        if self.per_second <= 0.0 {
            return Err(Duration::from_secs(1));
        }
        Err(Duration::from_secs_f64((1.0 - self.available) / self.per_second))
    }
}

/// Shared throttling state, one budget per route class
#[derive(Debug)]
pub struct RateLimiter {
    dashboard: Mutex<Budget>,
    webhook: Mutex<Budget>,
}

impl RateLimiter {
    pub fn new(api_rate: u32, webhook_rate: u32) -> Self {
        let now = Instant::now();
        Self {
            dashboard: Mutex::new(Budget::new(api_rate, now)),
            webhook: Mutex::new(Budget::new(webhook_rate, now)),
        }
    }

    /// Admit one request of `class`, or return the wait before retrying
    pub fn check(&self, class: RouteClass) -> Result<(), Duration> {
        self.check_at(class, Instant::now())
    }

    fn check_at(&self, class: RouteClass, now: Instant) -> Result<(), Duration> {
        let budget = match class {
            RouteClass::Dashboard => &self.dashboard,
            RouteClass::Webhook => &self.webhook,
        };
        budget.lock().spend(now)
    }
}

/// Throttling middleware
pub async fn rate_limit_middleware(
    State(limiter): State<Arc<RateLimiter>>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let class = RouteClass::for_path(request.uri().path());

    if let Err(wait) = limiter.check(class) {
        tracing::warn!(
            "Rate limit exceeded for {} route {}, retry after {}ms",
            class.label(),
            request.uri().path(),
            wait.as_millis()
        );
        return throttled_response(class, wait);
    }

    next.run(request).await
}

fn throttled_response(class: RouteClass, wait: Duration) -> Response {
    let retry_seconds = wait.as_secs_f64().ceil().max(1.0) as u64;
    let message = format!(
        "Too many {} requests, retry after {} seconds",
        class.label(),
        retry_seconds
    );

    let mut response = match class {
        RouteClass::Webhook => {
            (StatusCode::TOO_MANY_REQUESTS, Json(WebhookOutcome::failed(message))).into_response()
        }
        RouteClass::Dashboard => AppError::RateLimited(message).into_response(),
    };

    response
        .headers_mut()
        .insert("Retry-After", HeaderValue::from(retry_seconds));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_route_classes() {
        assert_eq!(RouteClass::for_path("/api/webhook/ifttt"), RouteClass::Webhook);
        assert_eq!(RouteClass::for_path("/api/sentiment/crypto"), RouteClass::Dashboard);
        assert_eq!(RouteClass::for_path("/api/alerts"), RouteClass::Dashboard);
        assert_eq!(RouteClass::for_path("/health"), RouteClass::Dashboard);
    }

    #[test]
    fn test_webhook_burst_then_wait() {
        let start = Instant::now();
        let limiter = RateLimiter::new(100, 10);

        for _ in 0..10 {
            assert!(limiter.check_at(RouteClass::Webhook, start).is_ok());
        }
        let wait = limiter.check_at(RouteClass::Webhook, start).unwrap_err();
        assert!(wait > Duration::ZERO && wait <= Duration::from_millis(100));

        // 150ms at 10/s buys back one and a half webhooks
        let later = start + Duration::from_millis(150);
        assert!(limiter.check_at(RouteClass::Webhook, later).is_ok());
        assert!(limiter.check_at(RouteClass::Webhook, later).is_err());
    }

    #[test]
    fn test_idle_time_does_not_bank_past_one_second() {
        let start = Instant::now();
        let limiter = RateLimiter::new(100, 2);

        let much_later = start + Duration::from_secs(60);
        assert!(limiter.check_at(RouteClass::Webhook, much_later).is_ok());
        assert!(limiter.check_at(RouteClass::Webhook, much_later).is_ok());
        assert!(limiter.check_at(RouteClass::Webhook, much_later).is_err());
    }

    #[test]
    fn test_classes_are_independent() {
        let start = Instant::now();
        let limiter = RateLimiter::new(100, 1);

        assert!(limiter.check_at(RouteClass::Webhook, start).is_ok());
        assert!(limiter.check_at(RouteClass::Webhook, start).is_err());
        assert!(limiter.check_at(RouteClass::Dashboard, start).is_ok());
    }

    #[tokio::test]
    async fn test_webhook_throttle_uses_outcome_envelope() {
        let response = throttled_response(RouteClass::Webhook, Duration::from_millis(300));
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()["Retry-After"], "1");

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert!(body["error"].as_str().unwrap().contains("webhook"));
        assert!(body.get("status").is_none());
    }

    #[tokio::test]
    async fn test_dashboard_throttle_uses_error_envelope() {
        let response = throttled_response(RouteClass::Dashboard, Duration::from_millis(1500));
        assert_eq!(response.status(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.headers()["Retry-After"], "2");

        let body = body_json(response).await;
        assert_eq!(body["status"], "error");
        assert_eq!(body["error"]["code"], "RATE_LIMITED");
    }
}
