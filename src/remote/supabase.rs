//! Supabase edge function client

use super::RemoteFunctions;
use crate::config::BackendConfig;
use crate::error::{AppError, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::debug;
use url::Url;

const FUNCTIONS_PATH: &str = "functions/v1/";

/// Client for `{backend_url}/functions/v1/{name}`
pub struct SupabaseFunctions {
    client: Client,
    base_url: Url,
}

impl SupabaseFunctions {
    pub fn new(config: &BackendConfig) -> Result<Self> {
        let client = Client::builder()
            .default_headers(Self::headers(&config.public_api_key)?)
            .build()?;

        // Ensure trailing slash so join() appends rather than replaces
        let mut base_url = config.url.clone();
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        Ok(Self { client, base_url })
    }

    fn headers(api_key: &str) -> Result<HeaderMap> {
        let invalid = |e: reqwest::header::InvalidHeaderValue| {
            AppError::Config(format!("Invalid public API key: {}", e))
        };

        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert("apikey", HeaderValue::from_str(api_key).map_err(invalid)?);
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", api_key)).map_err(invalid)?,
        );
        Ok(headers)
    }

    /// Full URL of a named function
    pub fn function_url(&self, name: &str) -> Result<Url> {
        self.base_url
            .join(FUNCTIONS_PATH)
            .and_then(|u| u.join(name))
            .map_err(|e| AppError::Config(format!("Invalid function URL for '{}': {}", name, e)))
    }
}

#[async_trait]
impl RemoteFunctions for SupabaseFunctions {
    async fn invoke(&self, name: &str, payload: Value) -> Result<Value> {
        let url = self.function_url(name)?;
        debug!("Invoking remote function {}", url);

        let response = self.client.post(url).json(&payload).send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            return Err(AppError::Remote(format!(
                "{} returned {}: {}",
                name, status, body
            )));
        }

        if body.trim().is_empty() {
            return Ok(Value::Null);
        }

        // Functions may answer with plain text
        Ok(serde_json::from_str(&body).unwrap_or(Value::String(body)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        http::{HeaderMap as RequestHeaders, StatusCode},
        routing::post,
        Json, Router,
    };
    use serde_json::json;

    fn config(url: &str) -> BackendConfig {
        BackendConfig {
            url: Url::parse(url).unwrap(),
            public_api_key: "anon-key".to_string(),
        }
    }

    async fn echo(headers: RequestHeaders, Json(body): Json<Value>) -> Json<Value> {
        let header = |name: &str| {
            headers
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        Json(json!({
            "apikey": header("apikey"),
            "authorization": header("authorization"),
            "body": body,
        }))
    }

    /// Local stand-in for the functions endpoint, returns its base URL
    async fn spawn_backend() -> String {
        let app = Router::new()
            .route("/functions/v1/echo", post(echo))
            .route(
                "/functions/v1/broken",
                post(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "boom") }),
            )
            .route("/functions/v1/empty", post(|| async { StatusCode::OK }))
            .route("/functions/v1/text", post(|| async { "stored" }));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    #[tokio::test]
    async fn test_invoke_sends_key_headers_and_payload() {
        let client = SupabaseFunctions::new(&config(&spawn_backend().await)).unwrap();

        let echoed = client.invoke("echo", json!({"summary": "x"})).await.unwrap();
        assert_eq!(echoed["apikey"], "anon-key");
        assert_eq!(echoed["authorization"], "Bearer anon-key");
        assert_eq!(echoed["body"], json!({"summary": "x"}));
    }

    #[tokio::test]
    async fn test_invoke_non_success_is_remote_error() {
        let client = SupabaseFunctions::new(&config(&spawn_backend().await)).unwrap();

        match client.invoke("broken", json!({})).await {
            Err(AppError::Remote(msg)) => {
                assert!(msg.contains("500"), "{}", msg);
                assert!(msg.contains("boom"), "{}", msg);
            }
            other => panic!("expected remote error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_invoke_empty_and_text_bodies() {
        let client = SupabaseFunctions::new(&config(&spawn_backend().await)).unwrap();

        assert_eq!(client.invoke("empty", json!({})).await.unwrap(), Value::Null);
        assert_eq!(
            client.invoke("text", json!({})).await.unwrap(),
            Value::String("stored".to_string())
        );
    }

    #[test]
    fn test_function_url() {
        let client = SupabaseFunctions::new(&config("https://abc.supabase.co")).unwrap();
        assert_eq!(
            client.function_url("process_ifttt_webhook").unwrap().as_str(),
            "https://abc.supabase.co/functions/v1/process_ifttt_webhook"
        );
    }

    #[test]
    fn test_function_url_keeps_base_path() {
        let client = SupabaseFunctions::new(&config("http://localhost:54321/project")).unwrap();
        assert_eq!(
            client.function_url("process_ifttt_webhook").unwrap().as_str(),
            "http://localhost:54321/project/functions/v1/process_ifttt_webhook"
        );
    }

    #[test]
    fn test_rejects_unprintable_api_key() {
        let mut cfg = config("https://abc.supabase.co");
        cfg.public_api_key = "bad\nkey".to_string();
        assert!(matches!(SupabaseFunctions::new(&cfg), Err(AppError::Config(_))));
    }
}
