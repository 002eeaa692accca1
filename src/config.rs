//! Runtime configuration loaded from the environment

use crate::error::{AppError, Result};
use std::net::SocketAddr;
use std::time::Duration;
use url::Url;

pub const ENV_BACKEND_URL: &str = "MARKETPULSE_BACKEND_URL";
pub const ENV_PUBLIC_API_KEY: &str = "MARKETPULSE_PUBLIC_API_KEY";
pub const ENV_HOST: &str = "MARKETPULSE_HOST";
pub const ENV_PORT: &str = "MARKETPULSE_PORT";
pub const ENV_REFRESH_SECS: &str = "MARKETPULSE_REFRESH_SECS";
pub const ENV_API_RATE_LIMIT: &str = "MARKETPULSE_API_RATE_LIMIT";
pub const ENV_WEBHOOK_RATE_LIMIT: &str = "MARKETPULSE_WEBHOOK_RATE_LIMIT";
pub const ENV_MOCK_SEED: &str = "MARKETPULSE_MOCK_SEED";

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8787;
const DEFAULT_REFRESH_SECS: u64 = 30;
const DEFAULT_API_RATE_LIMIT: u32 = 100;
const DEFAULT_WEBHOOK_RATE_LIMIT: u32 = 10;

/// Backend (remote function host) settings
#[derive(Debug, Clone)]
pub struct BackendConfig {
    pub url: Url,
    pub public_api_key: String,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub api_rate_limit: u32,
    pub webhook_rate_limit: u32,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid address: {}", e)))
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub backend: BackendConfig,
    pub server: ServerConfig,
    pub refresh_interval: Duration,
    pub mock_seed: Option<u64>,
}

impl AppConfig {
    /// Load configuration from process environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration through an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = required(&lookup, ENV_BACKEND_URL)?;
        let url = Url::parse(&raw_url)
            .map_err(|e| AppError::Config(format!("{} is not a valid URL: {}", ENV_BACKEND_URL, e)))?;
        let public_api_key = required(&lookup, ENV_PUBLIC_API_KEY)?;

        let server = ServerConfig {
            host: lookup(ENV_HOST).unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed(&lookup, ENV_PORT)?.unwrap_or(DEFAULT_PORT),
            api_rate_limit: positive(&lookup, ENV_API_RATE_LIMIT, DEFAULT_API_RATE_LIMIT)?,
            webhook_rate_limit: positive(&lookup, ENV_WEBHOOK_RATE_LIMIT, DEFAULT_WEBHOOK_RATE_LIMIT)?,
        };

        let refresh_secs = positive(&lookup, ENV_REFRESH_SECS, DEFAULT_REFRESH_SECS)?;

        Ok(Self {
            backend: BackendConfig { url, public_api_key },
            server,
            refresh_interval: Duration::from_secs(refresh_secs),
            mock_seed: parsed(&lookup, ENV_MOCK_SEED)?,
        })
    }
}

fn required<F>(lookup: &F, key: &str) -> Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| AppError::Config(format!("{} is not set", key)))
}

/// Optional numeric setting that must be above zero when given
fn positive<F, T>(lookup: &F, key: &str, default: T) -> Result<T>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + PartialOrd + Default,
    T::Err: std::fmt::Display,
{
    let value = parsed(lookup, key)?.unwrap_or(default);
    if value <= T::default() {
        return Err(AppError::Config(format!("{} must be positive", key)));
    }
    Ok(value)
}

fn parsed<F, T>(lookup: &F, key: &str) -> Result<Option<T>>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} has invalid value '{}': {}", key, raw, e))),
        None => Ok(None),
    }
}
