//! Configuration module for the statistics service.
//!
//! Values come from the process environment, optionally seeded from a local
//! `.env` file. Anything unset falls back to a default; anything set but
//! malformed is a startup error.

use std::env;
use std::net::SocketAddr;
use std::str::FromStr;
use std::time::Duration;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection string for the statistics store
    pub database_url: String,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Base URL of the posts/comments content API
    pub upstream_base_url: String,
    /// Period between aggregation cycles
    pub refresh_interval: Duration,
    /// Timeout applied to every outbound request
    pub upstream_timeout: Duration,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
}

impl Config {
    /// Load configuration from `.env` and the environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let database_url = env::var("DB_STR")
            .unwrap_or_else(|_| "sqlite:./data/statistics.sqlite?mode=rwc".to_string());

        let bind_addr = parse_var("BIND_ADDR", "0.0.0.0:8085")?;

        let upstream_base_url = env::var("UPSTREAM_BASE_URL")
            .unwrap_or_else(|_| "https://jsonplaceholder.typicode.com".to_string())
            .trim_end_matches('/')
            .to_string();

        let refresh_interval = Duration::from_secs(positive_secs("REFRESH_INTERVAL_SECS", "300")?);
        let upstream_timeout = Duration::from_secs(positive_secs("UPSTREAM_TIMEOUT_SECS", "30")?);

        let log_level = env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        Ok(Self {
            database_url,
            bind_addr,
            upstream_base_url,
            refresh_interval,
            upstream_timeout,
            log_level,
        })
    }
}

fn parse_var<T>(key: &str, default: &str) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    let raw = env::var(key).unwrap_or_else(|_| default.to_string());
    raw.trim()
        .parse()
        .map_err(|e| AppError::Config(format!("Invalid {} value {:?}: {}", key, raw, e)))
}

fn positive_secs(key: &str, default: &str) -> Result<u64, AppError> {
    match parse_var::<u64>(key, default)? {
        0 => Err(AppError::Config(format!("{} must be greater than zero", key))),
        secs => Ok(secs),
    }
}
