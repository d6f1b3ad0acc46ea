//! Runtime configuration, read from `SALES_*` environment variables.

use std::net::SocketAddr;
use std::path::PathBuf;

use anyhow::{Context, Result};
use axum::http::HeaderValue;

pub const DEFAULT_DATABASE_URL: &str = "sqlite:sales.db";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:5000";
pub const DEFAULT_SEED_PATH: &str = "data/product_transaction.json";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub bind_addr: SocketAddr,
    pub seed_path: PathBuf,
    pub cors_origin: HeaderValue,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source. Unset or
    /// blank variables fall back to the defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str, default: &str| {
            lookup(key)
                .filter(|value| !value.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        let bind_addr = var("SALES_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_addr
            .parse::<SocketAddr>()
            .with_context(|| format!("SALES_BIND_ADDR is not a socket address: {}", bind_addr))?;

        let cors_origin = var("SALES_CORS_ORIGIN", DEFAULT_CORS_ORIGIN);
        let cors_origin = cors_origin
            .parse::<HeaderValue>()
            .with_context(|| format!("SALES_CORS_ORIGIN is not a valid header value: {}", cors_origin))?;

        Ok(Self {
            database_url: var("SALES_DATABASE_URL", DEFAULT_DATABASE_URL),
            bind_addr,
            seed_path: PathBuf::from(var("SALES_SEED_PATH", DEFAULT_SEED_PATH)),
            cors_origin,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_nothing_is_set() {
        let config = AppConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.bind_addr, "127.0.0.1:5000".parse().unwrap());
        assert_eq!(config.seed_path, PathBuf::from(DEFAULT_SEED_PATH));
        assert_eq!(config.cors_origin, "http://localhost:3000");
    }

    #[test]
    fn test_overrides_and_blank_values() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("SALES_DATABASE_URL", "sqlite::memory:"),
            ("SALES_BIND_ADDR", "0.0.0.0:8080"),
            ("SALES_SEED_PATH", "  "),
        ]))
        .unwrap();

        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.bind_addr.port(), 8080);
        assert_eq!(config.seed_path, PathBuf::from(DEFAULT_SEED_PATH));
    }

    #[test]
    fn test_bad_bind_addr_is_an_error() {
        let result = AppConfig::from_lookup(lookup_from(&[("SALES_BIND_ADDR", "localhost")]));
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("SALES_BIND_ADDR"));
    }
}
