//! Configuration Module
//!
//! Handles loading and managing proxy configuration from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{CacheError, Result};

/// Proxy configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Entry time-to-live in seconds
    pub cache_ttl: u64,
    /// Seconds between expiry sweeps; falls back to `cache_ttl`
    pub reap_interval: Option<u64>,
    /// HTTP server port
    pub server_port: u16,
    /// Base URL that proxied paths are appended to
    pub upstream_base_url: String,
    /// Upstream request timeout in seconds
    pub upstream_timeout: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_TTL` - Entry TTL in seconds (default: 30)
    /// - `REAP_INTERVAL` - Sweep cadence in seconds (default: `CACHE_TTL`)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    /// - `UPSTREAM_BASE_URL` - Proxied API root (default: https://pokeapi.co/api/v2)
    /// - `UPSTREAM_TIMEOUT` - Upstream timeout in seconds (default: 10)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            cache_ttl: parse_var("CACHE_TTL").unwrap_or(defaults.cache_ttl),
            reap_interval: parse_var("REAP_INTERVAL"),
            server_port: parse_var("SERVER_PORT").unwrap_or(defaults.server_port),
            upstream_base_url: env::var("UPSTREAM_BASE_URL")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .unwrap_or(defaults.upstream_base_url),
            upstream_timeout: parse_var("UPSTREAM_TIMEOUT").unwrap_or(defaults.upstream_timeout),
        }
    }

    /// Rejects values the cache cannot run with.
    pub fn validate(&self) -> Result<()> {
        if self.cache_ttl == 0 {
            return Err(CacheError::InvalidConfig(
                "CACHE_TTL must be greater than zero".to_string(),
            ));
        }
        if self.reap_interval == Some(0) {
            return Err(CacheError::InvalidConfig(
                "REAP_INTERVAL must be greater than zero".to_string(),
            ));
        }
        if self.upstream_timeout == 0 {
            return Err(CacheError::InvalidConfig(
                "UPSTREAM_TIMEOUT must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }

    pub fn ttl(&self) -> Duration {
        Duration::from_secs(self.cache_ttl)
    }

    pub fn reap_interval(&self) -> Duration {
        Duration::from_secs(self.reap_interval.unwrap_or(self.cache_ttl))
    }

    pub fn upstream_timeout(&self) -> Duration {
        Duration::from_secs(self.upstream_timeout)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_ttl: 30,
            reap_interval: None,
            server_port: 3000,
            upstream_base_url: "https://pokeapi.co/api/v2".to_string(),
            upstream_timeout: 10,
        }
    }
}

fn parse_var<T: FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.trim().parse().ok())
}
