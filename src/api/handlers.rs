//! API Handlers
//!
//! HTTP request handlers for the read-through proxy.

use std::sync::Arc;

use axum::{
    extract::{Path, RawQuery, State},
    http::header::HeaderName,
    response::{IntoResponse, Response},
    Json,
};

use crate::cache::TimedCache;
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::fetch::{CachedFetcher, Fetch, HttpFetcher};
use crate::models::{HealthResponse, StatsResponse};

/// Response header reporting whether a payload was served from the cache.
pub const X_CACHE: HeaderName = HeaderName::from_static("x-cache");

/// Application state shared across all handlers.
///
/// Holds the injected cache (through the fetcher) and the upstream root.
#[derive(Clone)]
pub struct AppState {
    pub fetcher: CachedFetcher,
    upstream_base_url: Arc<str>,
}

impl AppState {
    /// Creates a new AppState around an existing cache and upstream.
    pub fn new(cache: TimedCache, upstream: Arc<dyn Fetch>, upstream_base_url: &str) -> Self {
        Self {
            fetcher: CachedFetcher::new(cache, upstream),
            upstream_base_url: Arc::from(upstream_base_url.trim_end_matches('/')),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Builds the cache (starting its reaper) and an HTTP upstream. Must be
    /// called from within a tokio runtime.
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;
        let cache = TimedCache::with_reap_interval(config.ttl(), config.reap_interval())?;
        let upstream = HttpFetcher::new(config.upstream_timeout())?;
        Ok(Self::new(cache, Arc::new(upstream), &config.upstream_base_url))
    }

    pub fn cache(&self) -> &TimedCache {
        self.fetcher.cache()
    }

    /// Builds the upstream URL that doubles as the cache key.
    pub fn upstream_url(&self, path: &str, query: Option<&str>) -> String {
        let path = path.trim_start_matches('/');
        match query.filter(|q| !q.is_empty()) {
            Some(query) => format!("{}/{}?{}", self.upstream_base_url, path, query),
            None => format!("{}/{}", self.upstream_base_url, path),
        }
    }
}

/// Handler for GET /api/*path
///
/// Serves the upstream resource at `path`, from the cache when possible.
pub async fn proxy_handler(
    State(state): State<AppState>,
    Path(path): Path<String>,
    RawQuery(query): RawQuery,
) -> Result<Response> {
    if path.trim_matches('/').is_empty() {
        return Err(CacheError::InvalidRequest(
            "Resource path cannot be empty".to_string(),
        ));
    }

    let url = state.upstream_url(&path, query.as_deref());
    let fetched = state.fetcher.fetch(&url).await?;

    Ok(([(X_CACHE, fetched.source.as_str())], fetched.body).into_response())
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache();
    Json(StatsResponse::new(&cache.stats(), cache.ttl().as_secs()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
