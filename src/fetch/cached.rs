//! Read-through fetching
//!
//! `CachedFetcher` keys the cache by the full request URL, answers from the
//! cache when it can, and stores every successful upstream payload.

use std::sync::Arc;

use tracing::debug;

use super::Fetch;
use crate::cache::TimedCache;
use crate::error::Result;

/// Where a payload came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchSource {
    Cache,
    Network,
}

impl FetchSource {
    /// Value for the `x-cache` response header.
    pub fn as_str(&self) -> &'static str {
        match self {
            FetchSource::Cache => "HIT",
            FetchSource::Network => "MISS",
        }
    }
}

/// A payload together with its source.
#[derive(Debug, Clone)]
pub struct Fetched {
    pub body: Vec<u8>,
    pub source: FetchSource,
}

/// Wraps a [`Fetch`] implementation with a [`TimedCache`].
#[derive(Clone)]
pub struct CachedFetcher {
    cache: TimedCache,
    upstream: Arc<dyn Fetch>,
}

impl CachedFetcher {
    pub fn new(cache: TimedCache, upstream: Arc<dyn Fetch>) -> Self {
        Self { cache, upstream }
    }

    pub fn cache(&self) -> &TimedCache {
        &self.cache
    }

    /// Returns the payload for `url`, going to the network only on a miss.
    ///
    /// Upstream errors are returned unchanged and leave the cache untouched.
    pub async fn fetch(&self, url: &str) -> Result<Fetched> {
        if let Some(body) = self.cache.get(url) {
            debug!("Cache hit for {}", url);
            return Ok(Fetched {
                body,
                source: FetchSource::Cache,
            });
        }

        debug!("Cache miss for {}", url);
        let body = self.upstream.fetch(url).await?;
        self.cache.add(url, body.clone());

        Ok(Fetched {
            body,
            source: FetchSource::Network,
        })
    }
}
