//! reqwest-backed upstream fetcher

use async_trait::async_trait;
use std::time::Duration;
use tracing::debug;

use super::Fetch;
use crate::error::{CacheError, Result};

/// Fetches payloads over HTTP(S) with a per-request timeout.
#[derive(Debug, Clone)]
pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(concat!("pokecache/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CacheError::Internal(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl Fetch for HttpFetcher {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>> {
        debug!("Fetching {}", url);

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| CacheError::Upstream(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(CacheError::UpstreamStatus {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| CacheError::Upstream(e.to_string()))?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_fetcher_builds() {
        assert!(HttpFetcher::new(Duration::from_secs(5)).is_ok());
    }

    #[tokio::test]
    async fn test_invalid_url_is_upstream_error() {
        let fetcher = HttpFetcher::new(Duration::from_secs(1)).unwrap();

        let result = fetcher.fetch("not a url").await;

        assert!(matches!(result, Err(CacheError::Upstream(_))));
    }
}
