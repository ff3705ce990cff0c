//! Fetch Module
//!
//! The network side of the cache: a `Fetch` abstraction over upstream
//! requests and a `CachedFetcher` that consults a `TimedCache` before
//! issuing one.

mod cached;
mod http;

use async_trait::async_trait;

use crate::error::Result;

pub use cached::{CachedFetcher, FetchSource, Fetched};
pub use http::HttpFetcher;

/// Retrieves the raw payload for a URL.
///
/// Implementations must return an error for anything other than a
/// successful response so that failures are never cached.
#[async_trait]
pub trait Fetch: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<u8>>;
}
