//! pokecache - a time-expiring in-memory byte cache
//!
//! `TimedCache` stores opaque payloads under string keys and sweeps out
//! entries older than its TTL in the background. `CachedFetcher` layers it in
//! front of an upstream so repeated requests skip the network.
//!
//! ```ignore
//! let cache = TimedCache::new(Duration::from_secs(30))?;
//! cache.add("https://pokeapi.co/api/v2/location-area", body);
//! if let Some(body) = cache.get("https://pokeapi.co/api/v2/location-area") {
//!     // served without a network round trip
//! }
//! cache.shutdown().await;
//! ```

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod fetch;
pub mod models;
pub mod tasks;

pub use api::AppState;
pub use cache::TimedCache;
pub use config::Config;
pub use error::{CacheError, Result};
pub use fetch::{CachedFetcher, Fetch, FetchSource, HttpFetcher};
