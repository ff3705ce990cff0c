//! Cache Entry Module
//!
//! Defines a single stored payload together with its insertion time.

use tokio::time::{Duration, Instant};

// == Cache Entry ==
/// A stored byte payload and the instant it was inserted (or last overwritten).
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// The stored payload, never interpreted by the cache
    pub value: Vec<u8>,
    /// Insertion timestamp
    pub created_at: Instant,
}

impl CacheEntry {
    // == Constructor ==
    /// Creates an entry stamped with the current time.
    pub fn new(value: Vec<u8>) -> Self {
        Self::with_created_at(value, Instant::now())
    }

    /// Creates an entry stamped with an explicit insertion time.
    pub fn with_created_at(value: Vec<u8>, created_at: Instant) -> Self {
        Self { value, created_at }
    }

    // == Age ==
    /// Returns how long the entry has existed as of `now`.
    ///
    /// A `now` earlier than the insertion time yields a zero age.
    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.created_at)
    }

    // == Is Expired ==
    /// Checks whether the entry is older than `ttl` as of `now`.
    ///
    /// The comparison is strict: an entry whose age equals the TTL exactly is
    /// still live and will be collected by the following sweep.
    pub fn is_expired_at(&self, ttl: Duration, now: Instant) -> bool {
        self.age_at(now) > ttl
    }
}
