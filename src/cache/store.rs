//! Cache Store Module
//!
//! The entry map and its expiry bookkeeping. `CacheStore` itself is not
//! synchronized; `TimedCache` wraps it in a mutex and drives the sweeps.

use std::collections::HashMap;

use tokio::time::{Duration, Instant};

use crate::cache::{CacheEntry, CacheStats};

// == Cache Store ==
/// Key/value storage with a single TTL shared by every entry.
#[derive(Debug)]
pub struct CacheStore {
    /// Key-value storage
    entries: HashMap<String, CacheEntry>,
    /// Age after which an entry becomes eligible for removal
    ttl: Duration,
    /// Lookup and sweep counters
    stats: CacheStats,
}

impl CacheStore {
    // == Constructor ==
    /// Creates an empty store whose entries expire after `ttl`.
    pub fn new(ttl: Duration) -> Self {
        Self {
            entries: HashMap::new(),
            ttl,
            stats: CacheStats::new(),
        }
    }

    // == Insert ==
    /// Stores `value` under `key`, replacing any previous entry and its timestamp.
    pub fn insert(&mut self, key: String, value: Vec<u8>) {
        self.insert_entry(key, CacheEntry::new(value));
    }

    /// Stores `value` under `key` as if it had been inserted at `created_at`.
    pub fn insert_at(&mut self, key: String, value: Vec<u8>, created_at: Instant) {
        self.insert_entry(key, CacheEntry::with_created_at(value, created_at));
    }

    fn insert_entry(&mut self, key: String, entry: CacheEntry) {
        self.entries.insert(key, entry);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`.
    ///
    /// Entries are returned for as long as they exist in the map; expiry is
    /// enforced only by sweeps, never on read.
    pub fn get(&mut self, key: &str) -> Option<Vec<u8>> {
        match self.entries.get(key) {
            Some(entry) => {
                self.stats.record_hit();
                Some(entry.value.clone())
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Reap Expired ==
    /// Removes every entry older than the TTL. Returns the number removed.
    pub fn reap_expired(&mut self) -> usize {
        self.reap_expired_at(Instant::now())
    }

    /// Removes every entry older than the TTL as of `now`.
    pub fn reap_expired_at(&mut self, now: Instant) -> usize {
        let ttl = self.ttl;
        let before = self.entries.len();
        self.entries
            .retain(|_, entry| !entry.is_expired_at(ttl, now));

        let removed = before - self.entries.len();
        self.stats.record_reaped(removed);
        self.stats.set_total_entries(self.entries.len());
        removed
    }

    // == Accessors ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
