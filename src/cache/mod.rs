//! Cache Module
//!
//! Time-expiring in-memory storage for opaque byte payloads.

mod entry;
mod stats;
mod store;
mod timed;

#[cfg(test)]
mod property_tests;

// Re-export public types
pub use entry::CacheEntry;
pub use stats::CacheStats;
pub use store::CacheStore;
pub use timed::TimedCache;
