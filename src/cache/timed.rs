//! Timed Cache Module
//!
//! The thread-safe cache handle: a shared `CacheStore` plus the lifecycle of
//! the background task that sweeps it.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{info, warn};

use crate::cache::{CacheStats, CacheStore};
use crate::error::{CacheError, Result};
use crate::tasks::spawn_reap_task;

// == Timed Cache ==
/// A cloneable handle to a time-expiring byte cache.
///
/// Every clone refers to the same entries. The background sweep stops when
/// [`TimedCache::shutdown`] is called or when the last clone is dropped.
#[derive(Clone)]
pub struct TimedCache {
    store: Arc<Mutex<CacheStore>>,
    reaper: Arc<Reaper>,
}

/// Controls for the sweep task shared by all handle clones.
struct Reaper {
    shutdown_tx: watch::Sender<bool>,
    handle: Mutex<Option<JoinHandle<()>>>,
    interval: Duration,
}

impl TimedCache {
    // == Constructor ==
    /// Creates a cache whose entries expire after `ttl`, sweeping every `ttl`.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(ttl: Duration) -> Result<Self> {
        Self::with_reap_interval(ttl, ttl)
    }

    /// Creates a cache whose entries expire after `ttl`, sweeping every `interval`.
    pub fn with_reap_interval(ttl: Duration, interval: Duration) -> Result<Self> {
        if ttl.is_zero() {
            return Err(CacheError::InvalidConfig(
                "TTL must be greater than zero".to_string(),
            ));
        }
        if interval.is_zero() {
            return Err(CacheError::InvalidConfig(
                "Reap interval must be greater than zero".to_string(),
            ));
        }

        let runtime = Handle::try_current().map_err(|_| {
            CacheError::InvalidConfig("TimedCache requires a running tokio runtime".to_string())
        })?;

        let store = Arc::new(Mutex::new(CacheStore::new(ttl)));
        let (shutdown_tx, shutdown_rx) = watch::channel(false);
        let handle = spawn_reap_task(&runtime, store.clone(), interval, shutdown_rx);

        Ok(Self {
            store,
            reaper: Arc::new(Reaper {
                shutdown_tx,
                handle: Mutex::new(Some(handle)),
                interval,
            }),
        })
    }

    // == Add ==
    /// Stores `value` under `key`, replacing any existing entry.
    pub fn add(&self, key: impl Into<String>, value: impl Into<Vec<u8>>) {
        self.store.lock().insert(key.into(), value.into());
    }

    // == Get ==
    /// Returns a copy of the value stored under `key`, if present.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.store.lock().get(key)
    }

    // == Reap Now ==
    /// Runs one sweep immediately. Returns the number of entries removed.
    pub fn reap_now(&self) -> usize {
        self.store.lock().reap_expired()
    }

    // == Shutdown ==
    /// Stops the background sweep and waits for it to finish.
    ///
    /// The cache stays usable afterwards; entries simply stop expiring.
    /// Calling this more than once is a no-op.
    pub async fn shutdown(&self) {
        self.reaper.shutdown_tx.send_replace(true);

        let handle = self.reaper.handle.lock().take();
        if let Some(handle) = handle {
            match handle.await {
                Ok(()) => info!("Cache reaper shut down"),
                Err(err) => warn!("Cache reaper ended abnormally: {}", err),
            }
        }
    }

    /// Returns true while the background sweep is alive.
    pub fn is_running(&self) -> bool {
        self.reaper
            .handle
            .lock()
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    // == Accessors ==
    pub fn ttl(&self) -> Duration {
        self.store.lock().ttl()
    }

    pub fn reap_interval(&self) -> Duration {
        self.reaper.interval
    }

    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}

impl std::fmt::Debug for TimedCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TimedCache")
            .field("ttl", &self.ttl())
            .field("reap_interval", &self.reaper.interval)
            .field("entries", &self.len())
            .finish()
    }
}
