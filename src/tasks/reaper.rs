//! Expiry Sweep Task
//!
//! Background task that periodically removes expired cache entries.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::Duration;
use tracing::{debug, info};

use crate::cache::CacheStore;

/// Spawns the sweep loop for `store` on `runtime`.
///
/// The loop alternates between sleeping for `interval` and sweeping the store
/// under its lock. It exits when `shutdown` receives a value or when its
/// sender is dropped, which happens once every cache handle is gone.
///
/// # Example
/// ```ignore
/// let (tx, rx) = watch::channel(false);
/// let handle = spawn_reap_task(&Handle::current(), store, Duration::from_secs(30), rx);
/// tx.send_replace(true);
/// handle.await?;
/// ```
pub fn spawn_reap_task(
    runtime: &Handle,
    store: Arc<Mutex<CacheStore>>,
    interval: Duration,
    mut shutdown: watch::Receiver<bool>,
) -> JoinHandle<()> {
    runtime.spawn(async move {
        info!("Starting reap task with interval of {:?}", interval);

        loop {
            tokio::select! {
                _ = tokio::time::sleep(interval) => {}
                _ = shutdown.changed() => break,
            }

            let removed = store.lock().reap_expired();

            if removed > 0 {
                info!("Reap sweep: removed {} expired entries", removed);
            } else {
                debug!("Reap sweep: no expired entries found");
            }
        }

        info!("Reap task stopped");
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shared_store(ttl: Duration) -> Arc<Mutex<CacheStore>> {
        Arc::new(Mutex::new(CacheStore::new(ttl)))
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_task_removes_expired_entries() {
        let store = shared_store(Duration::from_secs(1));
        store
            .lock()
            .insert("expire_soon".to_string(), b"value".to_vec());

        let (tx, rx) = watch::channel(false);
        let handle = spawn_reap_task(&Handle::current(), store.clone(), Duration::from_secs(1), rx);

        tokio::time::sleep(Duration::from_millis(2500)).await;

        assert_eq!(store.lock().get("expire_soon"), None);
        assert_eq!(store.lock().stats().reaped, 1);

        tx.send_replace(true);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_task_preserves_live_entries() {
        let store = shared_store(Duration::from_secs(3600));
        store
            .lock()
            .insert("long_lived".to_string(), b"value".to_vec());

        let (tx, rx) = watch::channel(false);
        let handle = spawn_reap_task(&Handle::current(), store.clone(), Duration::from_secs(1), rx);

        tokio::time::sleep(Duration::from_millis(5500)).await;

        assert_eq!(store.lock().get("long_lived"), Some(b"value".to_vec()));

        tx.send_replace(true);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_task_stops_on_signal() {
        let (tx, rx) = watch::channel(false);
        let handle = spawn_reap_task(
            &Handle::current(),
            shared_store(Duration::from_secs(1)),
            Duration::from_secs(1),
            rx,
        );

        tx.send_replace(true);
        handle.await.unwrap();
    }

    #[tokio::test(start_paused = true)]
    async fn test_reap_task_stops_when_sender_dropped() {
        let (tx, rx) = watch::channel(false);
        let handle = spawn_reap_task(
            &Handle::current(),
            shared_store(Duration::from_secs(1)),
            Duration::from_secs(1),
            rx,
        );

        drop(tx);
        tokio::time::sleep(Duration::from_millis(10)).await;

        assert!(handle.is_finished(), "Task should exit once its sender is gone");
    }
}
