//! Time-bounded response cache with a background reaper
//!
//! Stores opaque byte payloads keyed by string (the full request URL in
//! practice) together with their insertion time. A background task sweeps
//! the store once per interval and removes entries older than the interval.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use tokio::sync::mpsc;

/// One cached payload plus its insertion timestamp
///
/// Entries are replaced wholesale by [`TimedCache::add`], never mutated in
/// place, so a reader always sees a complete payload.
#[derive(Debug, Clone)]
struct CacheEntry {
    /// When the entry was inserted; immutable thereafter
    created_at: Instant,
    /// The raw response payload
    value: Vec<u8>,
}

/// Thread-safe in-memory cache with periodic time-based expiration
///
/// Cloning a `TimedCache` produces another handle onto the same store, so
/// it can be shared freely between the API client and tests.
///
/// Expiration is tick-based: on each tick the reaper removes every entry
/// inserted before `tick time - interval`. An entry inserted just after a
/// tick therefore survives until the tick after next, giving an effective
/// lifetime anywhere between one and two intervals. Reads do not refresh
/// an entry's age (this is a TTL cache, not an LRU).
#[derive(Debug, Clone)]
pub struct TimedCache {
    /// Shared entry store; a single mutex serializes reads, writes, and sweeps
    entries: Arc<Mutex<HashMap<String, CacheEntry>>>,
    /// Signals the reaper task to exit
    shutdown_tx: mpsc::Sender<()>,
}

impl TimedCache {
    /// Creates a cache and spawns its background reaper
    ///
    /// Must be called from within a tokio runtime. `interval` is both the
    /// sweep period and the maximum retained age; it must be non-zero
    /// (callers validate this before construction).
    pub fn new(interval: Duration) -> Self {
        let entries: Arc<Mutex<HashMap<String, CacheEntry>>> =
            Arc::new(Mutex::new(HashMap::new()));
        let (shutdown_tx, mut shutdown_rx) = mpsc::channel::<()>(1);

        let store = Arc::clone(&entries);
        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // Skip the first tick (immediate)
            ticker.tick().await;

            loop {
                tokio::select! {
                    tick = ticker.tick() => {
                        // Early in process life the tick may predate the
                        // interval; there is nothing old enough to reap yet
                        let Some(cutoff) = tick.into_std().checked_sub(interval) else {
                            continue;
                        };
                        sweep(&store, cutoff);
                    }
                    // Some(()) is an explicit stop(); None means every
                    // cache handle has been dropped
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                }
            }
        });

        Self {
            entries,
            shutdown_tx,
        }
    }

    /// Inserts or replaces the entry for `key`, stamped with the current time
    ///
    /// The write is visible to any `get` that starts after this call
    /// returns. Replacing an entry resets its retained lifetime.
    pub fn add(&self, key: impl Into<String>, value: Vec<u8>) {
        let mut entries = self.entries.lock().expect("cache mutex poisoned");
        entries.insert(
            key.into(),
            CacheEntry {
                created_at: Instant::now(),
                value,
            },
        );
    }

    /// Looks up the payload stored under `key`
    ///
    /// Returns `None` if the key was never inserted or has been reaped. A
    /// miss is not an error; callers fall back to the real fetch.
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        let entries = self.entries.lock().expect("cache mutex poisoned");
        entries.get(key).map(|entry| entry.value.clone())
    }

    /// Signals the background reaper to exit
    ///
    /// Idempotent and safe to call from any clone. Entries already in the
    /// store remain readable; they just stop expiring. Dropping the last
    /// handle has the same effect, so short-lived processes need not call
    /// this at all.
    pub fn stop(&self) {
        // A full or closed channel means a stop is already in flight
        let _ = self.shutdown_tx.try_send(());
    }
}

/// Removes every entry inserted strictly before `cutoff`
fn sweep(store: &Mutex<HashMap<String, CacheEntry>>, cutoff: Instant) {
    let mut entries = store.lock().expect("cache mutex poisoned");
    let before = entries.len();
    entries.retain(|_, entry| entry.created_at >= cutoff);
    let reaped = before - entries.len();
    if reaped > 0 {
        tracing::debug!(reaped, remaining = entries.len(), "cache sweep");
    }
}
