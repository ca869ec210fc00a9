use crate::domain::ports::{Clock, SystemClock};
use std::collections::HashMap;
use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::{Duration, Instant};

pub const DEFAULT_STALE_AFTER: Duration = Duration::from_secs(5 * 60);

struct Entry<T> {
    data: Option<(Arc<Vec<T>>, Instant)>,
    in_flight: bool,
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Self {
            data: None,
            in_flight: false,
        }
    }
}

/// Read-through cache of record lists keyed by domain label.
///
/// A stored list is served as-is until `stale_after` has passed since it was
/// loaded; the next read after that runs the loader again. Concurrent reads of
/// the same key share a single load.
pub struct QueryCache<T> {
    stale_after: Duration,
    clock: Arc<dyn Clock>,
    entries: Mutex<HashMap<String, Entry<T>>>,
    gates: Mutex<HashMap<String, Arc<tokio::sync::Mutex<()>>>>,
}

impl<T> QueryCache<T> {
    pub fn new(stale_after: Duration) -> Self {
        Self::with_clock(stale_after, Arc::new(SystemClock))
    }

    pub fn with_clock(stale_after: Duration, clock: Arc<dyn Clock>) -> Self {
        Self {
            stale_after,
            clock,
            entries: Mutex::new(HashMap::new()),
            gates: Mutex::new(HashMap::new()),
        }
    }

    pub fn stale_after(&self) -> Duration {
        self.stale_after
    }

    pub async fn get_or_load<F, Fut>(&self, key: &str, loader: F) -> Arc<Vec<T>>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Vec<T>>,
    {
        if let Some(data) = self.fresh(key) {
            tracing::debug!("Cache hit for '{}'", key);
            return data;
        }

        let gate = self.gate(key);
        let _permit = gate.lock().await;

        // Another reader may have finished loading while we waited.
        if let Some(data) = self.fresh(key) {
            tracing::debug!("Cache filled by concurrent load for '{}'", key);
            return data;
        }

        tracing::debug!("Cache miss for '{}', loading", key);
        let in_flight = InFlight::start(self, key);
        let data = Arc::new(loader().await);
        in_flight.finish(Arc::clone(&data));
        data
    }

    /// Stored list regardless of staleness, or `fallback()` before the first load resolves.
    pub fn snapshot_or(&self, key: &str, fallback: impl FnOnce() -> Vec<T>) -> Arc<Vec<T>> {
        self.peek(key).unwrap_or_else(|| Arc::new(fallback()))
    }

    pub fn peek(&self, key: &str) -> Option<Arc<Vec<T>>> {
        self.entries()
            .get(key)
            .and_then(|entry| entry.data.as_ref())
            .map(|(data, _)| Arc::clone(data))
    }

    pub fn is_fetching(&self, key: &str) -> bool {
        self.entries()
            .get(key)
            .map(|entry| entry.in_flight)
            .unwrap_or(false)
    }

    /// True when the next `get_or_load` would run the loader.
    pub fn is_stale(&self, key: &str) -> bool {
        self.fresh(key).is_none()
    }

    pub fn invalidate(&self, key: &str) {
        if let Some(entry) = self.entries().get_mut(key) {
            entry.data = None;
        }
    }

    fn fresh(&self, key: &str) -> Option<Arc<Vec<T>>> {
        let now = self.clock.now();
        let entries = self.entries();
        let (data, loaded_at) = entries.get(key)?.data.as_ref()?;
        (now.saturating_duration_since(*loaded_at) < self.stale_after).then(|| Arc::clone(data))
    }

    fn gate(&self, key: &str) -> Arc<tokio::sync::Mutex<()>> {
        let mut gates = self.gates.lock().unwrap_or_else(|e| e.into_inner());
        Arc::clone(gates.entry(key.to_string()).or_default())
    }

    fn entries(&self) -> MutexGuard<'_, HashMap<String, Entry<T>>> {
        self.entries.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Marks a key as loading; clears the mark even if the load is dropped midway.
struct InFlight<'a, T> {
    cache: &'a QueryCache<T>,
    key: &'a str,
}

impl<'a, T> InFlight<'a, T> {
    fn start(cache: &'a QueryCache<T>, key: &'a str) -> Self {
        cache
            .entries()
            .entry(key.to_string())
            .or_default()
            .in_flight = true;
        Self { cache, key }
    }

    fn finish(self, data: Arc<Vec<T>>) {
        let loaded_at = self.cache.clock.now();
        if let Some(entry) = self.cache.entries().get_mut(self.key) {
            entry.data = Some((data, loaded_at));
        }
    }
}

impl<T> Drop for InFlight<'_, T> {
    fn drop(&mut self) {
        if let Some(entry) = self.cache.entries().get_mut(self.key) {
            entry.in_flight = false;
        }
    }
}
