use super::CacheMetrics;
use dashmap::DashMap;
use matchcast_application::ports::{CacheStats, ResponseCache};
use matchcast_domain::{CacheEntry, Payload, ResourceKey};
use rustc_hash::FxBuildHasher;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::debug;

/// Process-local response cache keyed by [`ResourceKey`].
///
/// Each key lives in its own DashMap shard slot, so writers for different
/// resource classes never contend on a global lock. Expiry is lazy: `get`
/// treats stale entries as absent, `purge_expired` removes them.
pub struct InMemoryResponseCache {
    entries: DashMap<ResourceKey, CacheEntry, FxBuildHasher>,
    metrics: Arc<CacheMetrics>,
}

impl InMemoryResponseCache {
    pub fn new() -> Self {
        Self {
            entries: DashMap::with_hasher(FxBuildHasher),
            metrics: Arc::new(CacheMetrics::default()),
        }
    }

    pub fn metrics(&self) -> Arc<CacheMetrics> {
        Arc::clone(&self.metrics)
    }

    /// Age of the entry under `key`, fresh or not.
    pub fn age_of(&self, key: &ResourceKey) -> Option<Duration> {
        self.entries.get(key).map(|entry| entry.age_at(now()))
    }

    pub fn keys(&self) -> Vec<ResourceKey> {
        let mut keys: Vec<ResourceKey> = self.entries.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}

impl Default for InMemoryResponseCache {
    fn default() -> Self {
        Self::new()
    }
}

/// Reads the tokio clock so paused-time tests drive expiry.
#[inline]
fn now() -> Instant {
    tokio::time::Instant::now().into_std()
}

impl ResponseCache for InMemoryResponseCache {
    fn get(&self, key: &ResourceKey) -> Option<Payload> {
        let Some(entry) = self.entries.get(key) else {
            self.metrics.record_miss();
            return None;
        };

        if entry.is_fresh_at(now()) {
            self.metrics.record_hit();
            Some(Arc::clone(&entry.payload))
        } else {
            self.metrics.record_expired_read();
            None
        }
    }

    fn put(&self, key: ResourceKey, payload: Payload, ttl: Duration) {
        let entry = CacheEntry::new(key.clone(), payload, now(), ttl);
        self.entries.insert(key, entry);
        self.metrics.record_insertion();
    }

    fn purge_expired(&self) -> usize {
        let now = now();
        let mut removed = 0usize;

        self.entries.retain(|_, entry| {
            let fresh = entry.is_fresh_at(now);
            if !fresh {
                removed += 1;
            }
            fresh
        });

        if removed > 0 {
            self.metrics.record_purged(removed);
            debug!(removed, remaining = self.entries.len(), "Purged expired cache entries");
        }

        removed
    }

    fn len(&self) -> usize {
        self.entries.len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.entries.len(),
            hits: self.metrics.hits.load(Ordering::Relaxed),
            misses: self.metrics.misses.load(Ordering::Relaxed),
            insertions: self.metrics.insertions.load(Ordering::Relaxed),
            expired_reads: self.metrics.expired_reads.load(Ordering::Relaxed),
            purged: self.metrics.purged.load(Ordering::Relaxed),
        }
    }
}
