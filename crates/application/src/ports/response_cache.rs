use matchcast_domain::{Payload, ResourceKey};
use std::time::Duration;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub entries: usize,
    pub hits: u64,
    pub misses: u64,
    pub insertions: u64,
    pub expired_reads: u64,
    pub purged: u64,
}

impl CacheStats {
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// Key/value memo of upstream responses.
///
/// All methods are synchronous: the data lives in memory and every entry is
/// replaced atomically, so readers never see a half-written value.
pub trait ResponseCache: Send + Sync {
    /// Payload stored under `key` if it is still within its TTL.
    fn get(&self, key: &ResourceKey) -> Option<Payload>;

    /// Stores `payload` with `fetched_at = now`, replacing any prior entry.
    fn put(&self, key: ResourceKey, payload: Payload, ttl: Duration);

    /// Drops every expired entry and returns how many were removed.
    fn purge_expired(&self) -> usize;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn stats(&self) -> CacheStats;
}
