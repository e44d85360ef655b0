use crate::resource::ResourceKey;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Upstream JSON document shared between the cache, the publisher and every
/// subscriber without copying.
pub type Payload = Arc<serde_json::Value>;

/// A memoised upstream response.
///
/// Entries are immutable; a newer fetch replaces the whole entry.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub key: ResourceKey,
    pub payload: Payload,
    pub fetched_at: Instant,
    pub ttl: Duration,
}

impl CacheEntry {
    pub fn new(key: ResourceKey, payload: Payload, fetched_at: Instant, ttl: Duration) -> Self {
        Self {
            key,
            payload,
            fetched_at,
            ttl,
        }
    }

    pub fn age_at(&self, now: Instant) -> Duration {
        now.saturating_duration_since(self.fetched_at)
    }

    /// Fresh while `now - fetched_at < ttl`. A zero TTL is never fresh.
    pub fn is_fresh_at(&self, now: Instant) -> bool {
        self.age_at(now) < self.ttl
    }
}
