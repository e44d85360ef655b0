#![allow(dead_code)]

use async_trait::async_trait;
use matchcast_application::ports::{CacheStats, ChannelPublisher, ResponseCache, UpstreamFetcher};
use matchcast_application::use_cases::RefreshResourceUseCase;
use matchcast_domain::{Channel, FetchError, Payload, PublishError, ResourceKey, ResourceRequest};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock UpstreamFetcher
// ============================================================================

/// Returns scripted results in order, then `fallback` forever. Each call
/// sleeps for `delay` first (tokio time, so paused tests control it).
pub struct MockFetcher {
    script: Mutex<VecDeque<Result<serde_json::Value, FetchError>>>,
    fallback: Result<serde_json::Value, FetchError>,
    delay: Duration,
    call_count: AtomicU64,
}

impl MockFetcher {
    pub fn always(payload: serde_json::Value) -> Self {
        Self::scripted(vec![], Ok(payload))
    }

    pub fn scripted(
        script: Vec<Result<serde_json::Value, FetchError>>,
        fallback: Result<serde_json::Value, FetchError>,
    ) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback,
            delay: Duration::ZERO,
            call_count: AtomicU64::new(0),
        }
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamFetcher for MockFetcher {
    async fn fetch(&self, _request: &ResourceRequest) -> Result<Payload, FetchError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        let next = self.script.lock().unwrap().pop_front();

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        next.unwrap_or_else(|| self.fallback.clone()).map(Arc::new)
    }
}

// ============================================================================
// Mock ResponseCache
// ============================================================================

#[derive(Default)]
pub struct MockCache {
    entries: Mutex<HashMap<ResourceKey, Payload>>,
    puts: AtomicU64,
    purges: AtomicU64,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stored(&self, key: &str) -> Option<serde_json::Value> {
        self.entries
            .lock()
            .unwrap()
            .get(&ResourceKey::from(key))
            .map(|payload| (**payload).clone())
    }

    pub fn put_count(&self) -> u64 {
        self.puts.load(Ordering::SeqCst)
    }

    pub fn purge_count(&self) -> u64 {
        self.purges.load(Ordering::SeqCst)
    }
}

impl ResponseCache for MockCache {
    fn get(&self, key: &ResourceKey) -> Option<Payload> {
        self.entries.lock().unwrap().get(key).cloned()
    }

    fn put(&self, key: ResourceKey, payload: Payload, _ttl: Duration) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(key, payload);
    }

    fn purge_expired(&self) -> usize {
        self.purges.fetch_add(1, Ordering::SeqCst);
        0
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats::default()
    }
}

// ============================================================================
// Mock ChannelPublisher
// ============================================================================

#[derive(Default)]
pub struct MockPublisher {
    published: Mutex<Vec<(Channel, serde_json::Value)>>,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn published(&self) -> Vec<(Channel, serde_json::Value)> {
        self.published.lock().unwrap().clone()
    }

    pub fn payloads(&self) -> Vec<serde_json::Value> {
        self.published().into_iter().map(|(_, p)| p).collect()
    }
}

impl ChannelPublisher for MockPublisher {
    fn publish(&self, channel: &Channel, payload: Payload) -> Result<usize, PublishError> {
        self.published
            .lock()
            .unwrap()
            .push((channel.clone(), (*payload).clone()));
        Ok(1)
    }
}

// ============================================================================
// Builders
// ============================================================================

pub struct Harness {
    pub fetcher: Arc<MockFetcher>,
    pub cache: Arc<MockCache>,
    pub publisher: Arc<MockPublisher>,
    pub refresh: Arc<RefreshResourceUseCase>,
}

pub fn harness(fetcher: MockFetcher) -> Harness {
    let fetcher = Arc::new(fetcher);
    let cache = Arc::new(MockCache::new());
    let publisher = Arc::new(MockPublisher::new());
    let refresh = Arc::new(RefreshResourceUseCase::new(
        fetcher.clone(),
        cache.clone(),
        publisher.clone(),
    ));
    Harness {
        fetcher,
        cache,
        publisher,
        refresh,
    }
}
