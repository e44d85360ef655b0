#![allow(dead_code)]

use async_trait::async_trait;
use matchcast_application::ports::{CacheStats, ChannelPublisher, ResponseCache, UpstreamFetcher};
use matchcast_domain::{Channel, FetchError, Payload, PublishError, ResourceKey, ResourceRequest};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock UpstreamFetcher
// ============================================================================

pub struct MockFetcher {
    script: Mutex<VecDeque<Result<Payload, FetchError>>>,
    fallback: Mutex<Result<Payload, FetchError>>,
    calls: AtomicU64,
    requests: Mutex<Vec<ResourceRequest>>,
}

impl MockFetcher {
    pub fn always(payload: serde_json::Value) -> Self {
        Self::scripted(vec![], Ok(Arc::new(payload)))
    }

    pub fn failing(error: FetchError) -> Self {
        Self::scripted(vec![], Err(error))
    }

    /// Returns `script` in order, then `fallback` forever.
    pub fn scripted(
        script: Vec<Result<Payload, FetchError>>,
        fallback: Result<Payload, FetchError>,
    ) -> Self {
        Self {
            script: Mutex::new(script.into()),
            fallback: Mutex::new(fallback),
            calls: AtomicU64::new(0),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn requests(&self) -> Vec<ResourceRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl UpstreamFetcher for MockFetcher {
    async fn fetch(&self, request: &ResourceRequest) -> Result<Payload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(request.clone());

        let next = self.script.lock().unwrap().pop_front();
        next.unwrap_or_else(|| self.fallback.lock().unwrap().clone())
    }
}

// ============================================================================
// Slow UpstreamFetcher (per-call delay, tracks overlapping calls)
// ============================================================================

pub struct SlowFetcher {
    script: Mutex<VecDeque<(Duration, serde_json::Value)>>,
    active: AtomicU64,
    max_active: AtomicU64,
    calls: AtomicU64,
}

impl SlowFetcher {
    /// Each call pops the next `(delay, payload)` pair.
    pub fn new(script: Vec<(Duration, serde_json::Value)>) -> Self {
        Self {
            script: Mutex::new(script.into()),
            active: AtomicU64::new(0),
            max_active: AtomicU64::new(0),
            calls: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn max_concurrent(&self) -> u64 {
        self.max_active.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamFetcher for SlowFetcher {
    async fn fetch(&self, _request: &ResourceRequest) -> Result<Payload, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        let active = self.active.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_active.fetch_max(active, Ordering::SeqCst);

        let (delay, payload) = self
            .script
            .lock()
            .unwrap()
            .pop_front()
            .expect("SlowFetcher script exhausted");
        tokio::time::sleep(delay).await;

        self.active.fetch_sub(1, Ordering::SeqCst);
        Ok(Arc::new(payload))
    }
}

// ============================================================================
// Mock ResponseCache (no clock: entries never expire)
// ============================================================================

#[derive(Default)]
pub struct MockCache {
    entries: Mutex<HashMap<ResourceKey, (Payload, Duration)>>,
    gets: AtomicU64,
    puts: AtomicU64,
}

impl MockCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn seed(&self, key: &str, payload: serde_json::Value) {
        self.entries.lock().unwrap().insert(
            ResourceKey::from(key),
            (Arc::new(payload), Duration::from_secs(60)),
        );
    }

    pub fn stored(&self, key: &str) -> Option<(Payload, Duration)> {
        self.entries
            .lock()
            .unwrap()
            .get(&ResourceKey::from(key))
            .cloned()
    }

    pub fn get_count(&self) -> u64 {
        self.gets.load(Ordering::SeqCst)
    }

    pub fn put_count(&self) -> u64 {
        self.puts.load(Ordering::SeqCst)
    }
}

impl ResponseCache for MockCache {
    fn get(&self, key: &ResourceKey) -> Option<Payload> {
        self.gets.fetch_add(1, Ordering::SeqCst);
        self.entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(payload, _)| Arc::clone(payload))
    }

    fn put(&self, key: ResourceKey, payload: Payload, ttl: Duration) {
        self.puts.fetch_add(1, Ordering::SeqCst);
        self.entries.lock().unwrap().insert(key, (payload, ttl));
    }

    fn purge_expired(&self) -> usize {
        0
    }

    fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            ..CacheStats::default()
        }
    }
}

// ============================================================================
// Mock ChannelPublisher
// ============================================================================

#[derive(Default)]
pub struct MockPublisher {
    published: Mutex<Vec<(Channel, Payload)>>,
    failure: Mutex<Option<PublishError>>,
    subscribers: usize,
}

impl MockPublisher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_subscribers(subscribers: usize) -> Self {
        Self {
            subscribers,
            ..Self::default()
        }
    }

    pub fn fail_with(&self, error: PublishError) {
        *self.failure.lock().unwrap() = Some(error);
    }

    pub fn published(&self) -> Vec<(Channel, Payload)> {
        self.published.lock().unwrap().clone()
    }

    pub fn publish_count(&self) -> usize {
        self.published.lock().unwrap().len()
    }
}

impl ChannelPublisher for MockPublisher {
    fn publish(&self, channel: &Channel, payload: Payload) -> Result<usize, PublishError> {
        if let Some(error) = self.failure.lock().unwrap().clone() {
            return Err(error);
        }
        self.published
            .lock()
            .unwrap()
            .push((channel.clone(), payload));
        Ok(self.subscribers)
    }
}
