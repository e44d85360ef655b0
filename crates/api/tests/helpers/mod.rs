#![allow(dead_code)]

use async_trait::async_trait;
use matchcast_api::AppState;
use matchcast_application::ports::{
    RefreshTrigger, TriggerOutcome, TriggerSource, UpstreamFetcher,
};
use matchcast_application::services::ResourceCatalog;
use matchcast_application::use_cases::{
    GetCacheStatsUseCase, GetResourceUseCase, RefreshResourceUseCase, SendNotificationUseCase,
    TriggerRefreshUseCase,
};
use matchcast_domain::{
    CachePolicy, DomainError, FetchError, Payload, ResourceClass, ResourceRequest,
};
use matchcast_infrastructure::broadcast::ChannelHub;
use matchcast_infrastructure::cache::InMemoryResponseCache;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ============================================================================
// Mock UpstreamFetcher
// ============================================================================

pub struct MockFetcher {
    result: Result<serde_json::Value, FetchError>,
    call_count: AtomicU64,
}

impl MockFetcher {
    pub fn ok(value: serde_json::Value) -> Self {
        Self {
            result: Ok(value),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn failing(error: FetchError) -> Self {
        Self {
            result: Err(error),
            call_count: AtomicU64::new(0),
        }
    }

    pub fn call_count(&self) -> u64 {
        self.call_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl UpstreamFetcher for MockFetcher {
    async fn fetch(&self, _request: &ResourceRequest) -> Result<Payload, FetchError> {
        self.call_count.fetch_add(1, Ordering::SeqCst);
        self.result.clone().map(Arc::new)
    }
}

// ============================================================================
// Mock RefreshTrigger
// ============================================================================

pub struct MockTrigger {
    catalog: Arc<ResourceCatalog>,
    outcome: Mutex<TriggerOutcome>,
    calls: Mutex<Vec<(String, TriggerSource)>>,
}

impl MockTrigger {
    pub fn set_outcome(&self, outcome: TriggerOutcome) {
        *self.outcome.lock().unwrap() = outcome;
    }

    pub fn calls(&self) -> Vec<(String, TriggerSource)> {
        self.calls.lock().unwrap().clone()
    }
}

impl RefreshTrigger for MockTrigger {
    fn trigger(
        &self,
        resource: &str,
        source: TriggerSource,
    ) -> Result<TriggerOutcome, DomainError> {
        self.catalog.get(resource)?;
        self.calls
            .lock()
            .unwrap()
            .push((resource.to_string(), source));
        Ok(*self.outcome.lock().unwrap())
    }
}

// ============================================================================
// State builder
// ============================================================================

pub struct TestApp {
    pub state: AppState,
    pub fetcher: Arc<MockFetcher>,
    pub trigger: Arc<MockTrigger>,
    pub hub: Arc<ChannelHub>,
}

pub fn classes() -> Vec<ResourceClass> {
    vec![
        ResourceClass::new("live-matches", ResourceRequest::LiveFixtures)
            .with_refresh_interval(Duration::from_secs(30)),
        ResourceClass::new(
            "standings-140",
            ResourceRequest::Standings {
                league_id: 140,
                season: 2024,
            },
        )
        .with_refresh_interval(Duration::from_secs(3600))
        .with_cache(CachePolicy::from_secs(300)),
    ]
}

pub fn test_app(fetcher: MockFetcher) -> TestApp {
    let fetcher = Arc::new(fetcher);
    let cache = Arc::new(InMemoryResponseCache::new());
    let hub = Arc::new(ChannelHub::new(16));
    let catalog = Arc::new(ResourceCatalog::new(classes()));
    let trigger = Arc::new(MockTrigger {
        catalog: Arc::clone(&catalog),
        outcome: Mutex::new(TriggerOutcome::Started),
        calls: Mutex::new(Vec::new()),
    });

    let refresh = Arc::new(RefreshResourceUseCase::new(
        fetcher.clone(),
        cache.clone(),
        hub.clone(),
    ));

    let state = AppState {
        catalog,
        get_resource: Arc::new(GetResourceUseCase::new(cache.clone(), refresh)),
        trigger_refresh: Arc::new(TriggerRefreshUseCase::new(trigger.clone())),
        send_notification: Arc::new(SendNotificationUseCase::new(hub.clone())),
        get_cache_stats: Arc::new(GetCacheStatsUseCase::new(cache)),
        hub: Arc::clone(&hub),
    };

    TestApp {
        state,
        fetcher,
        trigger,
        hub,
    }
}
