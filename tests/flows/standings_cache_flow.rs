#[path = "../common/mod.rs"]
mod common;

use common::{standings_140, ScriptedFetcher, Stack};
use matchcast_application::ports::{RefreshTrigger, ResponseCache, TriggerOutcome, TriggerSource};
use matchcast_domain::{Channel, ResourceKey};
use matchcast_jobs::{CacheReaperJob, JobRunner};
use serde_json::json;
use tokio::time::{advance, sleep, Duration};

// ============================================================================
// Standings: TTL=300s read-through
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_second_read_within_ttl_served_from_cache() {
    // Arrange
    let stack = Stack::new(
        ScriptedFetcher::new().script("standings:140:2024", vec![Ok(json!({"table": ["RMA"]}))]),
    );
    let class = standings_140();

    // Act: t=0
    let first = stack.get_resource.execute(&class).await.unwrap();
    // t=100
    advance(Duration::from_secs(100)).await;
    let second = stack.get_resource.execute(&class).await.unwrap();

    // Assert
    assert!(!first.cache_hit);
    assert!(second.cache_hit);
    assert_eq!(*second.payload, json!({"table": ["RMA"]}));
    assert_eq!(stack.fetcher.calls_for("standings:140:2024"), 1);
}

#[tokio::test(start_paused = true)]
async fn test_read_after_ttl_refetches() {
    let stack = Stack::new(ScriptedFetcher::new().script(
        "standings:140:2024",
        vec![Ok(json!({"table": ["RMA"]})), Ok(json!({"table": ["FCB"]}))],
    ));
    let class = standings_140();

    stack.get_resource.execute(&class).await.unwrap();
    advance(Duration::from_secs(300)).await;
    let view = stack.get_resource.execute(&class).await.unwrap();

    assert!(!view.cache_hit);
    assert_eq!(*view.payload, json!({"table": ["FCB"]}));
    assert_eq!(stack.fetcher.calls_for("standings:140:2024"), 2);
}

#[tokio::test(start_paused = true)]
async fn test_manual_refresh_publishes_and_warms_cache() {
    let stack = Stack::new(
        ScriptedFetcher::new().script("standings:140:2024", vec![Ok(json!({"table": ["ATM"]}))]),
    );
    let channel = Channel::new("standings/140").unwrap();
    let mut subscriber = stack.hub.subscribe(&channel).unwrap();

    let scheduler = JobRunner::new()
        .with_refresh(stack.refresh.clone(), vec![standings_140()])
        .start();

    // Manual-only: nothing happens on its own.
    sleep(Duration::from_secs(60)).await;
    assert_eq!(stack.fetcher.total_calls(), 0);

    let outcome = scheduler
        .trigger("standings-140", TriggerSource::Manual)
        .unwrap();
    assert_eq!(outcome, TriggerOutcome::Started);
    sleep(Duration::from_millis(10)).await;

    assert_eq!(*subscriber.try_recv().unwrap().payload, json!({"table": ["ATM"]}));

    // The read path now hits the cache the refresh wrote.
    let view = stack.get_resource.execute(&standings_140()).await.unwrap();
    assert!(view.cache_hit);
    assert_eq!(stack.fetcher.total_calls(), 1);

    scheduler.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_reaper_purges_expired_standings() {
    let stack = Stack::new(
        ScriptedFetcher::new().script("standings:140:2024", vec![Ok(json!({"table": []}))]),
    );
    stack.get_resource.execute(&standings_140()).await.unwrap();
    assert_eq!(stack.cache.len(), 1);

    let scheduler = JobRunner::new()
        .with_cache_reaper(CacheReaperJob::new(stack.cache.clone(), 120))
        .start();

    // Passes at t=120 and t=240 keep the entry, the pass at t=360 drops it.
    sleep(Duration::from_secs(241)).await;
    assert_eq!(stack.cache.len(), 1);
    sleep(Duration::from_secs(120)).await;
    assert_eq!(stack.cache.len(), 0);
    assert!(stack.cache.age_of(&ResourceKey::from("standings:140:2024")).is_none());

    scheduler.shutdown().await;
}
