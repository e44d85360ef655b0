#[path = "../common/mod.rs"]
mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use common::{live_matches, standings_140, ScriptedFetcher, Stack};
use http_body_util::BodyExt;
use matchcast_api::{create_api_routes, AppState};
use matchcast_application::services::ResourceCatalog;
use matchcast_application::use_cases::{
    GetCacheStatsUseCase, SendNotificationUseCase, TriggerRefreshUseCase,
};
use matchcast_domain::Channel;
use matchcast_jobs::{JobRunner, RefreshScheduler};
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::time::{sleep, Duration};
use tower::ServiceExt;

fn app(stack: &Stack) -> (Router, Arc<RefreshScheduler>) {
    let classes = vec![live_matches(), standings_140()];
    let scheduler = Arc::new(
        JobRunner::new()
            .with_refresh(stack.refresh.clone(), classes.clone())
            .start(),
    );

    let state = AppState {
        catalog: Arc::new(ResourceCatalog::new(classes)),
        get_resource: stack.get_resource.clone(),
        trigger_refresh: Arc::new(TriggerRefreshUseCase::new(scheduler.clone())),
        send_notification: Arc::new(SendNotificationUseCase::new(stack.hub.clone())),
        get_cache_stats: Arc::new(GetCacheStatsUseCase::new(stack.cache.clone())),
        hub: stack.hub.clone(),
    };

    (
        Router::new().nest("/api", create_api_routes(state)),
        scheduler,
    )
}

async fn post(router: &Router, uri: &str) -> (StatusCode, Value) {
    let response = router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri(uri)
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

// ============================================================================
// Manual trigger through the HTTP surface
// ============================================================================

#[tokio::test(start_paused = true)]
async fn test_manual_trigger_publishes_to_subscribers() {
    let stack = Stack::new(
        ScriptedFetcher::new()
            .script("live", vec![Ok(json!({"matches": []}))])
            .script("standings:140:2024", vec![Ok(json!({"table": ["RSO"]}))]),
    );
    let channel = Channel::new("standings/140").unwrap();
    let mut subscriber = stack.hub.subscribe(&channel).unwrap();
    let (router, scheduler) = app(&stack);

    let (status, body) = post(&router, "/api/refresh/standings-140").await;
    sleep(Duration::from_millis(10)).await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body, json!({"resource": "standings-140", "status": "started"}));
    assert_eq!(*subscriber.try_recv().unwrap().payload, json!({"table": ["RSO"]}));

    scheduler.shutdown().await;
}

#[tokio::test(start_paused = true)]
async fn test_trigger_after_shutdown_reports_shutting_down() {
    let stack = Stack::new(ScriptedFetcher::new().script("live", vec![Ok(json!({}))]));
    let (router, scheduler) = app(&stack);

    scheduler.shutdown().await;
    let (status, body) = post(&router, "/api/refresh/live-matches").await;

    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(body["status"], "shutting_down");
}

#[tokio::test(start_paused = true)]
async fn test_unknown_resource_trigger_is_404() {
    let stack = Stack::new(ScriptedFetcher::new());
    let (router, scheduler) = app(&stack);

    let (status, _) = post(&router, "/api/refresh/cup-draws").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    scheduler.shutdown().await;
}
