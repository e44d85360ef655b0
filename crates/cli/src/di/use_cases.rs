use super::{Infrastructure, Resources};
use matchcast_api::AppState;
use matchcast_application::ports::RefreshTrigger;
use matchcast_application::use_cases::{
    GetCacheStatsUseCase, GetResourceUseCase, RefreshResourceUseCase, SendNotificationUseCase,
    TriggerRefreshUseCase,
};
use std::sync::Arc;

pub struct UseCases {
    pub refresh_resource: Arc<RefreshResourceUseCase>,
    pub get_resource: Arc<GetResourceUseCase>,
    pub send_notification: Arc<SendNotificationUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
}

impl UseCases {
    pub fn new(infra: &Infrastructure) -> Self {
        let refresh_resource = Arc::new(RefreshResourceUseCase::new(
            infra.fetcher.clone(),
            infra.cache.clone(),
            infra.hub.clone(),
        ));

        Self {
            get_resource: Arc::new(GetResourceUseCase::new(
                infra.cache.clone(),
                Arc::clone(&refresh_resource),
            )),
            refresh_resource,
            send_notification: Arc::new(SendNotificationUseCase::new(infra.hub.clone())),
            get_cache_stats: Arc::new(GetCacheStatsUseCase::new(infra.cache.clone())),
        }
    }
}

/// The manual-trigger use case needs the running scheduler, so it is built
/// here rather than in [`UseCases::new`].
pub fn app_state(
    infra: &Infrastructure,
    resources: &Resources,
    use_cases: &UseCases,
    trigger: Arc<dyn RefreshTrigger>,
) -> AppState {
    AppState {
        catalog: Arc::clone(&resources.catalog),
        get_resource: Arc::clone(&use_cases.get_resource),
        trigger_refresh: Arc::new(TriggerRefreshUseCase::new(trigger)),
        send_notification: Arc::clone(&use_cases.send_notification),
        get_cache_stats: Arc::clone(&use_cases.get_cache_stats),
        hub: Arc::clone(&infra.hub),
    }
}
