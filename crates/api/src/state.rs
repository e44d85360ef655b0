use matchcast_application::services::ResourceCatalog;
use matchcast_application::use_cases::{
    GetCacheStatsUseCase, GetResourceUseCase, SendNotificationUseCase, TriggerRefreshUseCase,
};
use matchcast_infrastructure::broadcast::ChannelHub;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<ResourceCatalog>,
    pub get_resource: Arc<GetResourceUseCase>,
    pub trigger_refresh: Arc<TriggerRefreshUseCase>,
    pub send_notification: Arc<SendNotificationUseCase>,
    pub get_cache_stats: Arc<GetCacheStatsUseCase>,
    pub hub: Arc<ChannelHub>,
}
