pub mod cache_stats;
pub mod notifications;
pub mod refresh;
pub mod resources;

// Re-export use cases
pub use cache_stats::GetCacheStatsUseCase;
pub use notifications::SendNotificationUseCase;
pub use refresh::{RefreshError, RefreshOutcome, RefreshResourceUseCase, TriggerRefreshUseCase};
pub use resources::{GetResourceUseCase, ResourceView};
