use crate::ports::ResponseCache;
use crate::use_cases::refresh::RefreshResourceUseCase;
use matchcast_domain::{FetchError, Payload, ResourceClass};
use std::sync::Arc;
use tracing::debug;

#[derive(Debug, Clone)]
pub struct ResourceView {
    pub payload: Payload,
    pub cache_hit: bool,
}

/// Use case: read a resource, served from the cache while fresh.
///
/// Cacheable classes only reach the fetcher on a miss or after expiry.
/// Classes with caching disabled always fetch. Misses go through the refresh
/// use case so they queue behind a refresh of the same resource instead of
/// racing it. Never publishes.
pub struct GetResourceUseCase {
    cache: Arc<dyn ResponseCache>,
    refresh: Arc<RefreshResourceUseCase>,
}

impl GetResourceUseCase {
    pub fn new(cache: Arc<dyn ResponseCache>, refresh: Arc<RefreshResourceUseCase>) -> Self {
        Self { cache, refresh }
    }

    pub async fn execute(&self, class: &ResourceClass) -> Result<ResourceView, FetchError> {
        let key = class.key();

        if class.cache.is_enabled() {
            if let Some(payload) = self.cache.get(&key) {
                debug!(resource = %class.name, key = %key, "Served from cache");
                return Ok(ResourceView {
                    payload,
                    cache_hit: true,
                });
            }
        }

        let view = self.refresh.load(class).await?;
        debug!(
            resource = %class.name,
            key = %key,
            cache_hit = view.cache_hit,
            "Resource loaded"
        );
        Ok(view)
    }
}
