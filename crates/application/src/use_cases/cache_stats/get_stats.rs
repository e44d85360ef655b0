use crate::ports::{CacheStats, ResponseCache};
use std::sync::Arc;

pub struct GetCacheStatsUseCase {
    cache: Arc<dyn ResponseCache>,
}

impl GetCacheStatsUseCase {
    pub fn new(cache: Arc<dyn ResponseCache>) -> Self {
        Self { cache }
    }

    pub fn execute(&self) -> CacheStats {
        self.cache.stats()
    }
}
