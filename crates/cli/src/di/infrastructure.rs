use matchcast_application::services::ResourceCatalog;
use matchcast_domain::Config;
use matchcast_infrastructure::broadcast::ChannelHub;
use matchcast_infrastructure::cache::InMemoryResponseCache;
use matchcast_infrastructure::upstream::HttpUpstreamFetcher;
use std::sync::Arc;
use tracing::info;

/// Process-wide adapters, built once and shared behind `Arc`.
pub struct Infrastructure {
    pub fetcher: Arc<HttpUpstreamFetcher>,
    pub cache: Arc<InMemoryResponseCache>,
    pub hub: Arc<ChannelHub>,
}

impl Infrastructure {
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let fetcher = Arc::new(HttpUpstreamFetcher::new(&config.upstream)?);
        let cache = Arc::new(InMemoryResponseCache::new());
        let hub = Arc::new(ChannelHub::new(config.broadcast.channel_capacity));

        info!(
            timeout_ms = config.upstream.timeout_ms,
            channel_capacity = config.broadcast.channel_capacity,
            "Infrastructure initialized"
        );

        Ok(Self {
            fetcher,
            cache,
            hub,
        })
    }
}

pub struct Resources {
    pub catalog: Arc<ResourceCatalog>,
}

impl Resources {
    pub fn new(config: &Config) -> Self {
        Self {
            catalog: Arc::new(ResourceCatalog::new(config.resource_classes())),
        }
    }
}
