use crate::ports::{ChannelPublisher, ResponseCache, UpstreamFetcher};
use crate::services::FetchGate;
use crate::use_cases::resources::ResourceView;
use matchcast_domain::{Channel, FetchError, Payload, PublishError, ResourceClass, ResourceKey};
use std::sync::Arc;
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RefreshError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    /// The payload was fetched but could not be handed to the channel.
    #[error(transparent)]
    Publish(#[from] PublishError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RefreshOutcome {
    pub key: ResourceKey,
    pub channel: Channel,
    /// Subscribers the payload was handed to.
    pub delivered: usize,
    pub cached: bool,
}

/// Use case: one refresh cycle for a resource class.
///
/// Always fetches. On success the payload is written to the cache (when the
/// class is cacheable) and then published once on the class channel. On fetch
/// failure nothing is written and nothing is published.
///
/// Every upstream fetch for a resource, refresh or read-through, runs under
/// the same [`FetchGate`] permit: one fetch per resource at a time, results
/// applied in start order.
pub struct RefreshResourceUseCase {
    fetcher: Arc<dyn UpstreamFetcher>,
    cache: Arc<dyn ResponseCache>,
    publisher: Arc<dyn ChannelPublisher>,
    gate: FetchGate,
}

impl RefreshResourceUseCase {
    pub fn new(
        fetcher: Arc<dyn UpstreamFetcher>,
        cache: Arc<dyn ResponseCache>,
        publisher: Arc<dyn ChannelPublisher>,
    ) -> Self {
        Self {
            fetcher,
            cache,
            publisher,
            gate: FetchGate::new(),
        }
    }

    pub async fn execute(&self, class: &ResourceClass) -> Result<RefreshOutcome, RefreshError> {
        let key = class.key();
        let channel = class.channel();

        let _permit = self.gate.acquire(&key).await;
        let (payload, cached) = self.fetch_and_store(class, &key).await?;

        let delivered = self.publisher.publish(&channel, payload)?;

        debug!(
            resource = %class.name,
            key = %key,
            channel = %channel,
            delivered,
            cached,
            "Resource refreshed and published"
        );

        Ok(RefreshOutcome {
            key,
            channel,
            delivered,
            cached,
        })
    }

    /// Read-through load for queries. Waits for any fetch of the same
    /// resource in flight, then serves the cache if that fetch filled it.
    /// Never publishes.
    pub async fn load(&self, class: &ResourceClass) -> Result<ResourceView, FetchError> {
        let key = class.key();
        let _permit = self.gate.acquire(&key).await;

        if class.cache.is_enabled() {
            if let Some(payload) = self.cache.get(&key) {
                debug!(resource = %class.name, key = %key, "Filled by concurrent fetch");
                return Ok(ResourceView {
                    payload,
                    cache_hit: true,
                });
            }
        }

        let (payload, _) = self.fetch_and_store(class, &key).await?;
        Ok(ResourceView {
            payload,
            cache_hit: false,
        })
    }

    pub fn is_fetching(&self, class: &ResourceClass) -> bool {
        self.gate.is_busy(&class.key())
    }

    async fn fetch_and_store(
        &self,
        class: &ResourceClass,
        key: &ResourceKey,
    ) -> Result<(Payload, bool), FetchError> {
        debug!(resource = %class.name, key = %key, "Fetching upstream resource");
        let payload = self.fetcher.fetch(&class.request).await?;

        let cached = match class.cache.ttl() {
            Some(ttl) => {
                self.cache.put(key.clone(), Arc::clone(&payload), ttl);
                true
            }
            None => false,
        };

        Ok((payload, cached))
    }
}
