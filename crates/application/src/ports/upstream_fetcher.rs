use async_trait::async_trait;
use matchcast_domain::{FetchError, Payload, ResourceRequest};

/// Single call to the external football data provider.
///
/// Implementations must be idempotent and must not mutate shared state; the
/// caller decides what to do with the result. `request.key()` is the resource
/// identity, the remaining parameters are what the provider URL needs.
#[async_trait]
pub trait UpstreamFetcher: Send + Sync {
    async fn fetch(&self, request: &ResourceRequest) -> Result<Payload, FetchError>;
}
