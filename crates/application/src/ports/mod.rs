pub mod channel_publisher;
pub mod refresh_trigger;
pub mod response_cache;
pub mod upstream_fetcher;

pub use channel_publisher::ChannelPublisher;
pub use refresh_trigger::{RefreshTrigger, TriggerOutcome, TriggerSource};
pub use response_cache::{CacheStats, ResponseCache};
pub use upstream_fetcher::UpstreamFetcher;
