pub mod memory;
pub mod metrics;

pub use memory::InMemoryResponseCache;
pub use metrics::CacheMetrics;
