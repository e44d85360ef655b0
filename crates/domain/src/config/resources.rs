use crate::resource::{CachePolicy, ResourceClass, ResourceRequest};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// One managed resource class
///
/// ```toml
/// [[resources]]
/// name = "standings-140"
/// kind = "standings"
/// league_id = 140
/// season = 2024
/// cache_ttl_secs = 300
/// ```
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResourceConfig {
    /// Unique name, used by the manual trigger endpoint
    pub name: String,

    /// Upstream request, tagged by `kind`
    #[serde(flatten)]
    pub request: ResourceRequest,

    /// Seconds between scheduled refreshes; omit for manual-only classes
    #[serde(default)]
    pub refresh_interval_secs: Option<u64>,

    /// Seconds a response stays fresh; 0 disables caching (default: 0)
    #[serde(default)]
    pub cache_ttl_secs: u64,
}

impl ResourceConfig {
    pub fn to_class(&self) -> ResourceClass {
        let class = ResourceClass::new(self.name.as_str(), self.request.clone())
            .with_cache(CachePolicy::from_secs(self.cache_ttl_secs));

        match self.refresh_interval_secs {
            Some(secs) => class.with_refresh_interval(Duration::from_secs(secs)),
            None => class,
        }
    }
}

pub(crate) fn default_resources() -> Vec<ResourceConfig> {
    vec![ResourceConfig {
        name: "live-matches".to_string(),
        request: ResourceRequest::LiveFixtures,
        refresh_interval_secs: Some(30),
        cache_ttl_secs: 0,
    }]
}
