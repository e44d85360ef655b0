use matchcast_application::use_cases::ResourceView;
use matchcast_domain::{Payload, ResourceClass, ResourceRequest};
use serde::Serialize;

/// One configured resource class
#[derive(Debug, Clone, Serialize)]
pub struct ResourceSummary {
    pub name: String,
    pub key: String,
    pub channel: String,
    pub request: ResourceRequest,
    pub refresh_interval_secs: Option<u64>,
    /// 0 when caching is disabled
    pub cache_ttl_secs: u64,
}

impl ResourceSummary {
    pub fn from_class(class: &ResourceClass) -> Self {
        Self {
            name: class.name.to_string(),
            key: class.key().to_string(),
            channel: class.channel().to_string(),
            request: class.request.clone(),
            refresh_interval_secs: class.refresh_interval.map(|d| d.as_secs()),
            cache_ttl_secs: class.cache.ttl().map(|d| d.as_secs()).unwrap_or(0),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ResourceDataResponse {
    pub resource: String,
    pub key: String,
    pub cache_hit: bool,
    pub data: Payload,
}

impl ResourceDataResponse {
    pub fn new(class: &ResourceClass, view: ResourceView) -> Self {
        Self {
            resource: class.name.to_string(),
            key: class.key().to_string(),
            cache_hit: view.cache_hit,
            data: view.payload,
        }
    }
}
