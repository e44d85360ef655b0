pub mod cache;
pub mod channel;
pub mod notification;
pub mod refresh;
pub mod resource;

pub use cache::CacheStatsResponse;
pub use channel::ChannelResponse;
pub use notification::{NotificationRequest, NotificationResponse};
pub use refresh::TriggerResponse;
pub use resource::{ResourceDataResponse, ResourceSummary};
