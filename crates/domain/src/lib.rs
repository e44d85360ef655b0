//! Matchcast Domain Layer
pub mod cache_entry;
pub mod channel;
pub mod config;
pub mod errors;
pub mod notification;
pub mod resource;
pub mod validators;

pub use cache_entry::{CacheEntry, Payload};
pub use channel::{Channel, ChannelMessage};
pub use config::{CliOverrides, Config, ConfigError};
pub use errors::{DomainError, FetchError, PublishError};
pub use notification::Notification;
pub use resource::{CachePolicy, ResourceClass, ResourceKey, ResourceRequest};
