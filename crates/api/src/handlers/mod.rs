pub mod cache;
pub mod channels;
pub mod health;
pub mod notifications;
pub mod refresh;
pub mod resources;
pub mod ws;

pub use cache::get_cache_stats;
pub use channels::list_channels;
pub use health::health_check;
pub use notifications::send_notification;
pub use refresh::trigger_refresh;
pub use resources::{get_resource, list_resources};
pub use ws::subscribe_channel;
