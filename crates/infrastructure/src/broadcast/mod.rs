pub mod hub;

pub use hub::{ChannelHub, ChannelStats, Subscription};
