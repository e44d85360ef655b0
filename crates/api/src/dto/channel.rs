use matchcast_infrastructure::broadcast::ChannelStats;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct ChannelResponse {
    pub channel: String,
    pub subscribers: usize,
}

impl From<ChannelStats> for ChannelResponse {
    fn from(stats: ChannelStats) -> Self {
        Self {
            channel: stats.channel.to_string(),
            subscribers: stats.subscribers,
        }
    }
}
