use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use matchcast_application::ports::ChannelPublisher;
use matchcast_domain::{Channel, ChannelMessage, Payload, PublishError};
use rustc_hash::FxBuildHasher;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing::{debug, info};

pub type Subscription = broadcast::Receiver<Arc<ChannelMessage>>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChannelStats {
    pub channel: Channel,
    pub subscribers: usize,
}

/// In-process pub/sub fan-out.
///
/// One bounded broadcast sender per channel, created on first subscribe or
/// publish and dropped again by [`ChannelHub::release`] once idle. Messages are wrapped in `Arc` once and shared by every receiver.
/// A subscriber that falls more than `capacity` messages behind skips the
/// oldest ones; other subscribers are unaffected.
pub struct ChannelHub {
    channels: DashMap<Channel, broadcast::Sender<Arc<ChannelMessage>>, FxBuildHasher>,
    capacity: usize,
    closed: AtomicBool,
    published: AtomicU64,
}

impl ChannelHub {
    pub fn new(capacity: usize) -> Self {
        Self {
            channels: DashMap::with_hasher(FxBuildHasher),
            capacity: capacity.max(1),
            closed: AtomicBool::new(false),
            published: AtomicU64::new(0),
        }
    }

    /// The closed flag is read under the shard lock `close` clears through,
    /// so no sender is created once the hub is closed.
    fn sender(
        &self,
        channel: &Channel,
    ) -> Result<broadcast::Sender<Arc<ChannelMessage>>, PublishError> {
        if let Some(sender) = self.channels.get(channel) {
            if self.is_closed() {
                return Err(PublishError::Closed);
            }
            return Ok(sender.clone());
        }

        match self.channels.entry(channel.clone()) {
            _ if self.is_closed() => Err(PublishError::Closed),
            Entry::Occupied(entry) => Ok(entry.get().clone()),
            Entry::Vacant(entry) => {
                debug!(channel = %channel, capacity = self.capacity, "Channel created");
                Ok(entry.insert(broadcast::channel(self.capacity).0).clone())
            }
        }
    }

    pub fn subscribe(&self, channel: &Channel) -> Result<Subscription, PublishError> {
        let receiver = self.sender(channel)?.subscribe();
        debug!(channel = %channel, "Subscriber attached");
        Ok(receiver)
    }

    /// Drops the channel if nobody is subscribed any more. Returns whether it
    /// was removed. Messages published meanwhile recreate it.
    pub fn release(&self, channel: &Channel) -> bool {
        let removed = self
            .channels
            .remove_if(channel, |_, sender| sender.receiver_count() == 0)
            .is_some();
        if removed {
            debug!(channel = %channel, "Idle channel released");
        }
        removed
    }

    pub fn channel_count(&self) -> usize {
        self.channels.len()
    }

    pub fn subscriber_count(&self, channel: &Channel) -> usize {
        self.channels
            .get(channel)
            .map(|sender| sender.receiver_count())
            .unwrap_or(0)
    }

    /// Every known channel with its current receiver count, sorted by name.
    pub fn channel_stats(&self) -> Vec<ChannelStats> {
        let mut stats: Vec<ChannelStats> = self
            .channels
            .iter()
            .map(|entry| ChannelStats {
                channel: entry.key().clone(),
                subscribers: entry.value().receiver_count(),
            })
            .collect();
        stats.sort_by(|a, b| a.channel.cmp(&b.channel));
        stats
    }

    pub fn published_total(&self) -> u64 {
        self.published.load(Ordering::Relaxed)
    }

    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::Acquire)
    }

    /// Rejects further publishes and drops every sender. Receivers drain what
    /// is already buffered and then observe the channel as closed.
    pub fn close(&self) {
        if self.closed.swap(true, Ordering::AcqRel) {
            return;
        }
        let channels = self.channels.len();
        self.channels.clear();
        info!(channels, "Channel hub closed");
    }
}

impl ChannelPublisher for ChannelHub {
    fn publish(&self, channel: &Channel, payload: Payload) -> Result<usize, PublishError> {
        let sender = self.sender(channel)?;
        let message = Arc::new(ChannelMessage::new(channel.clone(), payload));
        self.published.fetch_add(1, Ordering::Relaxed);

        // No receivers is a successful fan-out to nobody.
        let delivered = sender.send(message).unwrap_or(0);
        debug!(channel = %channel, delivered, "Message published");
        Ok(delivered)
    }
}

impl std::fmt::Debug for ChannelHub {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ChannelHub")
            .field("channels", &self.channels.len())
            .field("capacity", &self.capacity)
            .field("closed", &self.is_closed())
            .finish()
    }
}
