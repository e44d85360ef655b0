use matchcast_domain::{Channel, Payload, PublishError};

/// Fan-out of one payload to every current subscriber of a channel.
///
/// Must not block. Returns how many subscribers the message was handed to;
/// zero subscribers is a successful publish.
pub trait ChannelPublisher: Send + Sync {
    fn publish(&self, channel: &Channel, payload: Payload) -> Result<usize, PublishError>;
}
