use crate::ports::ChannelPublisher;
use matchcast_domain::{Channel, DomainError, Notification};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

/// Use case: push an operator notice to the `notifications` channel.
pub struct SendNotificationUseCase {
    publisher: Arc<dyn ChannelPublisher>,
}

impl SendNotificationUseCase {
    pub fn new(publisher: Arc<dyn ChannelPublisher>) -> Self {
        Self { publisher }
    }

    /// Returns the notification as sent and the number of subscribers reached.
    pub fn execute(&self, message: &str, kind: &str) -> Result<(Notification, usize), DomainError> {
        let notification = Notification::new(message, kind)?;

        let payload = Arc::new(json!({
            "message": notification.message,
            "type": notification.kind,
            "timestamp": notification.timestamp,
        }));

        let delivered = self
            .publisher
            .publish(&Channel::notifications(), payload)?;

        info!(
            kind = %notification.kind,
            delivered,
            "Notification published"
        );

        Ok((notification, delivered))
    }
}
