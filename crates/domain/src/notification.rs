use crate::errors::DomainError;
use chrono::Utc;
use serde::{Deserialize, Serialize};

const MAX_MESSAGE_LEN: usize = 1000;

/// Operator notice pushed to every subscriber of the `notifications` channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Milliseconds since the UNIX epoch.
    pub timestamp: i64,
}

impl Notification {
    pub fn new(message: &str, kind: &str) -> Result<Self, DomainError> {
        Self::validate_message(message)?;

        let kind = kind.trim();
        Ok(Self {
            message: message.trim().to_string(),
            kind: if kind.is_empty() {
                "info".to_string()
            } else {
                kind.to_lowercase()
            },
            timestamp: Utc::now().timestamp_millis(),
        })
    }

    pub fn validate_message(message: &str) -> Result<(), DomainError> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(DomainError::InvalidNotification(
                "message cannot be empty".to_string(),
            ));
        }
        if trimmed.len() > MAX_MESSAGE_LEN {
            return Err(DomainError::InvalidNotification(format!(
                "message cannot exceed {MAX_MESSAGE_LEN} characters"
            )));
        }
        Ok(())
    }
}
