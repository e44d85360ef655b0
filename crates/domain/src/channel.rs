use crate::cache_entry::Payload;
use crate::errors::DomainError;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

const MAX_CHANNEL_LEN: usize = 200;

/// Hierarchical broadcast topic, e.g. `live-matches` or `standings/140`.
///
/// Segments are separated by `/`, never empty, and restricted to ASCII
/// alphanumerics plus `-`, `_` and `.`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Channel(Arc<str>);

impl Channel {
    pub fn new(name: &str) -> Result<Self, DomainError> {
        Self::validate(name)?;
        Ok(Self(Arc::from(name)))
    }

    pub fn live_matches() -> Self {
        Self(Arc::from("live-matches"))
    }

    pub fn notifications() -> Self {
        Self(Arc::from("notifications"))
    }

    /// Joins segments produced from trusted identifiers (numeric ids, fixed
    /// prefixes).
    pub(crate) fn from_segments(segments: &[&str]) -> Self {
        Self(Arc::from(segments.join("/")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('/')
    }

    pub fn validate(name: &str) -> Result<(), DomainError> {
        if name.is_empty() {
            return Err(DomainError::InvalidChannel(
                "channel name cannot be empty".to_string(),
            ));
        }

        if name.len() > MAX_CHANNEL_LEN {
            return Err(DomainError::InvalidChannel(format!(
                "channel name cannot exceed {MAX_CHANNEL_LEN} characters"
            )));
        }

        for segment in name.split('/') {
            if segment.is_empty() {
                return Err(DomainError::InvalidChannel(format!(
                    "'{name}' contains an empty segment"
                )));
            }

            let valid = segment
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.');
            if !valid {
                return Err(DomainError::InvalidChannel(format!(
                    "'{name}' contains characters outside [A-Za-z0-9._-]"
                )));
            }
        }

        Ok(())
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What subscribers of a channel receive.
#[derive(Debug, Clone, Serialize)]
pub struct ChannelMessage {
    pub channel: Channel,
    pub payload: Payload,
    pub published_at: DateTime<Utc>,
}

impl ChannelMessage {
    pub fn new(channel: Channel, payload: Payload) -> Self {
        Self {
            channel,
            payload,
            published_at: Utc::now(),
        }
    }
}
