use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Unknown resource class: {0}")]
    UnknownResource(String),

    #[error("Invalid resource name: {0}")]
    InvalidResourceName(String),

    #[error("Invalid channel name: {0}")]
    InvalidChannel(String),

    #[error("Invalid notification: {0}")]
    InvalidNotification(String),

    #[error("Failed to build upstream client: {0}")]
    UpstreamClient(String),

    #[error("Publish failed: {0}")]
    Publish(#[from] PublishError),
}

/// Failure of a single upstream call.
///
/// The engine only logs these; it never branches on the variant.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FetchError {
    /// Connect, timeout or transport failure before a status line was read.
    #[error("Upstream unavailable: {0}")]
    UpstreamUnavailable(String),

    /// Provider answered with a non-2xx status.
    #[error("Upstream returned HTTP {status}: {body_excerpt}")]
    UpstreamStatus { status: u16, body_excerpt: String },

    /// Body is not JSON, or not a single JSON object.
    #[error("Malformed upstream response: {0}")]
    MalformedResponse(String),
}

impl FetchError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UpstreamUnavailable(_) => "upstream_unavailable",
            Self::UpstreamStatus { .. } => "upstream_status",
            Self::MalformedResponse(_) => "malformed_response",
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PublishError {
    #[error("Publish to '{channel}' rejected: {reason}")]
    Rejected { channel: String, reason: String },

    #[error("Channel hub is closed")]
    Closed,
}
