use serde::{Deserialize, Serialize};

/// Request DTO for an operator notification
#[derive(Debug, Clone, Deserialize)]
pub struct NotificationRequest {
    pub message: String,
    /// Defaults to `info`
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub message: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub timestamp: i64,
    pub delivered: usize,
}
