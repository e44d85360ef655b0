use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct TriggerResponse {
    pub resource: String,
    /// `started`, `coalesced` or `shutting_down`
    pub status: &'static str,
}
