use crate::{dto::ChannelResponse, state::AppState};
use axum::{extract::State, Json};
use tracing::{debug, instrument};

#[instrument(skip(state), name = "api_list_channels")]
pub async fn list_channels(State(state): State<AppState>) -> Json<Vec<ChannelResponse>> {
    let channels: Vec<ChannelResponse> = state
        .hub
        .channel_stats()
        .into_iter()
        .map(ChannelResponse::from)
        .collect();

    debug!(count = channels.len(), "Channels listed");
    Json(channels)
}
