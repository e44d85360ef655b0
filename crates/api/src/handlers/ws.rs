use crate::state::AppState;
use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        Path, State,
    },
    http::StatusCode,
    response::{IntoResponse, Response},
};
use futures::{SinkExt, StreamExt};
use matchcast_domain::Channel;
use matchcast_infrastructure::broadcast::Subscription;
use std::sync::Arc;
use tokio::sync::broadcast::error::RecvError;
use tracing::{debug, warn};

/// Upgrades to a WebSocket that streams every message published on the
/// channel as a JSON text frame. Only channels of configured resources and
/// `notifications` can be subscribed to.
pub async fn subscribe_channel(
    State(state): State<AppState>,
    Path(channel): Path<String>,
    ws: WebSocketUpgrade,
) -> Response {
    let channel = match Channel::new(&channel) {
        Ok(channel) => channel,
        Err(e) => return (StatusCode::BAD_REQUEST, e.to_string()).into_response(),
    };

    if !state.catalog.serves_channel(&channel) {
        return (
            StatusCode::NOT_FOUND,
            format!("no resource publishes on channel '{channel}'"),
        )
            .into_response();
    }

    // Subscribe before the upgrade so nothing published in between is lost.
    let subscription = match state.hub.subscribe(&channel) {
        Ok(subscription) => subscription,
        Err(e) => return (StatusCode::SERVICE_UNAVAILABLE, e.to_string()).into_response(),
    };

    let hub = Arc::clone(&state.hub);
    ws.on_upgrade(move |socket| async move {
        stream_channel(socket, &channel, subscription).await;
        hub.release(&channel);
    })
}

async fn stream_channel(socket: WebSocket, channel: &Channel, mut subscription: Subscription) {
    let (mut sender, mut receiver) = socket.split();
    debug!(channel = %channel, "WebSocket subscriber connected");

    loop {
        tokio::select! {
            message = subscription.recv() => match message {
                Ok(message) => {
                    let text = match serde_json::to_string(&*message) {
                        Ok(text) => text,
                        Err(e) => {
                            warn!(channel = %channel, error = %e, "Failed to encode message");
                            continue;
                        }
                    };
                    if sender.send(Message::Text(text.into())).await.is_err() {
                        break;
                    }
                }
                Err(RecvError::Lagged(skipped)) => {
                    warn!(channel = %channel, skipped, "WebSocket subscriber lagging, messages dropped");
                }
                Err(RecvError::Closed) => {
                    let _ = sender.send(Message::Close(None)).await;
                    break;
                }
            },
            incoming = receiver.next() => match incoming {
                Some(Ok(Message::Close(_))) | Some(Err(_)) | None => break,
                Some(Ok(_)) => {}
            },
        }
    }

    debug!(channel = %channel, "WebSocket subscriber disconnected");
}
