use crate::{
    dto::{NotificationRequest, NotificationResponse},
    state::AppState,
};
use axum::{extract::State, http::StatusCode, Json};
use matchcast_domain::DomainError;
use tracing::{error, instrument};

#[instrument(skip(state, req), name = "api_send_notification")]
pub async fn send_notification(
    State(state): State<AppState>,
    Json(req): Json<NotificationRequest>,
) -> Result<Json<NotificationResponse>, (StatusCode, String)> {
    let kind = req.kind.as_deref().unwrap_or("info");

    match state.send_notification.execute(&req.message, kind) {
        Ok((notification, delivered)) => Ok(Json(NotificationResponse {
            message: notification.message,
            kind: notification.kind,
            timestamp: notification.timestamp,
            delivered,
        })),
        Err(e @ DomainError::InvalidNotification(_)) => Err((StatusCode::BAD_REQUEST, e.to_string())),
        Err(e) => {
            error!(error = %e, "Failed to publish notification");
            Err((StatusCode::SERVICE_UNAVAILABLE, e.to_string()))
        }
    }
}
