use crate::{dto::TriggerResponse, state::AppState};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use matchcast_domain::DomainError;
use tracing::{error, instrument};

/// Manual refresh. Answers `202 Accepted` as soon as the trigger is handled;
/// the fetch itself runs in the background.
#[instrument(skip(state), name = "api_trigger_refresh")]
pub async fn trigger_refresh(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<(StatusCode, Json<TriggerResponse>), (StatusCode, String)> {
    match state.trigger_refresh.execute(&name) {
        Ok(outcome) => Ok((
            StatusCode::ACCEPTED,
            Json(TriggerResponse {
                resource: name,
                status: outcome.as_str(),
            }),
        )),
        Err(e @ DomainError::UnknownResource(_)) => Err((StatusCode::NOT_FOUND, e.to_string())),
        Err(e) => {
            error!(resource = %name, error = %e, "Failed to trigger refresh");
            Err((StatusCode::INTERNAL_SERVER_ERROR, e.to_string()))
        }
    }
}
