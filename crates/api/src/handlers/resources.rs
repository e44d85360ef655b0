use crate::{
    dto::{ResourceDataResponse, ResourceSummary},
    state::AppState,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use tracing::{debug, instrument, warn};

#[instrument(skip(state), name = "api_list_resources")]
pub async fn list_resources(State(state): State<AppState>) -> Json<Vec<ResourceSummary>> {
    let resources: Vec<ResourceSummary> = state
        .catalog
        .all()
        .map(ResourceSummary::from_class)
        .collect();

    debug!(count = resources.len(), "Resources listed");
    Json(resources)
}

#[instrument(skip(state), name = "api_get_resource")]
pub async fn get_resource(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<ResourceDataResponse>, (StatusCode, String)> {
    let class = state
        .catalog
        .get(&name)
        .map_err(|e| (StatusCode::NOT_FOUND, e.to_string()))?;

    match state.get_resource.execute(class).await {
        Ok(view) => {
            debug!(resource = %name, cache_hit = view.cache_hit, "Resource served");
            Ok(Json(ResourceDataResponse::new(class, view)))
        }
        Err(e) => {
            warn!(resource = %name, key = %class.key(), error = %e, "Resource fetch failed");
            Err((StatusCode::BAD_GATEWAY, e.to_string()))
        }
    }
}
