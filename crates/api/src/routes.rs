use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};

/// Creates all API routes with state, to be nested under `/api`
pub fn create_api_routes(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/resources", get(handlers::list_resources))
        .route("/resources/{name}", get(handlers::get_resource))
        .route("/refresh/{name}", post(handlers::trigger_refresh))
        .route("/notifications", post(handlers::send_notification))
        .route("/channels", get(handlers::list_channels))
        .route("/cache/stats", get(handlers::get_cache_stats))
        .with_state(state)
}

/// WebSocket subscription endpoint, `/ws/{channel}` where the channel may
/// contain slashes (`/ws/standings/140`)
pub fn create_ws_routes(state: AppState) -> Router {
    Router::new()
        .route("/ws/{*channel}", get(handlers::subscribe_channel))
        .with_state(state)
}
