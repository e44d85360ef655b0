use axum::http::HeaderValue;
use axum::Router;
use matchcast_api::{create_api_routes, create_ws_routes, AppState};
use matchcast_domain::Config;
use matchcast_infrastructure::broadcast::ChannelHub;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

pub async fn start_web_server(
    config: &Config,
    state: AppState,
    hub: Arc<ChannelHub>,
    shutdown: CancellationToken,
) -> anyhow::Result<()> {
    let web_addr: SocketAddr =
        format!("{}:{}", config.server.bind_address, config.server.web_port).parse()?;

    let app = create_app(state, &config.server.cors_allowed_origins);

    info!(
        bind_address = %web_addr,
        "Starting web server (API: /api, WebSocket: /ws/{{channel}})"
    );

    let listener = tokio::net::TcpListener::bind(web_addr).await?;
    info!("Server ready! Press Ctrl+C to stop");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            shutdown.cancelled().await;
            // Ends every open WebSocket so graceful shutdown can complete.
            hub.close();
        })
        .await?;

    info!("Web server stopped");
    Ok(())
}

pub fn create_app(state: AppState, cors_allowed_origins: &[String]) -> Router {
    Router::new()
        .nest("/api", create_api_routes(state.clone()))
        .merge(create_ws_routes(state))
        .layer(cors_layer(cors_allowed_origins))
        .layer(TraceLayer::new_for_http())
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    if origins.iter().any(|o| o == "*") {
        return CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);
    }

    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match HeaderValue::from_str(origin) {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "Ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
