use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::controllers::{health, tts::TtsController};
use crate::infrastructure::config::Config;
use crate::infrastructure::middleware::request_log_middleware;

/// Build the application router: the two batch synthesis endpoints,
/// health probes, and read-only static serving of the audio root.
pub fn build_router(audio_root: &Path, tts_controller: Arc<TtsController>) -> Router {
    let tts_routes = Router::new()
        .route("/tts", post(TtsController::tts))
        .route("/cgtts", post(TtsController::cgtts))
        .with_state(tts_controller);

    Router::new()
        .route("/health", get(health::health))
        .route("/health/ready", get(health::health_ready))
        .merge(tts_routes)
        .nest_service("/audio", ServeDir::new(audio_root))
        .layer(middleware::from_fn(request_log_middleware))
        .layer(TraceLayer::new_for_http())
}

/// Start the HTTP server with all routes configured
pub async fn start_http_server(
    config: Arc<Config>,
    tts_controller: Arc<TtsController>,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(&config.audio_root, tts_controller);

    let listener =
        tokio::net::TcpListener::bind(format!("{}:{}", config.host, config.port)).await?;

    tracing::info!("Server listening on {}", listener.local_addr()?);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
