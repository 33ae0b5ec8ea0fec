use std::sync::Arc;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use voicegate::domain::tts::{TtsService, VoiceCatalog};
use voicegate::infrastructure::audio::SpeedAdjuster;
use voicegate::infrastructure::config::{Config, LogFormat};
use voicegate::infrastructure::http::start_http_server;
use voicegate::infrastructure::repositories::{
    GcloudTtsRepository, GtranslateTtsRepository, ServiceAccountKey,
};
use voicegate::infrastructure::storage::AudioStore;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env()?;

    // Initialize logging; the guard must live as long as the process so
    // buffered file output gets flushed.
    let _log_guard = init_logging(&config);

    tracing::info!(
        "Starting voicegate on {}:{} (audio root: {})",
        config.host,
        config.port,
        config.audio_root.display()
    );

    // The audio root must exist before the static file service mounts it.
    tokio::fs::create_dir_all(&config.audio_root).await?;

    // Cloud credentials come from the environment as a JSON blob; a broken
    // blob should kill the process here, not the first /cgtts request.
    let credentials = ServiceAccountKey::from_json(&config.google_credentials_json)?;

    let config = Arc::new(config);

    // === DEPENDENCY INJECTION SETUP ===
    // 1. Instantiate repositories (the two synthesis providers)
    tracing::info!("Instantiating TTS repositories...");
    let free_repo = Arc::new(GtranslateTtsRepository::new(config.gtts_base_url.clone()));
    let cloud_repo = Arc::new(GcloudTtsRepository::new(
        credentials,
        config.cloud_tts_base_url.clone(),
    )?);

    // 2. Load the read-only voice catalog
    let catalog = Arc::new(VoiceCatalog::load()?);

    // 3. Instantiate the service (inject repositories, catalog, storage)
    tracing::info!("Instantiating TTS service...");
    let tts_service = Arc::new(TtsService::new(
        free_repo,
        cloud_repo,
        catalog,
        AudioStore::new(config.audio_root.clone()),
        SpeedAdjuster::new(config.ffmpeg_bin.clone()),
    ));

    // 4. Instantiate the controller (inject service)
    let tts_controller = Arc::new(voicegate::controllers::tts::TtsController::new(
        tts_service,
    ));

    // Start HTTP server with all routes
    start_http_server(config, tts_controller).await?;

    Ok(())
}

fn init_logging(config: &Config) -> WorkerGuard {
    std::fs::create_dir_all(&config.log_dir).ok();

    let file_appender = tracing_appender::rolling::daily(&config.log_dir, "voicegate.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false);

    let env_filter = || {
        tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "voicegate=debug,tower_http=debug".into())
    };

    // try_init keeps repeated initialization (tests, embedding) harmless.
    let subscriber = tracing_subscriber::registry()
        .with(env_filter())
        .with(file_layer);
    if config.log_format == LogFormat::Json {
        subscriber
            .with(tracing_subscriber::fmt::layer().json())
            .try_init()
            .ok();
    } else {
        subscriber
            .with(tracing_subscriber::fmt::layer().pretty())
            .try_init()
            .ok();
    }

    guard
}
