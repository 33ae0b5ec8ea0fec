use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

use voicegate::controllers::tts::TtsController;
use voicegate::domain::tts::{TtsService, VoiceCatalog};
use voicegate::infrastructure::audio::SpeedAdjuster;
use voicegate::infrastructure::http::build_router;
use voicegate::infrastructure::repositories::{
    CloudTtsRepository, FreeTtsRepository, VoiceSelection,
};
use voicegate::infrastructure::storage::AudioStore;

/// Bytes every stub provider returns; close enough to an MP3 for tests.
pub const FAKE_MP3: &[u8] = b"ID3\x03\x00fake-mp3-bytes";

pub struct StubFreeRepo;

#[async_trait]
impl FreeTtsRepository for StubFreeRepo {
    async fn synthesize(&self, _text: &str, _lang: &str) -> Result<Vec<u8>, String> {
        Ok(FAKE_MP3.to_vec())
    }
}

pub struct StubCloudRepo;

#[async_trait]
impl CloudTtsRepository for StubCloudRepo {
    async fn synthesize(
        &self,
        _text: &str,
        _voice: &VoiceSelection,
        _speaking_rate: f32,
    ) -> Result<Vec<u8>, String> {
        Ok(FAKE_MP3.to_vec())
    }
}

pub struct FailingCloudRepo;

#[async_trait]
impl CloudTtsRepository for FailingCloudRepo {
    async fn synthesize(
        &self,
        _text: &str,
        _voice: &VoiceSelection,
        _speaking_rate: f32,
    ) -> Result<Vec<u8>, String> {
        Err("synthesis backend unavailable".to_string())
    }
}

pub struct TestApp {
    pub router: Router,
    pub audio_root: PathBuf,
}

pub fn test_app() -> TestApp {
    test_app_with(Arc::new(StubFreeRepo), Arc::new(StubCloudRepo))
}

pub fn test_app_with(
    free_repo: Arc<dyn FreeTtsRepository>,
    cloud_repo: Arc<dyn CloudTtsRepository>,
) -> TestApp {
    let audio_root = std::env::temp_dir()
        .join("voicegate-e2e")
        .join(uuid::Uuid::new_v4().to_string())
        .join("audio");
    std::fs::create_dir_all(&audio_root).unwrap();

    let tts_service = Arc::new(TtsService::new(
        free_repo,
        cloud_repo,
        Arc::new(VoiceCatalog::load().unwrap()),
        AudioStore::new(audio_root.clone()),
        SpeedAdjuster::new("/nonexistent/ffmpeg"),
    ));
    let tts_controller = Arc::new(TtsController::new(tts_service));

    TestApp {
        router: build_router(&audio_root, tts_controller),
        audio_root,
    }
}

pub async fn post_json(
    router: &Router,
    path: &str,
    body: &serde_json::Value,
) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        serde_json::Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null)
    };

    (status, json)
}

pub async fn get_bytes(router: &Router, path: &str) -> (StatusCode, Vec<u8>) {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .unwrap();

    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();

    (status, bytes.to_vec())
}

/// The URL shape every synthesis result must follow.
pub fn audio_url_pattern() -> regex::Regex {
    regex::Regex::new(r"^audio/\d{4}/\d{2}/\d{2}/\d{8}_\d{6}_\d+\.mp3$").unwrap()
}
