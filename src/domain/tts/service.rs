use std::sync::Arc;

use async_trait::async_trait;
use lingua::{LanguageDetector, LanguageDetectorBuilder};

use super::catalog::{Gender, VoiceCatalog};
use super::dto::{CloudTextItem, CloudTtsResult, FreeTtsOutcome, TextItem};
use super::error::TtsServiceError;
use super::language;
use crate::infrastructure::audio::SpeedAdjuster;
use crate::infrastructure::repositories::{
    CloudTtsRepository, FreeTtsRepository, VoiceSelection,
};
use crate::infrastructure::storage::AudioStore;

const DETECTION_FAILED_MESSAGE: &str = "language could not be detected";

/// First 50 characters of the text, for log lines.
fn preview(text: &str) -> String {
    text.chars().take(50).collect()
}

/// Batch TTS orchestration: resolves languages, runs the per-item pipeline
/// for the chosen backend, and assembles results in input order.
pub struct TtsService {
    free_repo: Arc<dyn FreeTtsRepository>,
    cloud_repo: Arc<dyn CloudTtsRepository>,
    catalog: Arc<VoiceCatalog>,
    store: AudioStore,
    speed_adjuster: SpeedAdjuster,
    language_detector: LanguageDetector,
}

impl TtsService {
    pub fn new(
        free_repo: Arc<dyn FreeTtsRepository>,
        cloud_repo: Arc<dyn CloudTtsRepository>,
        catalog: Arc<VoiceCatalog>,
        store: AudioStore,
        speed_adjuster: SpeedAdjuster,
    ) -> Self {
        let language_detector = LanguageDetectorBuilder::from_all_languages().build();

        Self {
            free_repo,
            cloud_repo,
            catalog,
            store,
            speed_adjuster,
            language_detector,
        }
    }
}

#[async_trait]
pub trait TtsServiceApi: Send + Sync {
    /// Run the free-engine pipeline over a batch.
    ///
    /// Items are processed sequentially and independently: a language
    /// detection failure fills that item's slot with an error payload and
    /// the batch continues. Infrastructure failures (synthesis, storage)
    /// abort the whole request.
    async fn synthesize_free_batch(
        &self,
        items: &[TextItem],
    ) -> Result<Vec<FreeTtsOutcome>, TtsServiceError>;

    /// Run the cloud-engine pipeline over a batch.
    ///
    /// Detection failures silently resolve to English; any synthesis
    /// failure aborts the whole request.
    async fn synthesize_cloud_batch(
        &self,
        items: &[CloudTextItem],
    ) -> Result<Vec<CloudTtsResult>, TtsServiceError>;
}

#[async_trait]
impl TtsServiceApi for TtsService {
    async fn synthesize_free_batch(
        &self,
        items: &[TextItem],
    ) -> Result<Vec<FreeTtsOutcome>, TtsServiceError> {
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            results.push(self.synthesize_free_item(item).await?);
        }
        Ok(results)
    }

    async fn synthesize_cloud_batch(
        &self,
        items: &[CloudTextItem],
    ) -> Result<Vec<CloudTtsResult>, TtsServiceError> {
        let mut results = Vec::with_capacity(items.len());
        for item in items {
            results.push(self.synthesize_cloud_item(item).await?);
        }
        Ok(results)
    }
}

impl TtsService {
    /// Free pipeline: resolve → coerce to the supported set → synthesize at
    /// normal tempo → post-process speed with the external tool.
    async fn synthesize_free_item(
        &self,
        item: &TextItem,
    ) -> Result<FreeTtsOutcome, TtsServiceError> {
        let resolved = language::resolve_language(
            &self.language_detector,
            &item.text,
            item.lang.as_deref(),
        )
        .map(|lang| language::apply_ascii_override(lang, &item.text));

        let lang = match resolved {
            Some(lang) => language::coerce_supported(lang),
            None => {
                tracing::warn!(
                    text_preview = %preview(&item.text),
                    "language detection failed"
                );
                return Ok(FreeTtsOutcome::Error {
                    error: DETECTION_FAILED_MESSAGE.to_string(),
                });
            }
        };

        let speed = language::normalize_speed(item.speed);

        let allocated = self
            .store
            .allocate()
            .await
            .map_err(|e| TtsServiceError::Dependency(format!("audio path allocation: {e}")))?;

        let audio = self
            .free_repo
            .synthesize(&item.text, &lang)
            .await
            .map_err(TtsServiceError::Dependency)?;

        tokio::fs::write(&allocated.filepath, &audio)
            .await
            .map_err(|e| TtsServiceError::Dependency(format!("writing audio file: {e}")))?;

        self.speed_adjuster
            .adjust(&allocated.filepath, speed)
            .await
            .map_err(|e| TtsServiceError::Dependency(format!("tempo adjustment: {e}")))?;

        Ok(FreeTtsOutcome::Success {
            detected_language: lang,
            audio_url: allocated.url,
        })
    }

    /// Cloud pipeline: resolve (silent English fallback) → catalog lookup →
    /// native speaking-rate synthesis.
    async fn synthesize_cloud_item(
        &self,
        item: &CloudTextItem,
    ) -> Result<CloudTtsResult, TtsServiceError> {
        let lang = language::resolve_language(
            &self.language_detector,
            &item.text,
            item.lang.as_deref(),
        )
        .unwrap_or_else(|| {
            tracing::warn!(
                text_preview = %preview(&item.text),
                "language detection failed, defaulting to English"
            );
            "en".to_string()
        });

        let gender = Gender::from_param(item.gender.as_deref());
        let (locale, voice) = self.catalog.lookup(&lang, gender);
        let selection = VoiceSelection {
            locale: locale.to_string(),
            voice: voice.to_string(),
            gender,
        };

        let speaking_rate = language::normalize_speed(item.speed);

        let allocated = self
            .store
            .allocate()
            .await
            .map_err(|e| TtsServiceError::Dependency(format!("audio path allocation: {e}")))?;

        let audio = self
            .cloud_repo
            .synthesize(&item.text, &selection, speaking_rate)
            .await
            .map_err(TtsServiceError::Dependency)?;

        tokio::fs::write(&allocated.filepath, &audio)
            .await
            .map_err(|e| TtsServiceError::Dependency(format!("writing audio file: {e}")))?;

        Ok(CloudTtsResult {
            language: selection.locale,
            voice: selection.voice,
            audio_url: allocated.url,
        })
    }
}
