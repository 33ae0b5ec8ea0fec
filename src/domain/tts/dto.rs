use serde::{Deserialize, Serialize};

/// One entry of a POST /tts batch.
#[derive(Debug, Clone, Deserialize)]
pub struct TextItem {
    pub text: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub speed: Option<f32>,
}

/// One entry of a POST /cgtts batch. The gender stays a raw string here;
/// anything that is not exactly "male" resolves to the female voice.
#[derive(Debug, Clone, Deserialize)]
pub struct CloudTextItem {
    pub text: String,
    #[serde(default)]
    pub lang: Option<String>,
    #[serde(default)]
    pub speed: Option<f32>,
    #[serde(default)]
    pub gender: Option<String>,
}

/// Request body for POST /tts.
#[derive(Debug, Deserialize)]
pub struct TtsBatchRequest {
    pub texts: Vec<TextItem>,
}

/// Request body for POST /cgtts.
#[derive(Debug, Deserialize)]
pub struct CloudTtsBatchRequest {
    pub texts: Vec<CloudTextItem>,
}

/// Per-item outcome of the free pipeline. Detection failures occupy their
/// result slot instead of aborting the batch.
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum FreeTtsOutcome {
    Success {
        detected_language: String,
        audio_url: String,
    },
    Error {
        error: String,
    },
}

/// Per-item result of the cloud pipeline.
#[derive(Debug, Clone, Serialize)]
pub struct CloudTtsResult {
    pub language: String,
    pub voice: String,
    pub audio_url: String,
}

/// Response body for both batch endpoints.
#[derive(Debug, Serialize)]
pub struct BatchResponse<T> {
    pub results: Vec<T>,
}
