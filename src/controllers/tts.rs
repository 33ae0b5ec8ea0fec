use axum::{extract::State, Json};
use std::sync::Arc;

use crate::{
    domain::tts::{
        BatchResponse, CloudTtsBatchRequest, CloudTtsResult, FreeTtsOutcome, TtsBatchRequest,
        TtsService, TtsServiceApi,
    },
    error::{AppError, AppResult},
};

pub struct TtsController {
    tts_service: Arc<TtsService>,
}

impl TtsController {
    pub fn new(tts_service: Arc<TtsService>) -> Self {
        Self { tts_service }
    }

    /// POST /tts - free-engine batch synthesis
    pub async fn tts(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<TtsBatchRequest>,
    ) -> AppResult<Json<BatchResponse<FreeTtsOutcome>>> {
        if request.texts.iter().any(|item| item.text.is_empty()) {
            return Err(AppError::BadRequest("Text cannot be empty".to_string()));
        }

        let results = controller
            .tts_service
            .synthesize_free_batch(&request.texts)
            .await?;

        Ok(Json(BatchResponse { results }))
    }

    /// POST /cgtts - cloud-engine batch synthesis
    pub async fn cgtts(
        State(controller): State<Arc<TtsController>>,
        Json(request): Json<CloudTtsBatchRequest>,
    ) -> AppResult<Json<BatchResponse<CloudTtsResult>>> {
        if request.texts.iter().any(|item| item.text.is_empty()) {
            return Err(AppError::BadRequest("Text cannot be empty".to_string()));
        }

        let results = controller
            .tts_service
            .synthesize_cloud_batch(&request.texts)
            .await?;

        Ok(Json(BatchResponse { results }))
    }
}
