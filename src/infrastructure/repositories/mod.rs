pub mod gcloud_tts_repository;
pub mod gtranslate_tts_repository;
pub mod tts_repository;

pub use gcloud_tts_repository::{GcloudTtsRepository, ServiceAccountKey};
pub use gtranslate_tts_repository::GtranslateTtsRepository;
pub use tts_repository::{CloudTtsRepository, FreeTtsRepository, VoiceSelection};
