pub mod catalog;
pub mod dto;
pub mod error;
pub mod language;
pub mod service;

pub use catalog::{Gender, VoiceCatalog};
pub use dto::{
    BatchResponse, CloudTextItem, CloudTtsBatchRequest, CloudTtsResult, FreeTtsOutcome, TextItem,
    TtsBatchRequest,
};
pub use error::TtsServiceError;
pub use service::{TtsService, TtsServiceApi};
