use crate::domain::tts::Gender;
use async_trait::async_trait;

/// Voice choice handed to the cloud provider: the synthesis locale, the
/// concrete voice id, and the gender the voice was picked for.
#[derive(Debug, Clone)]
pub struct VoiceSelection {
    pub locale: String,
    pub voice: String,
    pub gender: Gender,
}

/// The free synthesis engine: text plus a two-letter language code in, MP3
/// bytes out. No native speed or gender control.
///
/// Implementations are responsible for provider-specific text length
/// limitations: splitting into chunks and merging the audio back in order.
#[async_trait]
pub trait FreeTtsRepository: Send + Sync {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, String>;
}

/// The commercial cloud engine: gendered voices per locale and a native
/// speaking-rate parameter. Returns MP3 bytes.
#[async_trait]
pub trait CloudTtsRepository: Send + Sync {
    async fn synthesize(
        &self,
        text: &str,
        voice: &VoiceSelection,
        speaking_rate: f32,
    ) -> Result<Vec<u8>, String>;
}
