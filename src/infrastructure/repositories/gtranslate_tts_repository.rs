use super::tts_repository::FreeTtsRepository;
use async_trait::async_trait;

/// The public translate endpoint rejects long inputs; stay well under its
/// limit per request
const MAX_CHUNK_SIZE: usize = 200;

const DEFAULT_BASE_URL: &str = "https://translate.google.com";

/// Free community TTS engine backed by the public Google Translate speech
/// endpoint. Fixed tempo, no gender selection.
pub struct GtranslateTtsRepository {
    client: reqwest::Client,
    base_url: String,
}

impl GtranslateTtsRepository {
    pub fn new(base_url: Option<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
        }
    }

    fn build_request_url(&self, text: &str, lang: &str) -> String {
        format!(
            "{}/translate_tts?ie=UTF-8&client=tw-ob&tl={}&q={}",
            self.base_url,
            urlencoding::encode(lang),
            urlencoding::encode(text)
        )
    }

    /// Split text into chunks that respect sentence boundaries, each at
    /// most MAX_CHUNK_SIZE characters. Oversized sentence-free stretches
    /// are split by characters.
    fn split_into_chunks(text: &str) -> Vec<String> {
        if text.len() <= MAX_CHUNK_SIZE {
            return vec![text.to_string()];
        }

        let mut chunks = Vec::new();
        let mut current = String::new();

        let sentence_pattern = regex::Regex::new(r"([.!?]+\s+)").unwrap();
        let mut last_end = 0;

        let push_piece = |piece: &str, current: &mut String, chunks: &mut Vec<String>| {
            if !current.is_empty() && current.len() + piece.len() > MAX_CHUNK_SIZE {
                chunks.push(current.trim().to_string());
                current.clear();
            }
            if piece.len() > MAX_CHUNK_SIZE {
                let chars: Vec<char> = piece.chars().collect();
                for chunk in chars.chunks(MAX_CHUNK_SIZE) {
                    chunks.push(chunk.iter().collect());
                }
            } else {
                current.push_str(piece);
            }
        };

        for mat in sentence_pattern.find_iter(text) {
            let sentence = &text[last_end..mat.end()];
            push_piece(sentence, &mut current, &mut chunks);
            last_end = mat.end();
        }
        if last_end < text.len() {
            push_piece(&text[last_end..], &mut current, &mut chunks);
        }

        if !current.is_empty() {
            chunks.push(current.trim().to_string());
        }

        chunks
    }

    async fn fetch_chunk(&self, text: &str, lang: &str) -> Result<Vec<u8>, String> {
        let url = self.build_request_url(text, lang);

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::USER_AGENT, "Mozilla/5.0")
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, lang, "translate TTS request failed");
                format!("translate TTS request failed: {e}")
            })?;

        if !response.status().is_success() {
            let status = response.status();
            tracing::error!(status = %status, lang, "translate TTS returned an error status");
            return Err(format!("translate TTS error: HTTP {status}"));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| format!("failed to read translate TTS audio: {e}"))?;

        Ok(bytes.to_vec())
    }
}

#[async_trait]
impl FreeTtsRepository for GtranslateTtsRepository {
    async fn synthesize(&self, text: &str, lang: &str) -> Result<Vec<u8>, String> {
        let start_time = std::time::Instant::now();

        let chunks = Self::split_into_chunks(text);
        tracing::debug!(
            chunk_count = chunks.len(),
            text_length = text.len(),
            lang,
            "text split into chunks"
        );

        let mut merged_audio = Vec::new();
        for (index, chunk) in chunks.iter().enumerate() {
            tracing::debug!(chunk_index = index, chunk_size = chunk.len(), "fetching chunk");
            let audio = self.fetch_chunk(chunk, lang).await?;
            merged_audio.extend(audio);
        }

        tracing::info!(
            provider = "gtranslate",
            lang,
            latency_ms = start_time.elapsed().as_millis(),
            characters_count = text.len(),
            chunk_count = chunks.len(),
            audio_size_bytes = merged_audio.len(),
            "TTS synthesis completed"
        );

        Ok(merged_audio)
    }
}
