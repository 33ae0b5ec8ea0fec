use lingua::{Language, LanguageDetector};

/// ISO 639-1(-ish) codes accepted by the free synthesis engine.
pub const SUPPORTED_LANGS: &[&str] = &[
    "af", "ar", "bn", "bs", "ca", "cs", "cy", "da", "de", "el", "en", "eo", "es", "et", "fi",
    "fr", "gu", "hi", "hr", "hu", "id", "is", "it", "ja", "jw", "km", "kn", "ko", "la", "lv",
    "mk", "ml", "mr", "my", "ne", "nl", "no", "pl", "pt", "ro", "ru", "si", "sk", "sq", "sr",
    "su", "sv", "sw", "ta", "te", "th", "tl", "tr", "uk", "ur", "vi", "zh-CN", "zh-TW",
];

/// Convert a lingua detection result into the two-letter code the rest of
/// the pipeline works with.
///
/// Both Norwegian variants collapse to `no` (downstream heuristics key on
/// that code), and Chinese maps to `zh-CN`, the code the free engine and
/// the voice catalog both accept.
pub fn iso_code(language: Language) -> String {
    match language {
        Language::Bokmal | Language::Nynorsk => "no".to_string(),
        Language::Chinese => "zh-CN".to_string(),
        other => other.iso_code_639_1().to_string(),
    }
}

/// Resolve the language for a request item.
///
/// An explicit non-empty code wins verbatim. Otherwise the text is run
/// through the detector; `None` means detection failed and the caller
/// decides whether that is an error (free path) or an `en` fallback
/// (cloud path).
pub fn resolve_language(
    detector: &LanguageDetector,
    text: &str,
    explicit: Option<&str>,
) -> Option<String> {
    if let Some(lang) = explicit.filter(|l| !l.is_empty()) {
        return Some(lang.to_string());
    }
    detector.detect_language_of(text).map(iso_code)
}

/// Detectors frequently mistake short ASCII English phrases for Norwegian.
/// When the detected code is `no` and the text is plain ASCII words with
/// basic punctuation, treat it as English.
pub fn apply_ascii_override(lang: String, text: &str) -> String {
    if lang == "no" {
        let ascii_basic = regex::Regex::new(r"^[A-Za-z0-9 ,.!?']+$").unwrap();
        if ascii_basic.is_match(text) {
            return "en".to_string();
        }
    }
    lang
}

/// Codes outside the free engine's supported set fall back to English.
pub fn coerce_supported(lang: String) -> String {
    if SUPPORTED_LANGS.contains(&lang.as_str()) {
        lang
    } else {
        "en".to_string()
    }
}

/// Absent or non-positive speeds normalize to 1.0; positive values pass
/// through unchanged.
pub fn normalize_speed(speed: Option<f32>) -> f32 {
    match speed {
        Some(s) if s > 0.0 => s,
        _ => 1.0,
    }
}
