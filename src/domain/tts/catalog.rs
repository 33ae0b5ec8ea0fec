use std::collections::HashMap;

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Voice table shipped with the binary. Editing the JSON is enough to add a
/// language; the lookup contract stays the same.
const VOICES_JSON: &str = include_str!("../../../resources/voices.json");

/// Requested voice gender. Anything other than the exact string `male`
/// (absent values included) resolves to female.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("male") => Gender::Male,
            _ => Gender::Female,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "male",
            Gender::Female => "female",
        }
    }
}

impl std::fmt::Display for Gender {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One language row: the synthesis locale plus the two gendered voices.
#[derive(Debug, Clone, Deserialize)]
pub struct VoiceCatalogEntry {
    pub code: String,
    pub female: String,
    pub male: String,
}

/// Static language-to-voice mapping for the cloud synthesis path, loaded
/// once at startup and shared read-only.
#[derive(Debug, Clone)]
pub struct VoiceCatalog {
    entries: HashMap<String, VoiceCatalogEntry>,
    fallback: VoiceCatalogEntry,
}

impl VoiceCatalog {
    /// Load the embedded voice table. Fails when the JSON is malformed or
    /// the English fallback row is missing, so a bad build dies at startup
    /// instead of mid-request.
    pub fn load() -> anyhow::Result<Self> {
        let entries: HashMap<String, VoiceCatalogEntry> =
            serde_json::from_str(VOICES_JSON).context("failed to parse voice catalog")?;
        let fallback = entries
            .get("en")
            .cloned()
            .context("voice catalog has no English fallback entry")?;
        Ok(Self { entries, fallback })
    }

    /// Resolve a language code and gender to (locale, voice id). Codes are
    /// lowercased before lookup; unknown codes map to the English entry.
    pub fn lookup(&self, lang: &str, gender: Gender) -> (&str, &str) {
        let entry = self
            .entries
            .get(&lang.to_ascii_lowercase())
            .unwrap_or(&self.fallback);
        let voice = match gender {
            Gender::Female => entry.female.as_str(),
            Gender::Male => entry.male.as_str(),
        };
        (entry.code.as_str(), voice)
    }
}
