#![allow(missing_docs)]

use crate::error::{GeminiSttError, Result};
use crate::models::ModelFamily;

pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_API_VERSION: &str = "v1beta";
pub const DEFAULT_MODEL: &str = ModelFamily::GEMINI_2_5_FLASH_LITE;
pub const DEFAULT_PROMPT: &str = "Transcribe this audio.";

/// Fixed system instruction attached to every generation request. The
/// transcription contract is locked at the library level; callers cannot
/// replace or extend it.
pub(crate) const SYSTEM_INSTRUCTION: &str = "\
You are a speech-to-text engine. Convert the spoken words in the audio into \
text, exactly as spoken. Never summarize, interpret, or translate.

If the caller specifies a target language, write the transcript in that \
language's writing style while matching the pronunciation of what was \
actually spoken; do not translate the content. If no language is specified, \
detect the spoken language automatically and transcribe in that language's \
natural style. When speakers mix languages, follow the caller's language if \
given, otherwise the primary spoken language.

Ignore low-volume background sounds and irrelevant noise; capture only \
clearly spoken, meaningful words. Preserve stutters, hesitations, and \
repeated words exactly as spoken. Punctuation and line breaks may be used \
for readability, but the content must come strictly from the audio. Never \
add opinions, extra content, or summaries.";

#[derive(Debug, Clone)]
pub struct GeminiSttConfig {
    api_key: String,
    base_url: String,
    api_version: String,
    model: String,
    timeout_seconds: u64,
}

impl GeminiSttConfig {
    /// Create a configuration. Fails immediately on an empty key so that
    /// credential problems surface before any I/O.
    pub fn new<S: Into<String>>(api_key: S) -> Result<Self> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(GeminiSttError::missing_credential(
                "API key cannot be empty",
            ));
        }

        Ok(Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout_seconds: 60,
        })
    }

    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("GEMINI_API_KEY")
            .or_else(|_| std::env::var("GOOGLE_GENERATIVE_AI_API_KEY"))
            .map_err(|_| {
                GeminiSttError::missing_credential(
                    "GEMINI_API_KEY environment variable is not set. \
                     Please set it to your Google AI API key.",
                )
            })?;

        let mut config = Self::new(api_key)?;

        if let Ok(base_url) = std::env::var("GEMINI_BASE_URL") {
            if !base_url.is_empty() {
                config.base_url = base_url;
            }
        }

        if let Ok(model_id) = std::env::var("GEMINI_MODEL") {
            if !model_id.is_empty() {
                config.model = model_id;
            }
        }

        if let Ok(timeout_str) = std::env::var("GEMINI_TIMEOUT_SECONDS") {
            if let Ok(timeout) = timeout_str.parse::<u64>() {
                config.timeout_seconds = timeout;
            }
        }

        Ok(config)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_version(&self) -> &str {
        &self.api_version
    }

    /// Default model used when a call does not name one.
    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }

    pub fn with_base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout_seconds = seconds;
        self
    }

    pub fn generate_content_url(&self, model: &str) -> String {
        format!(
            "{}/{}/models/{}:generateContent?key={}",
            self.base_url, self.api_version, model, self.api_key
        )
    }

    /// Entry point of the resumable file-staging protocol.
    pub fn upload_start_url(&self) -> String {
        format!(
            "{}/upload/{}/files?key={}",
            self.base_url, self.api_version, self.api_key
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_new() {
        let config = GeminiSttConfig::new("test-key").unwrap();
        assert_eq!(config.api_key(), "test-key");
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.model(), DEFAULT_MODEL);
    }

    #[test]
    fn test_config_empty_key() {
        let result = GeminiSttConfig::new("");
        assert!(matches!(
            result,
            Err(GeminiSttError::MissingCredential { .. })
        ));

        let result = GeminiSttConfig::new("   ");
        assert!(result.is_err());
    }

    #[test]
    fn test_config_builder() {
        let config = GeminiSttConfig::new("test-key")
            .unwrap()
            .with_base_url("https://custom.api.com")
            .with_model("gemini-3-flash-preview")
            .with_timeout(120);

        assert_eq!(config.base_url(), "https://custom.api.com");
        assert_eq!(config.model(), "gemini-3-flash-preview");
        assert_eq!(config.timeout_seconds(), 120);
    }

    #[test]
    fn test_generate_content_url() {
        let config = GeminiSttConfig::new("test-key").unwrap();
        let url = config.generate_content_url("gemini-2.5-flash-lite");
        assert!(url.contains("models/gemini-2.5-flash-lite:generateContent"));
        assert!(url.contains("key=test-key"));
    }

    #[test]
    fn test_upload_start_url() {
        let config = GeminiSttConfig::new("test-key").unwrap();
        let url = config.upload_start_url();
        assert!(url.contains("/upload/v1beta/files"));
        assert!(url.contains("key=test-key"));
    }
}
