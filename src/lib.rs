//! Speech-to-text client for Google's Gemini API.
//!
//! This crate sends audio to Gemini's generation endpoint and returns the
//! transcript plus optional "thinking" output and token-usage statistics.
//! Local files are staged through the Files API and the issued locator is
//! returned for reuse; `https://` locators from a previous call are accepted
//! directly and skip the upload.
//!
//! # Example
//!
//! ```rust,no_run
//! use gemini_stt::{audio_to_text, TranscriptionParams};
//!
//! # async fn example() -> gemini_stt::Result<()> {
//! let result = audio_to_text(
//!     "speech.mp3",
//!     &std::env::var("GEMINI_API_KEY").unwrap(),
//!     TranscriptionParams::new(),
//! )
//! .await?;
//! println!("{}", result.text);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![deny(unsafe_code)]

pub mod audio;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod types;

pub use audio::{AudioMimeType, AudioSource};
pub use client::GeminiSttClient;
pub use config::{GeminiSttConfig, DEFAULT_MODEL, DEFAULT_PROMPT};
pub use error::{GeminiSttError, Result};
pub use models::{ModelFamily, ThinkingConfig, ThinkingLevel};
pub use types::{
    TranscriptionParams, TranscriptionResult, TranscriptionUsage, UploadedFile,
};

/// Transcribe an audio source in one call.
///
/// `audio_source` is a local file path or an `https://` locator returned by
/// a previous call's `file_uri`. The API key is validated before any I/O;
/// an empty key fails with [`GeminiSttError::MissingCredential`].
pub async fn audio_to_text(
    audio_source: &str,
    api_key: &str,
    params: TranscriptionParams,
) -> Result<TranscriptionResult> {
    let config = GeminiSttConfig::new(api_key)?;
    let client = GeminiSttClient::new(config)?;
    client.transcribe(audio_source, params).await
}

/// Creates a client using configuration from environment variables.
///
/// # Errors
///
/// Returns an error if no API key is set in the environment.
pub fn create_client_from_env() -> Result<GeminiSttClient> {
    let config = GeminiSttConfig::from_env()?;
    GeminiSttClient::new(config)
}
