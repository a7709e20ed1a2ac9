#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

use crate::models::{ThinkingConfig, ThinkingLevel};

/// Caller-tunable options for a transcription call.
///
/// Exactly one of the two thinking parameters is honored, selected by the
/// model family; the other is ignored if supplied.
#[derive(Debug, Clone, Default)]
pub struct TranscriptionParams {
    /// Guidance text, e.g. "Transcribe in Hindi". Defaults to
    /// [`crate::config::DEFAULT_PROMPT`].
    pub prompt: Option<String>,
    /// Model identifier. Defaults to [`crate::config::DEFAULT_MODEL`].
    pub model: Option<String>,
    /// Promote per-call breadcrumbs from `debug!` to `info!`.
    pub verbose: bool,
    /// Legacy-family reasoning budget: -1 dynamic, 0 disabled, or
    /// 512-24576 for flash-lite.
    pub thinking_budget: Option<i32>,
    /// Current-family reasoning level.
    pub thinking_level: Option<ThinkingLevel>,
}

impl TranscriptionParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prompt<S: Into<String>>(mut self, prompt: S) -> Self {
        self.prompt = Some(prompt.into());
        self
    }

    pub fn with_model<S: Into<String>>(mut self, model: S) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_thinking_budget(mut self, budget: i32) -> Self {
        self.thinking_budget = Some(budget);
        self
    }

    pub fn with_thinking_level(mut self, level: ThinkingLevel) -> Self {
        self.thinking_level = Some(level);
        self
    }
}

/// Token counts and timing reported for a transcription call.
#[derive(Debug, Clone, PartialEq)]
pub struct TranscriptionUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
    pub thoughts_token_count: u32,
    /// Wall-clock seconds spent in the generation call, rounded to two
    /// decimal places. Upload time is excluded.
    pub processing_time_sec: f64,
}

/// Normalized output of a transcription call.
#[derive(Debug, Clone)]
pub struct TranscriptionResult {
    /// Final transcript text. Empty when the backend returned nothing.
    pub text: String,
    /// Intermediate reasoning, present only when the backend flagged some
    /// output parts as thought parts.
    pub thoughts: Option<String>,
    /// The model identifier the request was issued against.
    pub model: String,
    /// Locator issued by the file-staging step, present only when an upload
    /// occurred. Re-supplying it as the audio source skips re-uploading.
    pub file_uri: Option<String>,
    /// Present only when the backend supplied usage metadata.
    pub usage: Option<TranscriptionUsage>,
}

// ---------------------------------------------------------------------------
// Wire types: generateContent
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentRequest {
    pub contents: Vec<Content>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generation_config: Option<GenerationConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system_instruction: Option<Content>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub parts: Vec<Part>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_data: Option<InlineData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_data: Option<FileData>,
    /// Set by the backend on parts that carry intermediate reasoning.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thought: Option<bool>,
}

impl Part {
    pub fn text<S: Into<String>>(text: S) -> Self {
        Self {
            text: Some(text.into()),
            inline_data: None,
            file_data: None,
            thought: None,
        }
    }

    pub fn inline_data(mime_type: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: Some(InlineData {
                mime_type: mime_type.into(),
                data: data.into(),
            }),
            file_data: None,
            thought: None,
        }
    }

    pub fn file_data(file_uri: impl Into<String>, mime_type: impl Into<String>) -> Self {
        Self {
            text: None,
            inline_data: None,
            file_data: Some(FileData {
                file_uri: file_uri.into(),
                mime_type: mime_type.into(),
            }),
            thought: None,
        }
    }

    pub fn is_thought(&self) -> bool {
        self.thought.unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InlineData {
    pub mime_type: String,
    pub data: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileData {
    pub file_uri: String,
    pub mime_type: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerationConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_config: Option<ThinkingConfigPayload>,
}

/// Wire shape of the thinking envelope. Built from [`ThinkingConfig`] so a
/// request can never carry both a budget and a level.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct ThinkingConfigPayload {
    pub include_thoughts: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_budget: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thinking_level: Option<ThinkingLevel>,
}

impl From<ThinkingConfig> for ThinkingConfigPayload {
    fn from(config: ThinkingConfig) -> Self {
        match config {
            ThinkingConfig::Legacy { budget } => Self {
                include_thoughts: true,
                thinking_budget: Some(budget),
                thinking_level: None,
            },
            ThinkingConfig::Current { level } => Self {
                include_thoughts: true,
                thinking_budget: None,
                thinking_level: level,
            },
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct GenerateContentResponse {
    pub candidates: Option<Vec<Candidate>>,
    pub usage_metadata: Option<UsageMetadata>,
}

impl GenerateContentResponse {
    fn parts(&self) -> impl Iterator<Item = &Part> {
        self.candidates
            .as_deref()
            .and_then(|c| c.first())
            .and_then(|c| c.content.as_ref())
            .map(|content| content.parts.iter())
            .into_iter()
            .flatten()
    }

    /// Concatenated text of all non-thought parts, in original order.
    pub fn transcript_text(&self) -> String {
        self.parts()
            .filter(|p| !p.is_thought())
            .filter_map(|p| p.text.as_deref())
            .collect()
    }

    /// Concatenated text of all thought-flagged parts, in original order.
    pub fn thought_text(&self) -> String {
        self.parts()
            .filter(|p| p.is_thought())
            .filter_map(|p| p.text.as_deref())
            .collect()
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<Content>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UsageMetadata {
    #[serde(default)]
    pub prompt_token_count: u32,
    #[serde(default)]
    pub candidates_token_count: u32,
    #[serde(default)]
    pub total_token_count: u32,
    #[serde(default)]
    pub thoughts_token_count: u32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorDetail {
    pub message: String,
    pub status: String,
}

// ---------------------------------------------------------------------------
// Wire types: file staging
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(crate) struct UploadStartRequest {
    pub file: UploadFileInfo,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct UploadFileInfo {
    pub display_name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateFileResponse {
    pub file: FileMetadata,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileMetadata {
    pub name: Option<String>,
    pub uri: String,
    pub mime_type: Option<String>,
    pub state: Option<String>,
}

/// A staged file as returned by the upload step, reusable across calls.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    /// Opaque locator accepted by the generation endpoint.
    pub uri: String,
    /// MIME type the backend recorded for the staged bytes.
    pub mime_type: Option<String>,
    /// Backend resource name, e.g. `files/abc-123`.
    pub name: Option<String>,
}

impl From<FileMetadata> for UploadedFile {
    fn from(file: FileMetadata) -> Self {
        Self {
            uri: file.uri,
            mime_type: file.mime_type,
            name: file.name,
        }
    }
}
