#![allow(missing_docs)]

use std::time::{Duration, Instant};

use base64::Engine;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use tracing::{debug, info};

use crate::audio::AudioSource;
use crate::config::{GeminiSttConfig, DEFAULT_PROMPT, SYSTEM_INSTRUCTION};
use crate::error::{GeminiSttError, Result};
use crate::models::ThinkingConfig;
use crate::types::{
    Content, CreateFileResponse, ErrorResponse, GenerateContentRequest, GenerateContentResponse,
    GenerationConfig, Part, TranscriptionParams, TranscriptionResult, TranscriptionUsage,
    UploadFileInfo, UploadStartRequest, UploadedFile,
};

pub struct GeminiSttClient {
    config: GeminiSttConfig,
    http_client: reqwest::Client,
}

impl GeminiSttClient {
    pub fn new(config: GeminiSttConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http_client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .default_headers(headers)
            .build()
            .map_err(|e| GeminiSttError::http(format!("Failed to build HTTP client: {}", e), None))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiSttConfig {
        &self.config
    }

    /// Transcribe an audio source: a local file path or an `https://`
    /// locator issued by a previous upload.
    ///
    /// Local files are staged through the file-upload endpoint first and the
    /// resulting locator is echoed in the result for reuse. Remote locators
    /// are passed to the generation call as-is, with no upload.
    pub async fn transcribe(
        &self,
        audio_source: &str,
        params: TranscriptionParams,
    ) -> Result<TranscriptionResult> {
        let source = AudioSource::resolve(audio_source)?;
        let model = params
            .model
            .as_deref()
            .unwrap_or(self.config.model())
            .to_string();
        let resolved_mime = source.mime_type();
        let thinking =
            ThinkingConfig::for_model(&model, params.thinking_budget, params.thinking_level);

        if params.verbose {
            info!(model = %model, mime = %resolved_mime, ?thinking, "transcribing audio");
        } else {
            debug!(model = %model, mime = %resolved_mime, ?thinking, "transcribing audio");
        }

        let (audio_part, uploaded_uri) = match &source {
            AudioSource::Remote(uri) => {
                (Part::file_data(uri.clone(), resolved_mime.as_str()), None)
            }
            AudioSource::Local(path) => {
                let staged = self.upload_file(path, resolved_mime.as_str()).await?;
                // The generation request declares the MIME type the backend
                // recorded for the staged bytes, not the locally resolved one.
                let mime = staged
                    .mime_type
                    .clone()
                    .unwrap_or_else(|| resolved_mime.as_str().to_string());
                let uri = staged.uri;
                (Part::file_data(uri.clone(), mime), Some(uri))
            }
        };

        let prompt = params.prompt.as_deref().unwrap_or(DEFAULT_PROMPT);
        let request = build_request(prompt, thinking, audio_part);
        let url = self.config.generate_content_url(&model);

        let started = Instant::now();
        let response: GenerateContentResponse = self.send_request(&url, &request).await?;
        let processing_time_sec = round_to_centis(started.elapsed().as_secs_f64());

        Ok(normalize_response(
            response,
            model,
            uploaded_uri,
            processing_time_sec,
        ))
    }

    /// Transcribe a local file by embedding its bytes base64-encoded in the
    /// generation request instead of staging them through the file-upload
    /// endpoint. Suited to small files; the backend rejects inline payloads
    /// past roughly 20MB.
    pub async fn transcribe_inline(
        &self,
        audio_path: &str,
        params: TranscriptionParams,
    ) -> Result<TranscriptionResult> {
        let source = AudioSource::resolve(audio_path)?;
        let path = match &source {
            AudioSource::Local(path) => path,
            AudioSource::Remote(_) => {
                return Err(GeminiSttError::invalid_input(
                    "inline transcription requires a local file, not a remote locator",
                ));
            }
        };

        let model = params
            .model
            .as_deref()
            .unwrap_or(self.config.model())
            .to_string();
        let mime = source.mime_type();
        let thinking =
            ThinkingConfig::for_model(&model, params.thinking_budget, params.thinking_level);

        let bytes = std::fs::read(path).map_err(|e| {
            GeminiSttError::invalid_input(format!("failed to read {}: {}", path.display(), e))
        })?;
        let encoded = base64::engine::general_purpose::STANDARD.encode(&bytes);

        if params.verbose {
            info!(model = %model, mime = %mime, bytes = bytes.len(), "transcribing inline audio");
        } else {
            debug!(model = %model, mime = %mime, bytes = bytes.len(), "transcribing inline audio");
        }

        let prompt = params.prompt.as_deref().unwrap_or(DEFAULT_PROMPT);
        let request = build_request(prompt, thinking, Part::inline_data(mime.as_str(), encoded));
        let url = self.config.generate_content_url(&model);

        let started = Instant::now();
        let response: GenerateContentResponse = self.send_request(&url, &request).await?;
        let processing_time_sec = round_to_centis(started.elapsed().as_secs_f64());

        Ok(normalize_response(response, model, None, processing_time_sec))
    }

    /// Stage a local file through the backend's resumable upload protocol
    /// and return the issued locator.
    pub async fn upload_file(
        &self,
        path: &std::path::Path,
        mime_type: &str,
    ) -> Result<UploadedFile> {
        let bytes = std::fs::read(path).map_err(|e| {
            GeminiSttError::invalid_input(format!("failed to read {}: {}", path.display(), e))
        })?;
        let display_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("audio")
            .to_string();

        debug!(file = %path.display(), bytes = bytes.len(), mime = %mime_type, "staging audio file");

        let start = self
            .http_client
            .post(self.config.upload_start_url())
            .header("X-Goog-Upload-Protocol", "resumable")
            .header("X-Goog-Upload-Command", "start")
            .header("X-Goog-Upload-Header-Content-Length", bytes.len().to_string())
            .header("X-Goog-Upload-Header-Content-Type", mime_type)
            .json(&UploadStartRequest {
                file: UploadFileInfo { display_name },
            })
            .send()
            .await?;

        if !start.status().is_success() {
            return Err(Self::error_from_response(start).await);
        }

        let upload_url = start
            .headers()
            .get("x-goog-upload-url")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or_else(|| {
                GeminiSttError::parse("upload session response carried no x-goog-upload-url header")
            })?;

        let finish = self
            .http_client
            .post(&upload_url)
            .header(CONTENT_TYPE, mime_type)
            .header("X-Goog-Upload-Command", "upload, finalize")
            .header("X-Goog-Upload-Offset", "0")
            .body(bytes)
            .send()
            .await?;

        if !finish.status().is_success() {
            return Err(Self::error_from_response(finish).await);
        }

        let created: CreateFileResponse = finish.json().await?;
        debug!(uri = %created.file.uri, "audio file staged");
        Ok(created.file.into())
    }

    async fn send_request<T: serde::Serialize, R: serde::de::DeserializeOwned>(
        &self,
        url: &str,
        request: &T,
    ) -> Result<R> {
        let response = self.http_client.post(url).json(request).send().await?;

        if response.status().is_success() {
            let body = response.json::<R>().await?;
            Ok(body)
        } else {
            Err(Self::error_from_response(response).await)
        }
    }

    async fn error_from_response(response: reqwest::Response) -> GeminiSttError {
        let status = response.status();
        let error_body = response.text().await.unwrap_or_default();

        if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(&error_body) {
            if status.as_u16() == 429 {
                return GeminiSttError::RateLimitError {
                    retry_after_seconds: 60,
                };
            }

            return GeminiSttError::ApiError {
                error_type: error_response.error.status,
                message: error_response.error.message,
            };
        }

        GeminiSttError::http(
            format!("API request failed: {} - {}", status, error_body),
            Some(status.as_u16()),
        )
    }
}

fn build_request(
    prompt: &str,
    thinking: ThinkingConfig,
    audio_part: Part,
) -> GenerateContentRequest {
    GenerateContentRequest {
        contents: vec![Content {
            parts: vec![Part::text(prompt), audio_part],
            role: Some("user".to_string()),
        }],
        generation_config: Some(GenerationConfig {
            thinking_config: Some(thinking.into()),
        }),
        system_instruction: Some(Content {
            parts: vec![Part::text(SYSTEM_INSTRUCTION)],
            role: None,
        }),
    }
}

fn normalize_response(
    response: GenerateContentResponse,
    model: String,
    file_uri: Option<String>,
    processing_time_sec: f64,
) -> TranscriptionResult {
    let text = response.transcript_text();
    let thoughts = response.thought_text();
    let usage = response
        .usage_metadata
        .as_ref()
        .map(|metadata| TranscriptionUsage {
            input_tokens: metadata.prompt_token_count,
            output_tokens: metadata.candidates_token_count,
            total_tokens: metadata.total_token_count,
            thoughts_token_count: metadata.thoughts_token_count,
            processing_time_sec,
        });

    TranscriptionResult {
        text,
        thoughts: if thoughts.is_empty() {
            None
        } else {
            Some(thoughts)
        },
        model,
        file_uri,
        usage,
    }
}

fn round_to_centis(seconds: f64) -> f64 {
    (seconds * 100.0).round() / 100.0
}
