#![allow(missing_docs)]

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeminiSttError>;

#[derive(Error, Debug)]
pub enum GeminiSttError {
    #[error("API key error: {message}")]
    MissingCredential { message: String },

    #[error("audio file not found: {path}")]
    NotFound { path: String },

    #[error("invalid audio input: {message}")]
    InvalidInput { message: String },

    #[error("API error ({error_type}): {message}")]
    ApiError { error_type: String, message: String },

    #[error("HTTP request failed: {message}")]
    HttpError {
        message: String,
        status_code: Option<u16>,
    },

    #[error("Rate limit exceeded: retry after {retry_after_seconds} seconds")]
    RateLimitError { retry_after_seconds: u64 },

    #[error("Network error: {message}")]
    NetworkError { message: String },

    #[error("Request timed out after {timeout_seconds} seconds")]
    Timeout { timeout_seconds: u64 },

    #[error("Server error ({status_code}): {message}")]
    ServerError { status_code: u16, message: String },

    #[error("Response parsing error: {message}")]
    ParseError { message: String },
}

impl GeminiSttError {
    pub fn missing_credential<S: Into<String>>(message: S) -> Self {
        Self::MissingCredential {
            message: message.into(),
        }
    }

    pub fn not_found<S: Into<String>>(path: S) -> Self {
        Self::NotFound { path: path.into() }
    }

    pub fn invalid_input<S: Into<String>>(message: S) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub fn http<S: Into<String>>(message: S, status_code: Option<u16>) -> Self {
        Self::HttpError {
            message: message.into(),
            status_code,
        }
    }

    pub fn parse<S: Into<String>>(message: S) -> Self {
        Self::ParseError {
            message: message.into(),
        }
    }

    /// True for failures raised by the upload or generation call rather than
    /// by local validation.
    pub fn is_backend(&self) -> bool {
        !matches!(
            self,
            Self::MissingCredential { .. } | Self::NotFound { .. } | Self::InvalidInput { .. }
        )
    }

    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            Self::RateLimitError { .. }
                | Self::NetworkError { .. }
                | Self::Timeout { .. }
                | Self::ServerError { .. }
        )
    }

    pub fn retry_after(&self) -> Option<u64> {
        match self {
            Self::RateLimitError {
                retry_after_seconds,
            } => Some(*retry_after_seconds),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for GeminiSttError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            Self::Timeout {
                timeout_seconds: 60,
            }
        } else if err.is_connect() {
            Self::NetworkError {
                message: format!("Connection failed: {}", err),
            }
        } else if let Some(status) = err.status() {
            let code = status.as_u16();
            if code == 429 {
                Self::RateLimitError {
                    retry_after_seconds: 60,
                }
            } else if code >= 500 {
                Self::ServerError {
                    status_code: code,
                    message: err.to_string(),
                }
            } else {
                Self::HttpError {
                    message: err.to_string(),
                    status_code: Some(code),
                }
            }
        } else {
            Self::NetworkError {
                message: err.to_string(),
            }
        }
    }
}

impl From<serde_json::Error> for GeminiSttError {
    fn from(err: serde_json::Error) -> Self {
        Self::ParseError {
            message: err.to_string(),
        }
    }
}
