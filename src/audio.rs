#![allow(missing_docs)]

use std::path::{Path, PathBuf};

use crate::error::{GeminiSttError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioMimeType {
    Mp3,
    Wav,
    Ogg,
    Flac,
    Aac,
    Aiff,
    Mp4,
}

impl AudioMimeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Mp3 => "audio/mp3",
            Self::Wav => "audio/wav",
            Self::Ogg => "audio/ogg",
            Self::Flac => "audio/flac",
            Self::Aac => "audio/aac",
            Self::Aiff => "audio/aiff",
            Self::Mp4 => "audio/mp4",
        }
    }

    /// Map a bare file extension (no dot) onto a MIME type. Case-insensitive.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "mp3" => Some(Self::Mp3),
            "wav" => Some(Self::Wav),
            "ogg" => Some(Self::Ogg),
            "flac" => Some(Self::Flac),
            "aac" => Some(Self::Aac),
            "aiff" => Some(Self::Aiff),
            "m4a" | "mp4" => Some(Self::Mp4),
            _ => None,
        }
    }

    pub fn for_path(path: &Path) -> Self {
        path.extension()
            .and_then(|ext| ext.to_str())
            .and_then(Self::from_extension)
            .unwrap_or_default()
    }

    /// Infer a MIME type from the trailing path extension of a remote
    /// locator, ignoring any query string.
    pub fn for_uri(uri: &str) -> Self {
        let path = uri.split(['?', '#']).next().unwrap_or(uri);
        path.rsplit('/')
            .next()
            .and_then(|name| name.rsplit_once('.'))
            .and_then(|(_, ext)| Self::from_extension(ext))
            .unwrap_or_default()
    }
}

impl Default for AudioMimeType {
    fn default() -> Self {
        Self::Mp3
    }
}

impl std::fmt::Display for AudioMimeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// An audio input: a local file or a locator issued by a previous upload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioSource {
    Local(PathBuf),
    Remote(String),
}

impl AudioSource {
    /// Classify a caller-supplied source string and validate local paths.
    ///
    /// Strings starting with `https://` are treated as already-uploaded
    /// remote resources and are never checked against the filesystem.
    pub fn resolve(input: &str) -> Result<Self> {
        if input.starts_with("https://") {
            return Ok(Self::Remote(input.to_string()));
        }

        let path = PathBuf::from(input);
        let metadata =
            std::fs::metadata(&path).map_err(|_| GeminiSttError::not_found(input))?;
        if !metadata.is_file() {
            return Err(GeminiSttError::invalid_input(format!(
                "path is not a regular file: {}",
                input
            )));
        }

        Ok(Self::Local(path))
    }

    pub fn mime_type(&self) -> AudioMimeType {
        match self {
            Self::Local(path) => AudioMimeType::for_path(path),
            Self::Remote(uri) => AudioMimeType::for_uri(uri),
        }
    }

    pub fn is_remote(&self) -> bool {
        matches!(self, Self::Remote(_))
    }
}
