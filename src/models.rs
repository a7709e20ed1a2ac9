#![allow(missing_docs)]

use serde::{Deserialize, Serialize};

/// Which generation of thinking controls a model accepts.
///
/// Gemini 2.x models take a numeric thinking budget; Gemini 3 models take a
/// named thinking level. Identifiers that match neither pattern are handled
/// as legacy so that newly released 2.x-style ids keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelFamily {
    Legacy,
    Current,
}

impl ModelFamily {
    pub const GEMINI_2_5_FLASH_LITE: &'static str = "gemini-2.5-flash-lite";
    pub const GEMINI_2_5_FLASH: &'static str = "gemini-2.5-flash";
    pub const GEMINI_3_FLASH_PREVIEW: &'static str = "gemini-3-flash-preview";

    /// Classify a model identifier. Total over all strings; never fails.
    pub fn of(model_id: &str) -> Self {
        if model_id.contains("gemini-3") {
            Self::Current
        } else {
            Self::Legacy
        }
    }
}

/// Named reasoning-depth control for current-family models.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThinkingLevel {
    Minimal,
    Low,
    Medium,
    High,
}

impl ThinkingLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Minimal => "minimal",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl std::fmt::Display for ThinkingLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Thinking configuration for a generation request, selected once per call
/// by the model family. Legacy models only ever see a budget, current
/// models only ever see a level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThinkingConfig {
    /// Numeric budget: -1 for dynamic, 0 to disable, or 512-24576.
    Legacy { budget: i32 },
    /// Named level; `None` lets the backend apply its own default.
    Current { level: Option<ThinkingLevel> },
}

impl ThinkingConfig {
    /// Build the envelope for `model_id` from the caller's thinking options.
    /// The option belonging to the other family is ignored without error.
    pub fn for_model(
        model_id: &str,
        thinking_budget: Option<i32>,
        thinking_level: Option<ThinkingLevel>,
    ) -> Self {
        match ModelFamily::of(model_id) {
            ModelFamily::Current => Self::Current {
                level: thinking_level,
            },
            ModelFamily::Legacy => Self::Legacy {
                budget: thinking_budget.unwrap_or(-1),
            },
        }
    }

    pub fn family(&self) -> ModelFamily {
        match self {
            Self::Legacy { .. } => ModelFamily::Legacy,
            Self::Current { .. } => ModelFamily::Current,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_classification() {
        assert_eq!(
            ModelFamily::of(ModelFamily::GEMINI_2_5_FLASH_LITE),
            ModelFamily::Legacy
        );
        assert_eq!(ModelFamily::of("gemini-2.0-flash-001"), ModelFamily::Legacy);
        assert_eq!(
            ModelFamily::of(ModelFamily::GEMINI_3_FLASH_PREVIEW),
            ModelFamily::Current
        );
        assert_eq!(ModelFamily::of("gemini-3-pro-preview"), ModelFamily::Current);
    }

    #[test]
    fn test_unrecognized_ids_are_legacy() {
        assert_eq!(ModelFamily::of("gemini-9000"), ModelFamily::Legacy);
        assert_eq!(ModelFamily::of("some-future-model"), ModelFamily::Legacy);
        assert_eq!(ModelFamily::of(""), ModelFamily::Legacy);
    }

    #[test]
    fn test_legacy_budget_defaults_to_dynamic() {
        let config = ThinkingConfig::for_model("gemini-2.5-flash-lite", None, None);
        assert_eq!(config, ThinkingConfig::Legacy { budget: -1 });
    }

    #[test]
    fn test_legacy_ignores_level() {
        let config = ThinkingConfig::for_model(
            "gemini-2.5-flash-lite",
            Some(1024),
            Some(ThinkingLevel::High),
        );
        assert_eq!(config, ThinkingConfig::Legacy { budget: 1024 });
    }

    #[test]
    fn test_current_ignores_budget() {
        let config = ThinkingConfig::for_model(
            "gemini-3-flash-preview",
            Some(1024),
            Some(ThinkingLevel::High),
        );
        assert_eq!(
            config,
            ThinkingConfig::Current {
                level: Some(ThinkingLevel::High)
            }
        );
    }

    #[test]
    fn test_current_level_unset_by_default() {
        let config = ThinkingConfig::for_model("gemini-3-flash-preview", None, None);
        assert_eq!(config, ThinkingConfig::Current { level: None });
    }

    #[test]
    fn test_level_serializes_lowercase() {
        assert_eq!(
            serde_json::to_string(&ThinkingLevel::Minimal).unwrap(),
            "\"minimal\""
        );
        assert_eq!(
            serde_json::to_string(&ThinkingLevel::High).unwrap(),
            "\"high\""
        );
    }
}
