use crate::error::Result;
use crate::language::Language;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Engine configuration. Every threshold used by the detector, extractor and
/// scorer lives here so that no two code paths can drift apart.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DetectorConfig {
    pub language: LanguageConfig,
    pub scoring: ScoringConfig,
    pub model: ModelConfig,
}

/// Language detection thresholds (character-class ratios).
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LanguageConfig {
    /// Bengali-block character ratio above which text is tagged bangla
    pub bangla_threshold: f64,
    /// Spanish accented-letter ratio above which text is tagged spanish
    pub spanish_threshold: f64,
    /// Low ratio both Bengali and ASCII letters must clear for the mixed tag
    pub mixed_threshold: f64,
    /// Tag assigned to empty or all-punctuation/digit input
    pub default_language: Language,
}

/// Rule-based scoring weights and the spam tier boundary.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ScoringConfig {
    /// Points per keyword occurrence
    pub keyword_weight: u32,
    /// Points per urgency-word occurrence
    pub urgency_weight: u32,
    /// Points per high-value signal (phone, money, URL)
    pub high_value_weight: u32,
    /// Score at or above which the verdict is unconditionally spam
    pub spam_threshold: u32,
}

/// Statistical classifier settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ModelConfig {
    /// When false the trained registry is ignored and only rules run
    pub enabled: bool,
    /// Tokens shorter than this (in chars) are dropped by the tokenizer
    pub min_token_chars: usize,
    /// Tokens longer than this (in chars) are dropped by the tokenizer
    pub max_token_chars: usize,
}

impl DetectorConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| crate::error::DetectError::Config(e.to_string()))?;

        toml::from_str(&content).map_err(|e| crate::error::DetectError::Config(e.to_string()))
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            language: LanguageConfig::default(),
            scoring: ScoringConfig::default(),
            model: ModelConfig::default(),
        }
    }
}

impl Default for LanguageConfig {
    fn default() -> Self {
        Self {
            bangla_threshold: 0.3,
            spanish_threshold: 0.1,
            mixed_threshold: 0.1,
            default_language: Language::English,
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            keyword_weight: 1,
            urgency_weight: 1,
            high_value_weight: 2,
            spam_threshold: 4,
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            min_token_chars: 2,
            max_token_chars: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_thresholds() {
        let config = DetectorConfig::default();
        assert_eq!(config.language.bangla_threshold, 0.3);
        assert_eq!(config.language.spanish_threshold, 0.1);
        assert_eq!(config.language.default_language, Language::English);
        assert_eq!(config.scoring.spam_threshold, 4);
    }

    #[test]
    fn test_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("detector.toml");
        std::fs::write(
            &path,
            r#"
[language]
bangla_threshold = 0.25
spanish_threshold = 0.15
mixed_threshold = 0.1
default_language = "english"

[scoring]
keyword_weight = 1
urgency_weight = 1
high_value_weight = 2
spam_threshold = 5

[model]
enabled = false
min_token_chars = 3
max_token_chars = 25
"#,
        )
        .unwrap();

        let config = DetectorConfig::from_file(&path).unwrap();
        assert_eq!(config.language.bangla_threshold, 0.25);
        assert_eq!(config.scoring.spam_threshold, 5);
        assert!(!config.model.enabled);
    }

    #[test]
    fn test_from_file_missing() {
        let err = DetectorConfig::from_file("/nonexistent/detector.toml");
        assert!(err.is_err());
    }
}
