//! Language detection from character-class ratios and lexical cues.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::Arc;

use crate::config::LanguageConfig;
use crate::patterns::PatternLibrary;

/// Closed set of language tags. Exactly one is assigned per message and it
/// never changes for the lifetime of the analysis result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Bangla,
    Spanish,
    Mixed,
    Unknown,
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let tag = match self {
            Language::English => "english",
            Language::Bangla => "bangla",
            Language::Spanish => "spanish",
            Language::Mixed => "mixed",
            Language::Unknown => "unknown",
        };
        write!(f, "{}", tag)
    }
}

/// Detects the language of a message. Total function: degenerate input
/// (empty, digits, punctuation only) yields the configured default tag,
/// which is `english` out of the box so that a keyword list is always
/// defined downstream.
pub struct LanguageDetector {
    config: LanguageConfig,
    patterns: Arc<PatternLibrary>,
}

impl LanguageDetector {
    pub fn new(config: LanguageConfig, patterns: Arc<PatternLibrary>) -> Self {
        Self { config, patterns }
    }

    /// Classify `text` into a language tag. Never fails.
    ///
    /// Decision order: Bengali ratio, then Spanish (accent ratio, lexical
    /// cues, or inverted punctuation), then mixed Bengali/ASCII, then
    /// English.
    pub fn detect(&self, text: &str) -> Language {
        let mut meaningful = 0usize;
        let mut bengali = 0usize;
        let mut accented = 0usize;
        let mut ascii = 0usize;

        for ch in text.chars() {
            if !ch.is_alphabetic() {
                continue;
            }
            meaningful += 1;
            if ('\u{0980}'..='\u{09FF}').contains(&ch) {
                bengali += 1;
            }
            if ch.is_ascii_alphabetic() {
                ascii += 1;
            }
            let folded = ch.to_lowercase().next().unwrap_or(ch);
            if matches!(folded, 'á' | 'é' | 'í' | 'ó' | 'ú' | 'ñ' | 'ü') {
                accented += 1;
            }
        }

        if meaningful == 0 {
            return self.config.default_language;
        }

        let total = meaningful as f64;
        let bengali_ratio = bengali as f64 / total;
        let accented_ratio = accented as f64 / total;
        let ascii_ratio = ascii as f64 / total;

        if bengali_ratio > self.config.bangla_threshold {
            return Language::Bangla;
        }

        let folded = text.to_lowercase();
        let has_cue = self
            .patterns
            .spanish_cues()
            .iter()
            .any(|cue| folded.contains(cue));
        if accented_ratio > self.config.spanish_threshold
            || has_cue
            || text.contains('¿')
            || text.contains('¡')
        {
            return Language::Spanish;
        }

        if bengali_ratio > self.config.mixed_threshold && ascii_ratio > self.config.mixed_threshold
        {
            return Language::Mixed;
        }

        Language::English
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::patterns::DEFAULT_PATTERNS;

    fn detector() -> LanguageDetector {
        LanguageDetector::new(LanguageConfig::default(), DEFAULT_PATTERNS.clone())
    }

    #[test]
    fn test_plain_ascii_is_english() {
        let d = detector();
        assert_eq!(d.detect("Hello, how are you today?"), Language::English);
        assert_eq!(d.detect("Win free cash prizes"), Language::English);
    }

    #[test]
    fn test_bengali_text_is_bangla() {
        let d = detector();
        assert_eq!(d.detect("আপনি পুরস্কার জিতেছেন"), Language::Bangla);
    }

    #[test]
    fn test_spanish_by_accent_ratio() {
        let d = detector();
        assert_eq!(d.detect("garantía de inversión aquí"), Language::Spanish);
    }

    #[test]
    fn test_spanish_by_inverted_punctuation() {
        let d = detector();
        assert_eq!(d.detect("¡Felicitaciones! Has ganado"), Language::Spanish);
    }

    #[test]
    fn test_spanish_by_lexical_cue() {
        let d = detector();
        assert_eq!(d.detect("dinero gratis para ti"), Language::Spanish);
    }

    #[test]
    fn test_mixed_bengali_and_english() {
        let d = detector();
        // Bengali share below the bangla threshold but both scripts present
        assert_eq!(
            d.detect("Please recharge টাকা পাঠান to this account number immediately"),
            Language::Mixed
        );
    }

    #[test]
    fn test_degenerate_input_uses_default() {
        let d = detector();
        assert_eq!(d.detect(""), Language::English);
        assert_eq!(d.detect("12345 !!! ..."), Language::English);
    }
}
