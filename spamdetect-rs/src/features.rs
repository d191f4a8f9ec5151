//! Language-aware feature extraction.
//!
//! Pure functions over the immutable pattern library: the same (text,
//! language) pair always produces a bit-identical indicator vector.

use std::sync::Arc;

use crate::language::Language;
use crate::patterns::{LanguagePatterns, PatternLibrary};
use crate::types::IndicatorVector;

/// Auxiliary statistics fed to the statistical model's feature transform.
/// Not consumed by the rule-based scorer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStats {
    pub word_count: usize,
    pub caps_ratio: f64,
    pub digit_ratio: f64,
    pub punctuation_ratio: f64,
}

/// Collapse whitespace runs to a single space and trim the ends.
pub fn normalize_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

pub struct FeatureExtractor {
    patterns: Arc<PatternLibrary>,
}

impl FeatureExtractor {
    pub fn new(patterns: Arc<PatternLibrary>) -> Self {
        Self { patterns }
    }

    /// Produce the indicator vector for `text` under the given language tag.
    ///
    /// Keyword and urgency matching is substring containment over the
    /// case-folded text, counting every occurrence; a keyword inside a
    /// longer token still counts. Phone matching is presence-only: each
    /// language set contributes at most one `phone_numbers` count no matter
    /// how many of its patterns hit. Money and URL matching count total
    /// occurrences. `Mixed` and `Unknown` sweep every language set.
    pub fn extract(&self, text: &str, language: Language) -> IndicatorVector {
        let normalized = normalize_whitespace(text);
        let folded = normalized.to_lowercase();

        let mut indicators = IndicatorVector {
            text_length: normalized.chars().count(),
            ..Default::default()
        };

        match self.patterns.for_language(language) {
            Some(set) => self.apply_set(set, &normalized, &folded, &mut indicators),
            None => {
                for set in self.patterns.all() {
                    self.apply_set(set, &normalized, &folded, &mut indicators);
                }
            }
        }

        indicators.urls = self.patterns.url.find_iter(&normalized).count() as u32;

        let numeral_runs = self.patterns.bangla_numerals.find_iter(&normalized).count();
        if numeral_runs > 0 {
            indicators
                .extra
                .insert("bangla_numerals".to_string(), numeral_runs as u32);
        }

        indicators
    }

    fn apply_set(
        &self,
        set: &LanguagePatterns,
        normalized: &str,
        folded: &str,
        indicators: &mut IndicatorVector,
    ) {
        for keyword in &set.keywords {
            indicators.spam_keywords += folded.matches(keyword).count() as u32;
        }
        for word in &set.urgency {
            indicators.urgent_words += folded.matches(word).count() as u32;
        }
        if set.phone.iter().any(|re| re.is_match(normalized)) {
            indicators.phone_numbers += 1;
        }
        for re in &set.money {
            indicators.money_mentions += re.find_iter(normalized).count() as u32;
        }
    }

    /// Character-level statistics over the normalized text.
    pub fn text_stats(&self, text: &str) -> TextStats {
        let normalized = normalize_whitespace(text);
        let chars = normalized.chars().count().max(1) as f64;
        TextStats {
            word_count: normalized.split_whitespace().count(),
            caps_ratio: normalized.chars().filter(|c| c.is_ascii_uppercase()).count() as f64
                / chars,
            digit_ratio: normalized.chars().filter(|c| c.is_ascii_digit()).count() as f64 / chars,
            punctuation_ratio: normalized
                .chars()
                .filter(|c| c.is_ascii_punctuation())
                .count() as f64
                / chars,
        }
    }
}
