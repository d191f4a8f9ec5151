//! Core data types shared across the engine.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::language::Language;

/// Structured count of spam-relevant signals extracted from one message.
///
/// The six named counters are always present; `extra` carries optional
/// language-specific counts (e.g. Bengali numeral runs).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorVector {
    pub spam_keywords: u32,
    pub phone_numbers: u32,
    pub money_mentions: u32,
    pub urgent_words: u32,
    pub urls: u32,
    /// Character count of the whitespace-normalized input
    pub text_length: usize,
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, u32>,
}

impl IndicatorVector {
    /// Combined count of the high-value signals (phone, money, URL).
    pub fn high_value(&self) -> u32 {
        self.phone_numbers + self.money_mentions + self.urls
    }
}

/// Outcome of classifying a single message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationResult {
    /// Spam verdict
    #[serde(rename = "isSpam")]
    pub is_spam: bool,
    /// Calibrated confidence in [0.50, 0.98]
    pub confidence: f64,
    /// Detected (or hinted) language tag
    pub language: Language,
    /// Rule-based indicator breakdown, returned for explainability even
    /// when the statistical model supplied the verdict
    pub indicators: IndicatorVector,
}

/// Verdict and probability produced by a trained statistical model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub is_spam: bool,
    pub confidence: f64,
}

/// A labeled training sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LabeledMessage {
    pub text: String,
    pub is_spam: bool,
}

impl LabeledMessage {
    pub fn new(text: impl Into<String>, is_spam: bool) -> Self {
        Self {
            text: text.into(),
            is_spam,
        }
    }
}

/// Summary returned by a retrain operation.
#[derive(Debug, Clone, Serialize)]
pub struct TrainingReport {
    /// Samples consumed
    pub total: usize,
    /// Spam samples
    pub spam: usize,
    /// Ham samples
    pub ham: usize,
    /// Languages that now have a trained model
    pub languages: Vec<Language>,
    pub trained_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_value_sum() {
        let indicators = IndicatorVector {
            phone_numbers: 1,
            money_mentions: 2,
            urls: 1,
            ..Default::default()
        };
        assert_eq!(indicators.high_value(), 4);
    }

    #[test]
    fn test_result_serializes_camel_case_verdict() {
        let result = ClassificationResult {
            is_spam: true,
            confidence: 0.9,
            language: Language::English,
            indicators: IndicatorVector::default(),
        };
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["isSpam"], true);
        assert_eq!(json["language"], "english");
        assert_eq!(json["indicators"]["spam_keywords"], 0);
    }
}
