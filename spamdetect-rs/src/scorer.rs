//! Rule-based scoring with a tiered verdict policy.

use crate::config::ScoringConfig;
use crate::types::IndicatorVector;

/// Converts an indicator vector into an integer spam score and a verdict.
///
/// Keyword and urgency hits are weak evidence (1 point each by default);
/// phone numbers, money mentions and URLs are high-value (2 points each).
/// Near the spam threshold the tiering demands corroboration from a
/// high-value signal, so casual use of common keywords alone does not tip
/// the verdict.
pub struct RuleScorer {
    config: ScoringConfig,
}

impl RuleScorer {
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Deterministic, total over any valid indicator vector.
    ///
    /// Tiers, first match wins:
    /// - score >= threshold: spam
    /// - score == threshold - 1: spam iff any high-value signal
    /// - score == threshold - 2: spam iff a high-value signal and a keyword
    /// - otherwise: not spam
    pub fn score(&self, indicators: &IndicatorVector) -> (u32, bool) {
        let score = indicators.spam_keywords * self.config.keyword_weight
            + indicators.urgent_words * self.config.urgency_weight
            + indicators.high_value() * self.config.high_value_weight;

        let threshold = self.config.spam_threshold;
        let is_spam = if score >= threshold {
            true
        } else if score + 1 == threshold {
            indicators.high_value() >= 1
        } else if score + 2 == threshold {
            indicators.high_value() >= 1 && indicators.spam_keywords >= 1
        } else {
            false
        };

        (score, is_spam)
    }
}

impl Default for RuleScorer {
    fn default() -> Self {
        Self::new(ScoringConfig::default())
    }
}
