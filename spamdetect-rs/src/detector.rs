//! The engine entry point: language detection, feature extraction, model
//! blend and rule-based fallback behind one synchronous call.

use arc_swap::ArcSwap;
use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info};

use crate::confidence;
use crate::config::DetectorConfig;
use crate::features::FeatureExtractor;
use crate::language::{Language, LanguageDetector};
use crate::model::ModelRegistry;
use crate::patterns::{PatternLibrary, DEFAULT_PATTERNS};
use crate::scorer::RuleScorer;
use crate::types::{ClassificationResult, LabeledMessage, TrainingReport};

/// Multi-language spam detector.
///
/// Stateless per request; the only shared mutable piece is the trained model
/// registry, which is replaced wholesale by [`retrain`](Self::retrain) via
/// an atomic pointer swap. Concurrent classifications proceed without locks.
pub struct SpamDetector {
    config: DetectorConfig,
    language: LanguageDetector,
    extractor: FeatureExtractor,
    scorer: RuleScorer,
    registry: ArcSwap<ModelRegistry>,
}

impl SpamDetector {
    /// Create a detector over the process-wide default pattern library.
    pub fn new(config: DetectorConfig) -> Self {
        Self::with_patterns(config, DEFAULT_PATTERNS.clone())
    }

    /// Create a detector over a custom pattern library.
    pub fn with_patterns(config: DetectorConfig, patterns: Arc<PatternLibrary>) -> Self {
        Self {
            language: LanguageDetector::new(config.language.clone(), patterns.clone()),
            extractor: FeatureExtractor::new(patterns),
            scorer: RuleScorer::new(config.scoring.clone()),
            registry: ArcSwap::from_pointee(ModelRegistry::empty()),
            config,
        }
    }

    /// Classify one message.
    ///
    /// Always returns a complete result: empty input is valid (zero-length
    /// indicators, ham verdict), an unrecognized script falls back to the
    /// default language's keyword set, and a missing or unhelpful
    /// statistical model silently yields to the rule-based path. The
    /// indicator breakdown is always the rule-based extraction, even when
    /// the model supplies the verdict.
    pub fn classify(&self, text: &str, hint: Option<Language>) -> ClassificationResult {
        let language = hint.unwrap_or_else(|| self.language.detect(text));
        let indicators = self.extractor.extract(text, language);

        if self.config.model.enabled {
            let registry = self.registry.load();
            if let Some(model) = registry.get(language) {
                let stats = self.extractor.text_stats(text);
                if let Some(prediction) = model.predict(text, &indicators, &stats) {
                    debug!(
                        %language,
                        is_spam = prediction.is_spam,
                        confidence = prediction.confidence,
                        "statistical model supplied the verdict"
                    );
                    return ClassificationResult {
                        is_spam: prediction.is_spam,
                        confidence: prediction.confidence,
                        language,
                        indicators,
                    };
                }
            }
        }

        let (score, is_spam) = self.scorer.score(&indicators);
        let calibrated = confidence::calibrate(score, &indicators, is_spam);
        debug!(%language, score, is_spam, "rule-based verdict");

        ClassificationResult {
            is_spam,
            confidence: calibrated,
            language,
            indicators,
        }
    }

    /// Rebuild the model registry from labeled samples and install it with
    /// a single atomic swap. In-flight classifications keep the registry
    /// they loaded; later ones see the new set, never a partial one.
    pub fn retrain(&self, samples: &[LabeledMessage]) -> anyhow::Result<TrainingReport> {
        if samples.is_empty() {
            anyhow::bail!("training set is empty");
        }

        let registry = ModelRegistry::train(
            samples,
            &self.language,
            &self.extractor,
            &self.config.model,
        );

        let spam = samples.iter().filter(|s| s.is_spam).count();
        let report = TrainingReport {
            total: samples.len(),
            spam,
            ham: samples.len() - spam,
            languages: registry.languages(),
            trained_at: Utc::now(),
        };

        self.registry.store(Arc::new(registry));
        info!(
            total = report.total,
            spam = report.spam,
            ham = report.ham,
            "model registry retrained"
        );

        Ok(report)
    }

    /// Drop all trained models; every classification reverts to rules.
    pub fn clear_models(&self) {
        self.registry.store(Arc::new(ModelRegistry::empty()));
    }

    /// Languages that currently have a trained model.
    pub fn trained_languages(&self) -> Vec<Language> {
        self.registry.load().languages()
    }
}

impl Default for SpamDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::seed_dataset;

    #[test]
    fn test_empty_input_yields_valid_ham_result() {
        let detector = SpamDetector::default();
        let result = detector.classify("", None);
        assert!(!result.is_spam);
        assert_eq!(result.language, Language::English);
        assert_eq!(result.indicators.text_length, 0);
        assert!(result.confidence >= 0.9);
    }

    #[test]
    fn test_hint_overrides_detection() {
        let detector = SpamDetector::default();
        let result = detector.classify("hola amigo", Some(Language::Spanish));
        assert_eq!(result.language, Language::Spanish);
    }

    #[test]
    fn test_empty_registry_uses_rules() {
        let detector = SpamDetector::default();
        assert!(detector.trained_languages().is_empty());
        let result = detector.classify("Win free money now! Call 123-456-7890", None);
        assert!(result.is_spam);
    }

    #[test]
    fn test_model_verdict_replaces_rules() {
        let detector = SpamDetector::default();
        detector.retrain(&seed_dataset()).unwrap();

        // "congratulations winner" scores keyword points only, so the rule
        // path alone calls it ham; the trained model calls it spam.
        let result = detector.classify("congratulations winner", None);
        assert!(result.is_spam);
        // indicators still come from the rule-based extraction
        assert!(result.indicators.spam_keywords >= 2);
    }

    #[test]
    fn test_model_misses_language_and_falls_back() {
        let detector = SpamDetector::default();
        detector.retrain(&seed_dataset()).unwrap();
        assert_eq!(detector.trained_languages(), vec![Language::English]);

        // No Bangla model trained; the rule path still produces a verdict
        let result = detector.classify("আপনি ১ লক্ষ টাকা জিতেছেন! এখনই কল করুন", None);
        assert_eq!(result.language, Language::Bangla);
        assert!(result.is_spam);
    }

    #[test]
    fn test_clear_models_reverts_to_rules() {
        let detector = SpamDetector::default();
        detector.retrain(&seed_dataset()).unwrap();
        assert!(!detector.trained_languages().is_empty());

        detector.clear_models();
        assert!(detector.trained_languages().is_empty());

        let result = detector.classify("hello there", None);
        assert!(!result.is_spam);
    }

    #[test]
    fn test_retrain_rejects_empty_dataset() {
        let detector = SpamDetector::default();
        assert!(detector.retrain(&[]).is_err());
    }

    #[test]
    fn test_retrain_report_counts() {
        let detector = SpamDetector::default();
        let report = detector.retrain(&seed_dataset()).unwrap();
        assert_eq!(report.total, 6);
        assert_eq!(report.spam, 3);
        assert_eq!(report.ham, 3);
        assert_eq!(report.languages, vec![Language::English]);
    }

    #[test]
    fn test_model_disabled_by_config() {
        let mut config = DetectorConfig::default();
        config.model.enabled = false;
        let detector = SpamDetector::new(config);
        detector.retrain(&seed_dataset()).unwrap();

        // Rules call this ham even though the trained model would not
        let result = detector.classify("congratulations winner", None);
        assert!(!result.is_spam);
    }
}
