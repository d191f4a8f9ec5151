//! Per-language statistical text classifiers and the model registry.
//!
//! Naive Bayes over stemmed word tokens plus indicator pseudo-tokens. A
//! model that cannot produce a usable prediction says so through `Option`
//! rather than an error: `None` always means "use the rule-based path".

use rust_stemmers::{Algorithm, Stemmer};
use std::collections::HashMap;

use crate::config::ModelConfig;
use crate::features::{FeatureExtractor, TextStats};
use crate::language::{Language, LanguageDetector};
use crate::types::{IndicatorVector, LabeledMessage, Prediction};

const PHONE_TOKEN: &str = "__phone__";
const MONEY_TOKEN: &str = "__money__";
const URL_TOKEN: &str = "__url__";
const URGENT_TOKEN: &str = "__urgent__";
const CAPS_TOKEN: &str = "__caps_heavy__";
const DIGIT_TOKEN: &str = "__digit_heavy__";

// Ratios above these mark a message as caps- or digit-heavy for the model
const CAPS_HEAVY_RATIO: f64 = 0.3;
const DIGIT_HEAVY_RATIO: f64 = 0.2;

/// Trained Naive Bayes classifier for one language.
pub struct TrainedModel {
    language: Language,
    spam_tokens: HashMap<String, u32>,
    ham_tokens: HashMap<String, u32>,
    spam_count: u32,
    ham_count: u32,
    stemmer: Option<Stemmer>,
    config: ModelConfig,
}

impl TrainedModel {
    pub fn new(language: Language, config: ModelConfig) -> Self {
        let stemmer = match language {
            Language::English => Some(Stemmer::create(Algorithm::English)),
            Language::Spanish => Some(Stemmer::create(Algorithm::Spanish)),
            // No snowball stemmer for Bengali; mixed/unknown text gets none
            Language::Bangla | Language::Mixed | Language::Unknown => None,
        };
        Self {
            language,
            spam_tokens: HashMap::new(),
            ham_tokens: HashMap::new(),
            spam_count: 0,
            ham_count: 0,
            stemmer,
            config,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Number of (spam, ham) messages learned.
    pub fn training_counts(&self) -> (u32, u32) {
        (self.spam_count, self.ham_count)
    }

    /// Learn one message.
    pub fn learn(
        &mut self,
        text: &str,
        indicators: &IndicatorVector,
        stats: &TextStats,
        is_spam: bool,
    ) {
        let tokens = self.transform(text, indicators, stats);
        if is_spam {
            self.spam_count += 1;
            for token in tokens {
                *self.spam_tokens.entry(token).or_insert(0) += 1;
            }
        } else {
            self.ham_count += 1;
            for token in tokens {
                *self.ham_tokens.entry(token).or_insert(0) += 1;
            }
        }
    }

    /// Predict a verdict and probability for `text`.
    ///
    /// Returns `None` when the model is untrained on one of the classes or
    /// the message yields no tokens; the caller then falls back to the
    /// rule-based path. This never fails.
    pub fn predict(
        &self,
        text: &str,
        indicators: &IndicatorVector,
        stats: &TextStats,
    ) -> Option<Prediction> {
        if self.spam_count == 0 || self.ham_count == 0 {
            return None;
        }

        let tokens = self.transform(text, indicators, stats);
        if tokens.is_empty() {
            return None;
        }

        let mut spam_log_sum = 0.0f64;
        let mut ham_log_sum = 0.0f64;
        for token in &tokens {
            let spam_hits = self.spam_tokens.get(token).copied().unwrap_or(0) as f64;
            let ham_hits = self.ham_tokens.get(token).copied().unwrap_or(0) as f64;

            // Laplace smoothing
            let p_spam = (spam_hits + 1.0) / (self.spam_count as f64 + 2.0);
            let p_ham = (ham_hits + 1.0) / (self.ham_count as f64 + 2.0);

            spam_log_sum += p_spam.ln();
            ham_log_sum += p_ham.ln();
        }

        let avg_spam = spam_log_sum / tokens.len() as f64;
        let avg_ham = ham_log_sum / tokens.len() as f64;

        // Squash the log-likelihood gap into (-1, 1)
        let diff = avg_spam - avg_ham;
        let signal = (2.0 / (1.0 + (-diff).exp())) - 1.0;

        let is_spam = signal > 0.0;
        let confidence = (0.5 + signal.abs() / 2.0).min(0.98);

        Some(Prediction { is_spam, confidence })
    }

    /// Feature transform: stemmed word tokens plus pseudo-tokens for the
    /// extracted indicators and text statistics, so the model sees the same
    /// hard signals the rule path scores.
    fn transform(
        &self,
        text: &str,
        indicators: &IndicatorVector,
        stats: &TextStats,
    ) -> Vec<String> {
        let mut tokens = self.tokenize(text);
        if indicators.phone_numbers > 0 {
            tokens.push(PHONE_TOKEN.to_string());
        }
        if indicators.money_mentions > 0 {
            tokens.push(MONEY_TOKEN.to_string());
        }
        if indicators.urls > 0 {
            tokens.push(URL_TOKEN.to_string());
        }
        if indicators.urgent_words > 0 {
            tokens.push(URGENT_TOKEN.to_string());
        }
        if stats.caps_ratio > CAPS_HEAVY_RATIO {
            tokens.push(CAPS_TOKEN.to_string());
        }
        if stats.digit_ratio > DIGIT_HEAVY_RATIO {
            tokens.push(DIGIT_TOKEN.to_string());
        }
        tokens
    }

    fn tokenize(&self, text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| {
                let chars = s.chars().count();
                chars >= self.config.min_token_chars && chars <= self.config.max_token_chars
            })
            .map(|s| match &self.stemmer {
                Some(stemmer) => stemmer.stem(s).to_string(),
                None => s.to_string(),
            })
            .collect()
    }
}

/// Immutable set of trained models, one per language. Built whole by a
/// retrain and installed with a single atomic swap; readers never observe a
/// partially updated registry.
#[derive(Default)]
pub struct ModelRegistry {
    models: HashMap<Language, TrainedModel>,
}

impl ModelRegistry {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, language: Language) -> Option<&TrainedModel> {
        self.models.get(&language)
    }

    pub fn languages(&self) -> Vec<Language> {
        let mut languages: Vec<Language> = self.models.keys().copied().collect();
        languages.sort_by_key(|language| language.to_string());
        languages
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Train one model per detected language over the labeled samples.
    pub fn train(
        samples: &[LabeledMessage],
        detector: &LanguageDetector,
        extractor: &FeatureExtractor,
        config: &ModelConfig,
    ) -> Self {
        let mut models: HashMap<Language, TrainedModel> = HashMap::new();

        for sample in samples {
            let language = detector.detect(&sample.text);
            let indicators = extractor.extract(&sample.text, language);
            let stats = extractor.text_stats(&sample.text);
            models
                .entry(language)
                .or_insert_with(|| TrainedModel::new(language, config.clone()))
                .learn(&sample.text, &indicators, &stats, sample.is_spam);
        }

        Self { models }
    }
}

/// Minimal built-in corpus for smoke-training when no dataset is supplied.
pub fn seed_dataset() -> Vec<LabeledMessage> {
    vec![
        LabeledMessage::new("win free money now", true),
        LabeledMessage::new("click here urgent", true),
        LabeledMessage::new("congratulations winner", true),
        LabeledMessage::new("hello how are you", false),
        LabeledMessage::new("meeting at 3pm", false),
        LabeledMessage::new("thanks for help", false),
    ]
}
