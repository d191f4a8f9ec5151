//! spamdetect-rs: Multi-language spam-signal extraction and scoring engine
//!
//! Classifies short free-text messages (email/SMS/social snippets) as spam
//! or legitimate across English, Bangla, Spanish and mixed text, producing
//! a verdict, a calibrated confidence, a language tag and an indicator
//! breakdown.
//!
//! # Pipeline
//!
//! Raw text → language detection → language-aware feature extraction →
//! optional statistical model → rule-based scoring → confidence calibration.
//! A trained model's prediction replaces the rule-based verdict outright;
//! when no model is available for the detected language the rule path
//! answers, silently and always.
//!
//! # Example
//!
//! ```
//! use spamdetect_rs::{DetectorConfig, SpamDetector};
//!
//! let detector = SpamDetector::new(DetectorConfig::default());
//! let result = detector.classify("Win free money now! Call 123-456-7890", None);
//! assert!(result.is_spam);
//! ```
//!
//! # Modules
//!
//! - [`config`]: Thresholds and weights, one canonical source
//! - [`patterns`]: Immutable per-language keyword lists and regexes
//! - [`language`]: Language tag and detector
//! - [`features`]: Indicator vector extraction
//! - [`scorer`]: Tiered rule-based scoring
//! - [`confidence`]: Verdict confidence calibration
//! - [`model`]: Per-language statistical classifiers and registry
//! - [`detector`]: The `classify`/`retrain` entry points

pub mod confidence;
pub mod config;
pub mod detector;
pub mod error;
pub mod features;
pub mod language;
pub mod model;
pub mod patterns;
pub mod scorer;
pub mod types;

// Re-export commonly used types
pub use config::DetectorConfig;
pub use detector::SpamDetector;
pub use error::{DetectError, Result};
pub use language::Language;
pub use types::{ClassificationResult, IndicatorVector, LabeledMessage, TrainingReport};
