//! Confidence calibration.
//!
//! Maps (score, indicators, verdict) to a probability-like value. A verdict
//! is never reported below coin-flip confidence and never as perfect
//! certainty.

use crate::types::IndicatorVector;

pub const MIN_CONFIDENCE: f64 = 0.50;
pub const MAX_CONFIDENCE: f64 = 0.98;

const SPAM_BASE: f64 = 0.60;
const PHONE_BOOST: f64 = 0.15;
const MONEY_BOOST: f64 = 0.12;
const URL_BOOST: f64 = 0.10;
const KEYWORD_STEP: f64 = 0.05;
const KEYWORD_CAP: f64 = 0.15;

/// Calibrate a rule-based verdict into [`MIN_CONFIDENCE`, `MAX_CONFIDENCE`].
///
/// Spam verdicts start at a base and gain fixed boosts per present
/// high-value signal plus a capped keyword-density bonus. Ham verdicts lose
/// confidence as the score creeps toward the spam tiers; a single keyword
/// hit is treated as the most forgivable indicator since common words show
/// up in legitimate text.
pub fn calibrate(spam_score: u32, indicators: &IndicatorVector, is_spam: bool) -> f64 {
    let confidence = if is_spam {
        let mut confidence = SPAM_BASE;
        if indicators.phone_numbers >= 1 {
            confidence += PHONE_BOOST;
        }
        if indicators.money_mentions >= 1 {
            confidence += MONEY_BOOST;
        }
        if indicators.urls >= 1 {
            confidence += URL_BOOST;
        }
        confidence += (indicators.spam_keywords as f64 * KEYWORD_STEP).min(KEYWORD_CAP);
        confidence
    } else {
        match spam_score {
            0 => 0.92,
            1 if indicators.spam_keywords >= 1 && indicators.high_value() == 0 => 0.75,
            1 => 0.65,
            2 => 0.58,
            _ => 0.52,
        }
    };

    confidence.clamp(MIN_CONFIDENCE, MAX_CONFIDENCE)
}
