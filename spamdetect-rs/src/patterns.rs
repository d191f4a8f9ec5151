//! Pattern library: immutable per-language keyword lists and compiled
//! regular expressions.
//!
//! Built once, shared as `Arc<PatternLibrary>` across all concurrent
//! evaluations. Both the language detector and the feature extractor read
//! from this one object so their cue lists cannot drift apart.

use once_cell::sync::Lazy;
use regex::Regex;
use std::sync::Arc;

use crate::language::Language;

/// Process-wide default library instance.
pub static DEFAULT_PATTERNS: Lazy<Arc<PatternLibrary>> =
    Lazy::new(|| Arc::new(PatternLibrary::new()));

/// Keyword lists and matchers for a single language.
pub struct LanguagePatterns {
    /// Spam keywords, lower-cased, matched by substring containment
    pub keywords: Vec<&'static str>,
    /// Phone number patterns; presence of any one match counts once
    pub phone: Vec<Regex>,
    /// Currency symbol / currency word patterns
    pub money: Vec<Regex>,
    /// Urgency words, lower-cased, matched by substring containment
    pub urgency: Vec<&'static str>,
}

pub struct PatternLibrary {
    english: LanguagePatterns,
    bangla: LanguagePatterns,
    spanish: LanguagePatterns,
    /// Language-agnostic URL matcher, applied once per message
    pub url: Regex,
    /// Bengali-digit runs, attached as a language-specific extra count
    pub bangla_numerals: Regex,
    /// High-signal Spanish words used by the language detector
    spanish_cues: Vec<&'static str>,
}

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).expect("pattern library regex must compile")
}

impl PatternLibrary {
    pub fn new() -> Self {
        Self {
            english: LanguagePatterns {
                keywords: vec![
                    "free",
                    "win",
                    "winner",
                    "cash",
                    "prize",
                    "urgent",
                    "offer",
                    "limited",
                    "click",
                    "call now",
                    "guarantee",
                    "discount",
                    "congratulation",
                    "lucky",
                    "selected",
                    "money",
                    "loan",
                    "credit",
                    "debt",
                    "income",
                    "profit",
                    "bonus",
                    "reward",
                    "exclusive",
                    "limited time",
                    "act now",
                    "hurry",
                    "today only",
                    "investment",
                    "business opportunity",
                    "work from home",
                ],
                phone: vec![compile(r"\b\d{3}[-.]?\d{3}[-.]?\d{4}\b")],
                money: vec![
                    compile(r"[$€£]\s*\d+"),
                    compile(r"(?i)\d+\s*(?:dollars|euro|pound|usd|eur|gbp)"),
                ],
                urgency: vec![
                    "urgent",
                    "now",
                    "hurry",
                    "limited time",
                    "act now",
                    "today only",
                ],
            },
            bangla: LanguagePatterns {
                keywords: vec![
                    "বিনামূল্যে",
                    "ফ্রি",
                    "জিতুন",
                    "পুরস্কার",
                    "লটারি",
                    "টাকা",
                    "অফার",
                    "ছাড়",
                    "জরুরি",
                    "এখনই",
                    "ক্লিক",
                    "কল করুন",
                    "গ্যারান্টি",
                    "বিজয়ী",
                    "লাভজনক",
                    "সুযোগ",
                    "সীমিত",
                    "দ্রুত",
                    "নিশ্চিত",
                    "জিতেছেন",
                    "পেতে",
                    "রিচার্জ",
                    "লক্ষ",
                    "হাজার",
                    "কোটি",
                    "একাউন্ট",
                    "বন্ধ",
                    "সমস্যা",
                    "বিশেষ",
                    "ডিসকাউন্ট",
                    "মোবাইল",
                    "ফোন",
                    "নম্বর",
                    "এসএমএস",
                ],
                phone: vec![
                    // Bangladeshi mobile, optional country code
                    compile(r"(\+?88)?[-\s]?01[3-9]\d{8}"),
                    // Eleven Bengali digits in a row
                    compile(r"[০-৯]{11}"),
                ],
                money: vec![
                    compile(r"৳\s*[\d০-৯]+"),
                    compile(r"[\d০-৯]+\s*(?:টাকা|হাজার|লক্ষ|লাখ|কোটি)"),
                ],
                urgency: vec!["জরুরি", "এখনই", "তাড়াতাড়ি", "দ্রুত", "অবিলম্বে"],
            },
            spanish: LanguagePatterns {
                keywords: vec![
                    "gratis",
                    "ganar",
                    "ganador",
                    "dinero",
                    "premio",
                    "urgente",
                    "oferta",
                    "limitado",
                    "clic",
                    "llame ahora",
                    "garantía",
                    "descuento",
                    "felicitaciones",
                    "suerte",
                    "seleccionado",
                    "préstamo",
                    "crédito",
                    "efectivo",
                    "bono",
                    "exclusivo",
                    "tiempo limitado",
                    "oportunidad",
                    "trabaja desde casa",
                    "inversión",
                    "ganancias",
                    "promoción",
                ],
                phone: vec![
                    // Spanish mobile/landline, nine digits
                    compile(r"\b[679]\d{2}[-\s]?\d{3}[-\s]?\d{3}\b"),
                ],
                money: vec![
                    compile(r"[$€]\s*\d+"),
                    compile(r"(?i)\d+\s*(?:euros?|pesos?|dólares|eur)"),
                ],
                urgency: vec!["urgente", "ahora", "rápido", "inmediatamente", "hoy mismo"],
            },
            url: compile(r"https?://[A-Za-z0-9$\-_@.&+!*(),%/:~#=?]+"),
            bangla_numerals: compile(r"[০-৯]+"),
            spanish_cues: vec!["gratis", "ganar", "dinero", "euros", "premio", "oferta"],
        }
    }

    /// Matchers for a concrete language tag. `Mixed` and `Unknown` have no
    /// list of their own; callers sweep [`Self::all`] instead.
    pub fn for_language(&self, language: Language) -> Option<&LanguagePatterns> {
        match language {
            Language::English => Some(&self.english),
            Language::Bangla => Some(&self.bangla),
            Language::Spanish => Some(&self.spanish),
            Language::Mixed | Language::Unknown => None,
        }
    }

    pub fn all(&self) -> [&LanguagePatterns; 3] {
        [&self.english, &self.bangla, &self.spanish]
    }

    pub fn spanish_cues(&self) -> &[&'static str] {
        &self.spanish_cues
    }
}

impl Default for PatternLibrary {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_compiles() {
        let library = PatternLibrary::new();
        for set in library.all() {
            assert!(!set.keywords.is_empty());
            assert!(!set.phone.is_empty());
            assert!(!set.money.is_empty());
            assert!(!set.urgency.is_empty());
        }
    }

    #[test]
    fn test_nanp_phone_matches() {
        let library = PatternLibrary::new();
        let english = library.for_language(Language::English).unwrap();
        assert!(english.phone.iter().any(|re| re.is_match("123-456-7890")));
        assert!(english.phone.iter().any(|re| re.is_match("123.456.7890")));
        assert!(!english.phone.iter().any(|re| re.is_match("12-34")));
    }

    #[test]
    fn test_bd_mobile_matches() {
        let library = PatternLibrary::new();
        let bangla = library.for_language(Language::Bangla).unwrap();
        assert!(bangla.phone.iter().any(|re| re.is_match("+8801712345678")));
        assert!(bangla.phone.iter().any(|re| re.is_match("01812345678")));
    }

    #[test]
    fn test_money_patterns() {
        let library = PatternLibrary::new();
        let english = library.for_language(Language::English).unwrap();
        assert!(english.money.iter().any(|re| re.is_match("$ 500")));
        assert!(english.money.iter().any(|re| re.is_match("1000 dollars")));

        let bangla = library.for_language(Language::Bangla).unwrap();
        assert!(bangla.money.iter().any(|re| re.is_match("৳ ৫০০")));
        assert!(bangla.money.iter().any(|re| re.is_match("১ লক্ষ")));

        let spanish = library.for_language(Language::Spanish).unwrap();
        assert!(spanish.money.iter().any(|re| re.is_match("1000 euros")));
    }

    #[test]
    fn test_url_matches() {
        let library = PatternLibrary::new();
        assert_eq!(
            library
                .url
                .find_iter("see http://a.com and https://b.org/x?q=1")
                .count(),
            2
        );
    }
}
