//! Process-wide read-only lexicons: stop words, synonyms, and profanity.
//!
//! All three resources are initialized once at process start and never
//! mutated afterwards; concurrent requests share them freely. They are passed
//! into the pipeline by explicit reference rather than ambient lookup so that
//! tests can substitute their own lexicons.

use anyhow::{Context, Result};
use lazy_static::lazy_static;
use log::warn;
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

lazy_static! {
    /// Function words across the supported languages, dropped during bias
    /// expansion so a phrase like "the fire inside" keys on "fire".
    static ref STOP_WORDS: HashSet<&'static str> = {
        [
            // English
            "and", "or", "the", "is", "a", "an", "of", "in", "on", "for", "to", "with",
            // Arabic
            "و", "في", "من", "على", "عن", "إلى", "أن", "لكن", "كما",
            // Chinese
            "的", "了", "在", "是", "我", "有", "和", "不", "你", "他", "她",
            // French
            "et", "le", "la", "les", "de", "du", "des", "un", "une", "en",
            // German
            "und", "der", "die", "das", "ein", "eine", "zu", "mit", "von",
            // Italian
            "e", "il", "lo", "gli", "con", "di",
            // Spanish
            "y", "el", "los", "las",
            // Russian
            "и", "в", "на", "с", "что", "это", "как", "но", "а",
        ]
        .into_iter()
        .collect()
    };
}

/// Whether a lowercase token is a known function word.
pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

/// Word-level synonym lookup used by the bias expander.
///
/// The built-in table is a curated set of common lyric themes; deployments
/// with a richer thesaurus can load a `{"word": ["synonym", ...]}` JSON file
/// over it at startup.
#[derive(Debug, Clone)]
pub struct SynonymLexicon {
    map: HashMap<String, Vec<String>>,
}

impl SynonymLexicon {
    /// The curated built-in table.
    pub fn builtin() -> Self {
        let entries: &[(&str, &[&str])] = &[
            ("fire", &["flame", "blaze", "burn", "ember"]),
            ("love", &["passion", "romance", "devotion", "affection"]),
            ("night", &["midnight", "evening", "dark", "moonlight"]),
            ("dance", &["groove", "sway", "move", "rhythm"]),
            ("heart", &["soul", "spirit", "heartbeat"]),
            ("money", &["cash", "gold", "riches", "paper"]),
            ("street", &["block", "road", "avenue", "pavement"]),
            ("rain", &["storm", "downpour", "thunder"]),
            ("dream", &["vision", "fantasy", "reverie"]),
            ("sky", &["heaven", "clouds", "horizon"]),
            ("home", &["house", "hearth", "haven"]),
            ("light", &["glow", "shine", "spark", "flash"]),
            ("pain", &["hurt", "sorrow", "ache", "wound"]),
            ("freedom", &["liberty", "release", "escape"]),
            ("ocean", &["sea", "tide", "wave"]),
            ("star", &["starlight", "stars", "constellation"]),
            ("tears", &["crying", "weeping", "sorrow"]),
            ("alone", &["lonely", "solitude", "lonesome"]),
        ];

        let map = entries
            .iter()
            .map(|(word, syns)| {
                (
                    (*word).to_string(),
                    syns.iter().map(|s| (*s).to_string()).collect(),
                )
            })
            .collect();

        Self { map }
    }

    /// Load a lexicon from a JSON object of `word -> [synonyms]`.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read synonym lexicon at {}", path.display()))?;
        let map: HashMap<String, Vec<String>> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed synonym lexicon at {}", path.display()))?;
        Ok(Self { map })
    }

    /// Synonyms for a lowercase word; empty for unknown words.
    pub fn synonyms(&self, word: &str) -> &[String] {
        self.map.get(word).map_or(&[], Vec::as_slice)
    }
}

/// Capability interface over the profanity lexicon.
///
/// The line generator depends only on this trait, never on which variant is
/// active. A deployment without a usable censor list selects
/// [`PermissiveFilter`] at startup and generation proceeds unfiltered.
pub trait ProfanityFilter: Send + Sync {
    /// Whether a normalized lowercase token is profane.
    fn contains_profanity(&self, token: &str) -> bool;
}

/// Censor-list backed profanity filter.
pub struct WordListFilter {
    words: HashSet<String>,
}

impl WordListFilter {
    /// The stock censor list.
    pub fn builtin() -> Self {
        let words = [
            "ass", "asshole", "bastard", "bitch", "cock", "cunt", "dick", "dyke", "fag",
            "faggot", "fuck", "fucker", "fucking", "hoe", "jackass", "motherfucker", "nigga",
            "nigger", "prick", "pussy", "shit", "shitty", "slut", "twat", "wanker", "whore",
        ]
        .into_iter()
        .map(str::to_string)
        .collect();
        Self { words }
    }

    /// Load a censor list from a JSON array of strings.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read censor list at {}", path.display()))?;
        let list: Vec<String> = serde_json::from_str(&raw)
            .with_context(|| format!("Malformed censor list at {}", path.display()))?;
        Ok(Self {
            words: list.into_iter().map(|w| w.to_lowercase()).collect(),
        })
    }
}

impl ProfanityFilter for WordListFilter {
    fn contains_profanity(&self, token: &str) -> bool {
        self.words.contains(token)
    }
}

/// No-op filter for environments without a censor lexicon.
pub struct PermissiveFilter;

impl ProfanityFilter for PermissiveFilter {
    fn contains_profanity(&self, _token: &str) -> bool {
        false
    }
}

/// The process-wide lexicon bundle injected into the pipeline.
pub struct Lexicons {
    pub synonyms: SynonymLexicon,
    pub profanity: Box<dyn ProfanityFilter>,
}

impl Lexicons {
    /// Built-in synonym table plus the stock censor list.
    pub fn builtin() -> Self {
        Self {
            synonyms: SynonymLexicon::builtin(),
            profanity: Box::new(WordListFilter::builtin()),
        }
    }

    /// Built-in synonyms with profanity filtering disabled.
    pub fn permissive() -> Self {
        Self {
            synonyms: SynonymLexicon::builtin(),
            profanity: Box::new(PermissiveFilter),
        }
    }

    /// Builtin bundle with the censor list replaced from a file, degrading to
    /// the permissive filter when the file cannot be loaded.
    pub fn with_censor_file(path: &Path) -> Self {
        let profanity: Box<dyn ProfanityFilter> = match WordListFilter::from_json_file(path) {
            Ok(filter) => Box::new(filter),
            Err(err) => {
                warn!("censor list unavailable ({err:#}); profanity filtering disabled");
                Box::new(PermissiveFilter)
            }
        };
        Self {
            synonyms: SynonymLexicon::builtin(),
            profanity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stop_words_span_languages() {
        assert!(is_stop_word("the"));
        assert!(is_stop_word("и"));
        assert!(is_stop_word("的"));
        assert!(!is_stop_word("fire"));
    }

    #[test]
    fn builtin_synonyms_cover_common_themes() {
        let lex = SynonymLexicon::builtin();
        assert!(lex.synonyms("fire").contains(&"flame".to_string()));
        assert!(lex.synonyms("unknown-word").is_empty());
    }

    #[test]
    fn word_list_filter_flags_known_tokens() {
        let filter = WordListFilter::builtin();
        assert!(filter.contains_profanity("shit"));
        assert!(!filter.contains_profanity("sunshine"));
    }

    #[test]
    fn permissive_filter_never_flags() {
        let filter = PermissiveFilter;
        assert!(!filter.contains_profanity("shit"));
    }

    #[test]
    fn missing_censor_file_degrades_to_permissive() {
        let lexicons = Lexicons::with_censor_file(Path::new("/nonexistent/censor.json"));
        assert!(!lexicons.profanity.contains_profanity("shit"));
    }
}
