//! Bias expansion: turning a free-text theme phrase into a keyword set.
//!
//! The expanded set drives both the storage-layer containment filter and the
//! assembler's line filtering, so ordering must be deterministic; a
//! `BTreeSet` keeps the generated SQL stable across runs.

use crate::lexicon::{is_stop_word, SynonymLexicon};
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    static ref WORD_RE: Regex = Regex::new(r"\w+").unwrap();
}

/// Expand a bias phrase into lowercase keywords plus their synonyms.
///
/// Tokenizes the phrase, drops stop words, then augments each surviving
/// token with its lexicon synonyms. Synonym lookup is word-level only;
/// multi-word phrases are carried through as candidate keywords but never
/// looked up themselves.
///
/// Returns an empty set for phrases under 3 characters or phrases made
/// entirely of stop words.
pub fn expand(phrase: &str, lexicon: &SynonymLexicon) -> BTreeSet<String> {
    let trimmed = phrase.trim();
    if trimmed.chars().count() < 3 {
        return BTreeSet::new();
    }

    let words: Vec<String> = WORD_RE
        .find_iter(trimmed)
        .map(|m| m.as_str().to_lowercase())
        .filter(|w| !is_stop_word(w))
        .collect();

    let mut expanded: BTreeSet<String> = words.iter().cloned().collect();
    for word in &words {
        for synonym in lexicon.synonyms(word) {
            let synonym = synonym.replace('_', " ").to_lowercase();
            if !is_stop_word(&synonym) {
                expanded.insert(synonym);
            }
        }
    }
    expanded
}
