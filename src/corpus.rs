//! Corpus assembly: cleaning, bias filtering, and emphasis.
//!
//! Turns the raw tier-retrieved text into the single newline-delimited string
//! the model trains on. The invariant this module defends: the returned
//! corpus is either generation-ready or the raw fallback; cleaning must
//! never leave the model un-buildable.

use crate::config::{EMPHASIS_MULTIPLIER, MIN_CORPUS_SIZE, MIN_MODEL_CORPUS};
use crate::language::Script;
use crate::normalize;
use crate::seeds::genre_seed_lines;
use log::{debug, warn};
use std::collections::BTreeSet;

/// Keep only lines containing at least one bias keyword (case-insensitive
/// substring containment). An empty keyword set passes everything through.
pub fn filter_by_bias(corpus: &str, keywords: &BTreeSet<String>) -> String {
    if keywords.is_empty() {
        return corpus.to_string();
    }
    corpus
        .lines()
        .filter(|line| {
            let lower = line.to_lowercase();
            keywords.iter().any(|k| lower.contains(k.as_str()))
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Duplicate every line containing the literal bias phrase, then pad the
/// corpus up to `min_size` by repeating the first few emphasized lines.
///
/// The duplication skews the trained transition probabilities toward
/// bias-relevant vocabulary without needing a larger underlying corpus.
pub fn emphasize(corpus: &str, bias: &str, min_size: usize, multiplier: usize) -> String {
    let bias = bias.trim();
    if bias.chars().count() < 3 {
        return corpus.to_string();
    }
    let bias_lower = bias.to_lowercase();

    let mut emphasized: Vec<&str> = Vec::new();
    for line in corpus.lines().filter(|l| !l.trim().is_empty()) {
        emphasized.push(line);
        if line.to_lowercase().contains(&bias_lower) {
            for _ in 0..multiplier {
                emphasized.push(line);
            }
        }
    }
    if emphasized.is_empty() {
        return String::new();
    }

    let mut result = emphasized.join("\n");
    let pad = emphasized[..emphasized.len().min(5)].join("\n");
    if !pad.trim().is_empty() {
        while result.len() < min_size {
            result.push('\n');
            result.push_str(&pad);
        }
    }
    result
}

/// Assemble the generation-ready corpus from raw retrieved text.
///
/// Runs both normalization passes, then either the bias path (filter plus
/// emphasis) or the no-bias path (genre seed lines, plus the raw bias text
/// itself when it was provided but too weak to expand). Falls back to the
/// raw unfiltered corpus when the result dips under the minimum buildable
/// size.
pub fn assemble(
    raw: &str,
    script: Script,
    genre: &str,
    lang_code: &str,
    bias: Option<&str>,
    keywords: &BTreeSet<String>,
) -> String {
    let cleaned = normalize::clean_corpus_text(raw, script);
    let prepared = normalize::prepare_corpus(&cleaned, script);
    debug!(
        "corpus cleaning: {} raw chars -> {} prepared chars",
        raw.len(),
        prepared.len()
    );

    let mut assembled = if !keywords.is_empty() {
        let filtered = filter_by_bias(&prepared, keywords);
        // Keywords imply the bias phrase passed the length gate.
        let phrase = bias.unwrap_or_default();
        emphasize(&filtered, phrase, MIN_CORPUS_SIZE, EMPHASIS_MULTIPLIER)
    } else {
        let mut with_seeds = prepared;
        with_seeds.push_str(genre_seed_lines(genre, lang_code));
        if let Some(phrase) = bias {
            if !phrase.trim().is_empty() {
                with_seeds.push('\n');
                with_seeds.push_str(phrase.trim());
                with_seeds.push('\n');
            }
        }
        with_seeds
    };

    let kept_chars = assembled.trim().chars().count();
    if kept_chars < MIN_MODEL_CORPUS {
        warn!("cleaned corpus too short ({kept_chars} chars); substituting raw corpus");
        assembled = raw.to_string();
    }
    assembled
}
