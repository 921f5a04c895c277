//! The line generator and the end-to-end pipeline entry point.
//!
//! Generation is a bounded stochastic loop: sample a sentence, clean it,
//! collapse sampling-artifact repetition, then push it through the acceptance
//! gates (word count, exact dedup, profanity). The attempt budget is the only
//! runtime bound against a poorly conditioned model, so it is a first-class
//! quantity here rather than an implementation detail.

use crate::bias;
use crate::config::{ATTEMPTS_PER_LINE, MAX_WORDS_PER_LINE};
use crate::corpus;
use crate::error::GenerateError;
use crate::language::{language_code, Script};
use crate::lexicon::{Lexicons, ProfanityFilter};
use crate::markov::{self, MarkovModel};
use crate::normalize;
use crate::store::CorpusStore;
use lazy_static::lazy_static;
use log::{debug, info, warn};
use rand::Rng;
use regex::Regex;
use std::collections::BTreeSet;

lazy_static! {
    // Word-ish tokens for the profanity scan, tolerant of the decorations
    // lyric text picks up.
    static ref TOKEN_RE: Regex = Regex::new(r"[\w'!@#$%^&*\-]+").unwrap();
}

/// One lyric generation request.
#[derive(Debug, Clone)]
pub struct GenerationRequest {
    pub language: String,
    pub genre: String,
    pub min_lines: u32,
    pub max_lines: u32,
    pub bias: Option<String>,
}

impl GenerationRequest {
    fn validate(&self) -> Result<(), GenerateError> {
        if self.min_lines == 0 || self.max_lines == 0 {
            return Err(GenerateError::InvalidRequest("line counts must be positive"));
        }
        if self.min_lines > self.max_lines {
            return Err(GenerateError::InvalidRequest(
                "min_lines must not exceed max_lines",
            ));
        }
        Ok(())
    }
}

/// Primary entry point consumed by the delivery layer.
///
/// Returns `None` on any pipeline failure; the caller owns the user-facing
/// error message. See [`run_pipeline`] for the typed variant.
pub fn generate_lyrics(
    store: &CorpusStore,
    lexicons: &Lexicons,
    request: &GenerationRequest,
) -> Option<String> {
    match run_pipeline(store, lexicons, request) {
        Ok(text) => Some(text),
        Err(err) => {
            warn!(
                "lyric generation failed for {}/{}: {err}",
                request.language, request.genre
            );
            None
        }
    }
}

/// The full pipeline with typed failures: fetch, assemble, build, generate.
///
/// Each stage fails fast; nothing is retried across the whole pipeline.
/// The caller re-issues a fresh request if desired.
pub fn run_pipeline(
    store: &CorpusStore,
    lexicons: &Lexicons,
    request: &GenerationRequest,
) -> Result<String, GenerateError> {
    request.validate()?;

    let lang_code = language_code(&request.language);
    let script = Script::for_code(lang_code);
    let bias = request.bias.as_deref();
    let keywords: BTreeSet<String> = bias
        .map(|phrase| bias::expand(phrase, &lexicons.synonyms))
        .unwrap_or_default();
    debug!(
        "pipeline start: language={lang_code} genre={} script={script:?} keywords={}",
        request.genre,
        keywords.len()
    );

    let texts = store.fetch(lang_code, &request.genre, &keywords)?;
    let raw = texts.join("\n");
    if raw.trim().is_empty() {
        return Err(GenerateError::NoCorpusMatch {
            language: request.language.clone(),
            genre: request.genre.clone(),
        });
    }

    let assembled = corpus::assemble(&raw, script, &request.genre, lang_code, bias, &keywords);
    let model = markov::build_with_fallback(&assembled, script.initial_state_size())?;

    let lines = generate_lines(
        &model,
        request.min_lines,
        request.max_lines,
        MAX_WORDS_PER_LINE,
        lexicons.profanity.as_ref(),
    )?;
    info!(
        "generated {} lines for {}/{}",
        lines.len(),
        request.language,
        request.genre
    );
    Ok(lines.join("\n"))
}

/// Sample, clean, and filter lines until the target count or the attempt
/// budget is reached.
///
/// The target is drawn uniformly from `[min_lines, max_lines]`; the budget is
/// `target * ATTEMPTS_PER_LINE` sampling attempts. A candidate is accepted
/// only with at least 3 words, no exact duplicate among accepted lines, and
/// no profane token.
pub fn generate_lines(
    model: &MarkovModel,
    min_lines: u32,
    max_lines: u32,
    max_words_per_line: usize,
    profanity: &dyn ProfanityFilter,
) -> Result<Vec<String>, GenerateError> {
    let mut rng = rand::thread_rng();
    let target = rng.gen_range(min_lines..=max_lines) as usize;
    let budget = target * ATTEMPTS_PER_LINE;
    debug!("sampling target={target} budget={budget}");

    let mut accepted: Vec<String> = Vec::new();
    let mut tries = 0usize;
    while accepted.len() < target && tries < budget {
        tries += 1;
        let sentence = model
            .make_sentence(&mut rng, 50, 0.7)
            .or_else(|| model.make_short_sentence(&mut rng, 120, 10));
        let Some(sentence) = sentence else { continue };

        let cleaned = normalize::strip_residual_markup(&sentence);
        // Collapse repetition before capping: a truncated duplicate block
        // would otherwise survive the scan.
        let collapsed = remove_internal_repetition(&cleaned);
        let words: Vec<&str> = collapsed.split_whitespace().collect();
        let capped = words[..words.len().min(max_words_per_line)].join(" ");

        // A single sample may carry several lines' worth of text.
        for candidate in capped.split('\n') {
            let candidate = candidate.trim();
            if accepted.len() >= target {
                break;
            }
            if candidate.split_whitespace().count() < 3 {
                continue;
            }
            if accepted.iter().any(|line| line == candidate) {
                continue;
            }
            if contains_profanity(candidate, profanity) {
                continue;
            }
            accepted.push(candidate.to_string());
        }
    }

    if accepted.is_empty() {
        return Err(GenerateError::GenerationExhausted);
    }
    debug!("accepted {} lines in {tries} attempts", accepted.len());
    Ok(accepted)
}

/// Collapse adjacent repeated n-gram pairs, largest block first, until no
/// repetition remains.
///
/// Statistical sampling often duplicates short phrases back-to-back
/// ("under the lights under the lights"). Each pass scans n from 5 down to 2
/// and collapses the largest block size that shrinks the line; passes repeat
/// until a fixpoint, so re-running on the output is a no-op. Single-word
/// repeats are below the smallest scanned block and survive.
pub fn remove_internal_repetition(line: &str) -> String {
    let mut current = line.to_string();
    loop {
        let next = collapse_largest_block(&current);
        if next == current {
            return current;
        }
        current = next;
    }
}

fn collapse_largest_block(line: &str) -> String {
    let words: Vec<&str> = line.split_whitespace().collect();
    let len = words.len();
    for n in (2..=5).rev() {
        if len < n * 2 {
            continue;
        }
        let mut collapsed: Vec<&str> = Vec::with_capacity(len);
        let mut i = 0;
        while i < len {
            if i + 2 * n <= len && words[i..i + n] == words[i + n..i + 2 * n] {
                collapsed.extend_from_slice(&words[i..i + n]);
                i += 2 * n;
                continue;
            }
            collapsed.push(words[i]);
            i += 1;
        }
        if collapsed.len() < len {
            return collapsed.join(" ");
        }
    }
    line.to_string()
}

/// Token-level profanity scan; a single profane token condemns the line.
fn contains_profanity(line: &str, filter: &dyn ProfanityFilter) -> bool {
    for token in TOKEN_RE.find_iter(line) {
        let normalized: String = token
            .as_str()
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .collect::<String>()
            .to_lowercase();
        if !normalized.is_empty() && filter.contains_profanity(&normalized) {
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lexicon::{PermissiveFilter, WordListFilter};
    use crate::markov::MarkovModel;

    fn varied_corpus() -> String {
        let mut lines = Vec::new();
        let openers = ["we chase", "you hold", "they find", "i keep", "she sings"];
        let objects = ["the fading light", "a silver dream", "the open road", "a quiet storm"];
        let closers = [
            "until the morning comes",
            "beneath the city glow",
            "across the endless night",
            "beyond the furthest shore",
        ];
        for o in openers {
            for obj in objects {
                for c in closers {
                    lines.push(format!("{o} {obj} {c}"));
                }
            }
        }
        lines.join("\n")
    }

    #[test]
    fn repetition_removal_collapses_adjacent_blocks() {
        assert_eq!(
            remove_internal_repetition("under the lights under the lights"),
            "under the lights"
        );
        assert_eq!(
            remove_internal_repetition("hold me close hold me close tonight"),
            "hold me close tonight"
        );
        // Single-word repeats are below the smallest scanned block size.
        assert_eq!(
            remove_internal_repetition("dance dance all night"),
            "dance dance all night"
        );
    }

    #[test]
    fn repetition_removal_iterates_to_a_fixpoint() {
        // First pass collapses the 3-gram pair, the next pass the word pair
        // that collapse exposes.
        let line = "dance dance dance dance under the lights under the lights";
        assert_eq!(remove_internal_repetition(line), "dance dance under the lights");
    }

    #[test]
    fn repetition_removal_is_idempotent() {
        let samples = [
            "under the lights under the lights",
            "hold me close hold me close tonight",
            "dance dance dance dance under the lights under the lights",
            "no repetition in this line at all",
            "one",
            "",
        ];
        for sample in samples {
            let once = remove_internal_repetition(sample);
            let twice = remove_internal_repetition(&once);
            assert_eq!(once, twice, "not idempotent for {sample:?}");
        }
    }

    #[test]
    fn repetition_removal_leaves_clean_lines_alone() {
        let line = "every word here is different tonight";
        assert_eq!(remove_internal_repetition(line), line);
    }

    #[test]
    fn profanity_scan_normalizes_decorated_tokens() {
        let filter = WordListFilter::builtin();
        assert!(contains_profanity("what the sh-it!", &filter));
        assert!(contains_profanity("S*H*I*T happens", &filter));
        assert!(contains_profanity("SHIT happens", &filter));
        assert!(!contains_profanity("a perfectly clean line", &filter));
    }

    #[test]
    fn generated_lines_respect_bounds_and_gates() {
        let model = MarkovModel::build(&varied_corpus(), 2).expect("build");
        for _ in 0..10 {
            let lines = generate_lines(&model, 2, 4, 12, &PermissiveFilter).expect("lines");
            assert!(lines.len() >= 1 && lines.len() <= 4);
            for line in &lines {
                let count = line.split_whitespace().count();
                assert!(count >= 3, "too few words: {line}");
                assert!(count <= 12, "too many words: {line}");
            }
            // Exact-string dedup.
            let mut unique = lines.clone();
            unique.sort();
            unique.dedup();
            assert_eq!(unique.len(), lines.len());
        }
    }

    #[test]
    fn fully_profane_output_exhausts_the_budget() {
        struct RejectAll;
        impl ProfanityFilter for RejectAll {
            fn contains_profanity(&self, _token: &str) -> bool {
                true
            }
        }
        let model = MarkovModel::build(&varied_corpus(), 2).expect("build");
        let err = generate_lines(&model, 2, 4, 12, &RejectAll).unwrap_err();
        assert_eq!(err, GenerateError::GenerationExhausted);
    }

    #[test]
    fn invalid_requests_are_rejected() {
        let request = GenerationRequest {
            language: "English".to_string(),
            genre: "pop".to_string(),
            min_lines: 5,
            max_lines: 2,
            bias: None,
        };
        assert_eq!(
            request.validate().unwrap_err(),
            GenerateError::InvalidRequest("min_lines must not exceed max_lines")
        );

        let zero = GenerationRequest {
            min_lines: 0,
            ..request
        };
        assert!(zero.validate().is_err());
    }
}
