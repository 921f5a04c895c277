//! Markov chain text model built per generation request.
//!
//! Each newline-delimited corpus line is one training unit; transitions never
//! cross line boundaries. States are BEGIN-padded token windows of
//! `state_size` words, successors are stored with duplicates so a uniform
//! draw reproduces the transition frequencies. Sampled walks that merely
//! replay a long corpus window are rejected, which is what makes the output
//! novel rather than retrieved.

use crate::config::{FALLBACK_STATE_SIZE, MIN_MODEL_CORPUS};
use crate::error::GenerateError;
use log::{info, warn};
use rand::seq::SliceRandom;
use rand::Rng;
use std::collections::HashMap;

/// Sentinel tokens; control characters cannot appear in cleaned corpus text.
const BEGIN: &str = "\u{2}";
const END: &str = "\u{3}";

/// Longest corpus window (in words) a sampled sentence may reproduce.
const MAX_OVERLAP_TOTAL: usize = 15;

/// Safety cap on walk length, well above any line the generator keeps.
const MAX_WALK_TOKENS: usize = 40;

/// A trained chain over one assembled corpus.
#[derive(Debug)]
pub struct MarkovModel {
    state_size: usize,
    chain: HashMap<Vec<String>, Vec<String>>,
    corpus: String,
}

impl MarkovModel {
    /// Train a chain at the given context length.
    ///
    /// Requires at least [`MIN_MODEL_CORPUS`] characters. Every non-empty
    /// line contributes transitions, but the build fails unless at least one
    /// line fills a complete context window; without one the chain can only
    /// replay fragments shorter than its own state.
    pub fn build(text: &str, state_size: usize) -> Result<Self, GenerateError> {
        let trimmed = text.trim();
        let chars = trimmed.chars().count();
        if chars < MIN_MODEL_CORPUS {
            return Err(GenerateError::CorpusTooShort { chars });
        }

        let mut chain: HashMap<Vec<String>, Vec<String>> = HashMap::new();
        let mut full_context_lines = 0usize;
        for line in trimmed.lines() {
            let words: Vec<&str> = line.split_whitespace().collect();
            if words.is_empty() {
                continue;
            }
            if words.len() > state_size {
                full_context_lines += 1;
            }
            let mut state: Vec<String> = vec![BEGIN.to_string(); state_size];
            for word in &words {
                chain
                    .entry(state.clone())
                    .or_default()
                    .push((*word).to_string());
                state.remove(0);
                state.push((*word).to_string());
            }
            chain.entry(state).or_default().push(END.to_string());
        }

        if full_context_lines == 0 {
            return Err(GenerateError::ModelBuild);
        }
        info!(
            "markov model built: state_size={state_size}, {} states, {} full-context lines",
            chain.len(),
            full_context_lines
        );
        Ok(Self {
            state_size,
            chain,
            corpus: trimmed.to_string(),
        })
    }

    pub fn state_size(&self) -> usize {
        self.state_size
    }

    /// One random walk from the initial state to END (or the safety cap).
    fn walk<R: Rng>(&self, rng: &mut R) -> Option<Vec<String>> {
        let mut state: Vec<String> = vec![BEGIN.to_string(); self.state_size];
        let mut words: Vec<String> = Vec::new();
        while words.len() < MAX_WALK_TOKENS {
            let successors = self.chain.get(&state)?;
            let next = successors.choose(rng)?;
            if next == END {
                break;
            }
            words.push(next.clone());
            state.remove(0);
            state.push(next.clone());
        }
        if words.is_empty() {
            None
        } else {
            Some(words)
        }
    }

    /// Sample a sentence, rejecting walks that overlap the corpus too much.
    ///
    /// A walk is rejected when any window of
    /// `min(MAX_OVERLAP_TOTAL, round(max_overlap_ratio * words)) + 1` words
    /// appears verbatim in the training corpus.
    pub fn make_sentence<R: Rng>(
        &self,
        rng: &mut R,
        tries: usize,
        max_overlap_ratio: f64,
    ) -> Option<String> {
        for _ in 0..tries {
            if let Some(words) = self.walk(rng) {
                if !self.overlaps_corpus(&words, max_overlap_ratio) {
                    return Some(words.join(" "));
                }
            }
        }
        None
    }

    /// Fallback sampling mode: accept the first walk fitting a character
    /// budget, with no overlap rejection.
    pub fn make_short_sentence<R: Rng>(
        &self,
        rng: &mut R,
        max_chars: usize,
        tries: usize,
    ) -> Option<String> {
        for _ in 0..tries {
            if let Some(words) = self.walk(rng) {
                let sentence = words.join(" ");
                if sentence.chars().count() <= max_chars {
                    return Some(sentence);
                }
            }
        }
        None
    }

    fn overlaps_corpus(&self, words: &[String], max_overlap_ratio: f64) -> bool {
        let ratio_cap = (max_overlap_ratio * words.len() as f64).round() as usize;
        let overlap = ratio_cap.min(MAX_OVERLAP_TOTAL);
        if overlap + 1 > words.len() {
            return self.corpus.contains(&words.join(" "));
        }
        for window in words.windows(overlap + 1) {
            if self.corpus.contains(&window.join(" ")) {
                return true;
            }
        }
        false
    }
}

/// The explicit state-size attempt ladder: the requested size, then the
/// permissive fallback, never anything lower.
///
/// A too-short corpus fails immediately; retrying it at a lower order
/// cannot help.
pub fn build_with_fallback(text: &str, state_size: usize) -> Result<MarkovModel, GenerateError> {
    let mut attempts = vec![state_size];
    if state_size > FALLBACK_STATE_SIZE {
        attempts.push(FALLBACK_STATE_SIZE);
    }

    let mut last_error = GenerateError::ModelBuild;
    for attempt in attempts {
        match MarkovModel::build(text, attempt) {
            Ok(model) => return Ok(model),
            Err(err @ GenerateError::CorpusTooShort { .. }) => return Err(err),
            Err(err) => {
                warn!("model build failed at state_size={attempt}: {err}");
                last_error = err;
            }
        }
    }
    Err(last_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::thread_rng;

    /// Corpus with enough variation that walks can diverge from any single
    /// training line.
    fn training_corpus() -> String {
        let mut lines = Vec::new();
        let subjects = ["we", "you", "they", "lovers", "dreamers"];
        let verbs = ["dance", "sing", "run", "drift", "shine"];
        let places = [
            "under the city lights",
            "along the silver shore",
            "through the midnight rain",
            "beneath a burning sky",
            "beyond the open road",
        ];
        for s in subjects {
            for v in verbs {
                for p in places {
                    lines.push(format!("{s} {v} {p} tonight"));
                }
            }
        }
        lines.join("\n")
    }

    #[test]
    fn build_rejects_short_corpora() {
        let err = MarkovModel::build("too small", 3).unwrap_err();
        assert!(matches!(err, GenerateError::CorpusTooShort { .. }));
    }

    #[test]
    fn build_fails_without_a_full_context_line() {
        // Every line has 3 words, below the 4 needed for state_size 3.
        let text = "one two three\n".repeat(100);
        let err = MarkovModel::build(&text, 3).unwrap_err();
        assert_eq!(err, GenerateError::ModelBuild);
    }

    #[test]
    fn fallback_ladder_degrades_to_state_two() {
        // 3-word lines train fine at state_size 2.
        let text = "hold me close\n".repeat(100);
        let model = build_with_fallback(&text, 3).expect("fallback should succeed");
        assert_eq!(model.state_size(), 2);
    }

    #[test]
    fn too_short_corpus_is_not_retried() {
        let err = build_with_fallback("tiny", 3).unwrap_err();
        assert!(matches!(err, GenerateError::CorpusTooShort { .. }));
    }

    #[test]
    fn walks_terminate_and_produce_words() {
        let model = MarkovModel::build(&training_corpus(), 2).expect("build");
        let mut rng = thread_rng();
        for _ in 0..50 {
            let sentence = model
                .make_short_sentence(&mut rng, 200, 10)
                .expect("short sentence");
            assert!(!sentence.is_empty());
            assert!(sentence.split_whitespace().count() <= MAX_WALK_TOKENS);
        }
    }

    #[test]
    fn transitions_never_cross_line_boundaries() {
        // Two disjoint vocabularies on separate lines: no sampled sentence
        // may mix them.
        let mut lines = Vec::new();
        for _ in 0..60 {
            lines.push("alpha beta gamma delta".to_string());
            lines.push("uno dos tres cuatro".to_string());
        }
        let model = MarkovModel::build(&lines.join("\n"), 2).expect("build");
        let mut rng = thread_rng();
        for _ in 0..30 {
            if let Some(sentence) = model.make_short_sentence(&mut rng, 200, 10) {
                let greek = sentence.contains("alpha") || sentence.contains("beta");
                let spanish = sentence.contains("uno") || sentence.contains("dos");
                assert!(!(greek && spanish), "mixed line vocabularies: {sentence}");
            }
        }
    }

    #[test]
    fn overlap_rejection_blocks_verbatim_replay() {
        // A corpus of identical lines can only replay itself, so sentence
        // sampling with overlap rejection must give up.
        let text = "the same exact line every single time\n".repeat(40);
        let model = MarkovModel::build(&text, 2).expect("build");
        let mut rng = thread_rng();
        assert!(model.make_sentence(&mut rng, 20, 0.7).is_none());
        // The short-sentence fallback still yields output.
        assert!(model.make_short_sentence(&mut rng, 200, 10).is_some());
    }
}
