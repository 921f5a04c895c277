//! Request-scoped failure kinds for the generation pipeline.
//!
//! Every stage converts its internal errors into one of these variants and
//! fails fast; nothing here ever aborts the process. The CLI layer maps them
//! to exit messages, the library entry point maps them to `None`.

use std::fmt;

/// All the ways a single generation request can fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerateError {
    /// The persisted corpus store is missing or unreadable.
    StoreUnavailable(String),
    /// No stored lyrics match the requested language, with or without
    /// genre/bias narrowing, after all retrieval tiers are exhausted.
    NoCorpusMatch { language: String, genre: String },
    /// The assembled corpus is below the minimum buildable size even after
    /// raw-corpus substitution.
    CorpusTooShort { chars: usize },
    /// Markov model construction failed even after the state-size fallback.
    ModelBuild,
    /// The sampling loop spent its whole attempt budget without accepting
    /// a single line.
    GenerationExhausted,
    /// The request itself is malformed (line bounds inverted or zero).
    InvalidRequest(&'static str),
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StoreUnavailable(detail) => {
                write!(f, "corpus store unavailable: {detail}")
            }
            Self::NoCorpusMatch { language, genre } => {
                write!(f, "no corpus records match language '{language}' / genre '{genre}'")
            }
            Self::CorpusTooShort { chars } => {
                write!(f, "assembled corpus too short to train a model ({chars} chars)")
            }
            Self::ModelBuild => write!(f, "markov model construction failed"),
            Self::GenerationExhausted => {
                write!(f, "attempt budget exhausted with zero accepted lines")
            }
            Self::InvalidRequest(reason) => write!(f, "invalid request: {reason}"),
        }
    }
}

impl std::error::Error for GenerateError {}
