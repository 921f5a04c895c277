//! Corpus-driven lyric generation with Markov chains.
//!
//! Versecraft pulls a language/genre-scoped lyric corpus from a read-only
//! SQLite store, cleans and biases it toward a user-supplied theme, trains a
//! Markov chain on the result, and samples novel multi-line lyrics under
//! quality, length, profanity, and duplication gates.
//!
//! Core modules:
//! - [`store`] - Tiered corpus retrieval over SQLite
//! - [`bias`] - Theme-phrase expansion through the synonym lexicon
//! - [`corpus`] - Corpus assembly, bias filtering, and emphasis
//! - [`markov`] - Markov model construction with state-size fallback
//! - [`generate`] - The bounded sampling loop and pipeline entry point
//!
//! ### Supporting Modules
//!
//! - [`normalize`] - Script-aware text cleaning
//! - [`language`] - Language codes and script classification
//! - [`lexicon`] - Stop words, synonyms, and the profanity capability
//! - [`seeds`] - Hand-authored genre seed lines
//! - [`config`] - Engine constants and data directory management
//! - [`cli`] - Command-line interface definitions
//! - [`error`] - Request-scoped failure kinds
//!
//! ## Quick Start Example
//!
//! ```no_run
//! use versecraft::generate::{generate_lyrics, GenerationRequest};
//! use versecraft::lexicon::Lexicons;
//! use versecraft::store::CorpusStore;
//!
//! let path = versecraft::config::default_store_path()?;
//! let store = CorpusStore::open_read_only(&path)?;
//! let lexicons = Lexicons::builtin();
//!
//! let request = GenerationRequest {
//!     language: "English".to_string(),
//!     genre: "Pop".to_string(),
//!     min_lines: 4,
//!     max_lines: 8,
//!     bias: Some("fire".to_string()),
//! };
//!
//! match generate_lyrics(&store, &lexicons, &request) {
//!     Some(lyrics) => println!("{lyrics}"),
//!     None => eprintln!("could not generate lyrics for this language/genre"),
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Pipeline
//!
//! A request flows through four stages, each failing fast with a
//! [`error::GenerateError`]:
//!
//! 1. **Retrieval** ([`store`]): three tiers from exact (language, genre) to
//!    language-only, bias-filtered, with an early stop once 10,000 characters
//!    are accumulated.
//! 2. **Assembly** ([`corpus`]): script-aware cleaning, then either bias
//!    filter-and-emphasize or genre seed injection, with a raw-corpus
//!    fallback guaranteeing buildability.
//! 3. **Model build** ([`markov`]): newline-delimited training at state size
//!    3 (2 for Cyrillic/CJK), degrading once to 2 on failure.
//! 4. **Sampling** ([`generate`]): a bounded generate-and-filter loop with
//!    word-count, dedup, and profanity gates.
//!
//! Everything is synchronous and request-scoped; the store and lexicons are
//! the only shared resources and both are read-only after startup.
//!
//! ## Error Handling
//!
//! The typed pipeline ([`generate::run_pipeline`]) surfaces one
//! [`error::GenerateError`] per failure; the delivery-facing wrapper
//! ([`generate::generate_lyrics`]) logs it and returns `None`. No failure is
//! retried across the pipeline and none aborts the process.
//!
//! ## Logging
//!
//! Uses the `log` facade; the CLI installs `env_logger`, controlled via
//! `RUST_LOG`:
//!
//! ```bash
//! RUST_LOG=debug versecraft generate English Pop
//! RUST_LOG=versecraft::store=debug versecraft generate English Pop
//! ```

pub mod bias;
pub mod cli;
pub mod config;
pub mod corpus;
pub mod error;
pub mod generate;
pub mod language;
pub mod lexicon;
pub mod markov;
pub mod normalize;
pub mod seeds;
pub mod store;
