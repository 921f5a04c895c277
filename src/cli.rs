//! # Command-Line Interface Module
//!
//! Clap derive definitions for the Versecraft CLI. The binary is a thin
//! delivery layer over the library pipeline: `generate` is the primary
//! command, the rest provision and inspect the corpus store.
//!
//! ## Examples
//!
//! ```bash
//! versecraft init-db corpus_records.json
//! versecraft generate English Pop --min-lines 4 --max-lines 8
//! versecraft generate English Pop --bias "fire and rain"
//! versecraft list
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Main application arguments structure.
#[derive(Parser)]
#[command(name = "versecraft")]
#[command(about = "Versecraft: corpus-driven lyric generation with Markov chains")]
#[command(version)]
pub struct Args {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Enumeration of all available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Generate lyrics for a language and genre
    ///
    /// Pulls the matching corpus from the store, trains a Markov model on
    /// it, and samples lines until the requested count is reached or the
    /// attempt budget runs out. Exits non-zero when no lyrics could be
    /// generated for the requested combination.
    Generate {
        /// Language name (e.g. "English") or code (e.g. "en")
        language: String,

        /// Genre, compared case-insensitively against stored records
        genre: String,

        /// Minimum number of lines to generate
        #[arg(long, default_value_t = 4)]
        min_lines: u32,

        /// Maximum number of lines to generate
        #[arg(long, default_value_t = 8)]
        max_lines: u32,

        /// Theme phrase steering corpus selection and generation
        ///
        /// The phrase is expanded through the synonym lexicon and biases
        /// both which records are retrieved and which corpus lines the
        /// model is trained on.
        #[arg(long)]
        bias: Option<String>,

        /// Corpus store path (defaults to the platform data directory)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Disable profanity filtering
        ///
        /// Selects the permissive filter variant instead of the built-in
        /// censor list.
        #[arg(long)]
        allow_profanity: bool,

        /// JSON censor list replacing the built-in one
        ///
        /// A JSON array of lowercase tokens. If the file cannot be read,
        /// filtering is disabled with a warning rather than failing the
        /// request.
        #[arg(long)]
        censor_list: Option<PathBuf>,
    },

    /// Provision the corpus store from a JSON records file
    ///
    /// The file is a JSON array of `{"language", "genre", "lyrics"}`
    /// objects. Records are lowercased on the key columns and inserted in
    /// one transaction.
    InitDb {
        /// Path to the JSON records file
        records: PathBuf,

        /// Corpus store path (defaults to the platform data directory)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Import into an existing store instead of refusing
        #[arg(long)]
        force: bool,
    },

    /// List per-(language, genre) record counts in the store
    List {
        /// Corpus store path (defaults to the platform data directory)
        #[arg(long)]
        db: Option<PathBuf>,
    },

    /// List supported languages and their corpus codes
    Languages,
}
