//! # Configuration Module
//!
//! Fixed engine constants and data-directory management for Versecraft.
//!
//! The generation constants are deliberately not runtime-tunable: callers
//! choose language, genre, line bounds, and bias, and everything else is an
//! engine invariant. The corpus store lives in the platform-standard data
//! directory unless an explicit `--db` path overrides it.
//!
//! ## Data Storage
//!
//! - Linux: `~/.local/share/versecraft/corpus.db`
//! - macOS: `~/Library/Application Support/versecraft/corpus.db`
//! - Windows: `%APPDATA%\versecraft\corpus.db`

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;

/// Stop tiered retrieval once this many characters are accumulated, and pad
/// emphasized bias corpora up to this size.
pub const MIN_CORPUS_SIZE: usize = 10_000;

/// Minimum characters required before a Markov model may be built.
pub const MIN_MODEL_CORPUS: usize = 1_000;

/// How many extra copies of a line containing the literal bias phrase are
/// injected during emphasis.
pub const EMPHASIS_MULTIPLIER: usize = 3;

/// Sampling attempts allowed per requested line before generation gives up.
pub const ATTEMPTS_PER_LINE: usize = 20;

/// Hard cap on words per generated line (truncated, never wrapped).
pub const MAX_WORDS_PER_LINE: usize = 12;

/// Predictive context length for Latin-script corpora.
pub const DEFAULT_STATE_SIZE: usize = 3;

/// Degraded context length used for logographic/heavily-inflected scripts
/// and as the model-build retry rung. Never degraded further.
pub const FALLBACK_STATE_SIZE: usize = 2;

/// Returns the platform-appropriate corpus store path.
///
/// Creates the `versecraft` data subdirectory if it does not exist so that
/// `init-db` can provision a fresh store there.
///
/// # Errors
///
/// Fails when the system data directory cannot be determined or the
/// subdirectory cannot be created.
pub fn default_store_path() -> Result<PathBuf> {
    let data_dir = dirs::data_dir().ok_or_else(|| {
        anyhow::anyhow!("Could not determine system data directory for the corpus store.")
    })?;

    let app_dir = data_dir.join("versecraft");
    fs::create_dir_all(&app_dir).with_context(|| {
        format!(
            "Failed to create Versecraft data directory at {}.",
            app_dir.display()
        )
    })?;

    Ok(app_dir.join("corpus.db"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_store_path_points_at_corpus_db() {
        let path = default_store_path().expect("should resolve a store path");
        assert!(path.is_absolute());
        assert_eq!(path.file_name().unwrap(), "corpus.db");
        assert_eq!(path.parent().unwrap().file_name().unwrap(), "versecraft");
    }

    #[test]
    fn default_store_path_is_stable() {
        let first = default_store_path().expect("first call");
        let second = default_store_path().expect("second call");
        assert_eq!(first, second);
    }

    #[test]
    fn constants_are_internally_consistent() {
        assert!(MIN_MODEL_CORPUS < MIN_CORPUS_SIZE);
        assert!(FALLBACK_STATE_SIZE >= 2);
        assert!(DEFAULT_STATE_SIZE > FALLBACK_STATE_SIZE);
    }
}
