//! Corpus store adapter: read-only tiered retrieval over SQLite.
//!
//! The store is provisioned out-of-band (`init-db`) and never written at
//! request time, so concurrent generation requests share it without locking.
//! Retrieval walks three tiers from most to least specific and stops early
//! once enough text is accumulated to bound query cost.

use crate::config::MIN_CORPUS_SIZE;
use crate::error::GenerateError;
use crate::language::language_code;
use anyhow::{Context, Result};
use log::{debug, info, warn};
use rusqlite::{params_from_iter, Connection, OpenFlags};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// One persisted corpus row.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorpusRecord {
    pub language: String,
    pub genre: String,
    pub lyrics: String,
}

/// Per-(language, genre) record counts reported by `list`.
#[derive(Debug, Clone)]
pub struct GenreSummary {
    pub language: String,
    pub genre: String,
    pub records: u32,
    pub chars: u64,
}

/// Genres close enough to be interchangeable during tier-2 broadening.
///
/// Clusters follow how the corpora were tagged in the wild: rap and hip-hop
/// label the same records, dance-floor electronic subgenres blend, and
/// r&b/soul share a catalog.
const GENRE_CLUSTERS: &[&[&str]] = &[
    &["rap", "hip-hop", "hip hop"],
    &["r&b", "rnb", "soul"],
    &["electronic", "edm", "dance", "techno", "house"],
];

/// Close-genre aliases for a lowercase genre, excluding the genre itself.
pub fn close_genres(genre: &str) -> Vec<&'static str> {
    for cluster in GENRE_CLUSTERS {
        if cluster.contains(&genre) {
            return cluster.iter().copied().filter(|g| *g != genre).collect();
        }
    }
    Vec::new()
}

/// Handle over the persisted lyric store.
#[derive(Debug)]
pub struct CorpusStore {
    conn: Connection,
}

impl CorpusStore {
    /// Open an existing store read-only. A missing or unreadable store is
    /// [`GenerateError::StoreUnavailable`].
    pub fn open_read_only(path: &Path) -> Result<Self, GenerateError> {
        if !path.exists() {
            return Err(GenerateError::StoreUnavailable(format!(
                "no store at {}",
                path.display()
            )));
        }
        let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_ONLY)
            .map_err(|e| GenerateError::StoreUnavailable(e.to_string()))?;
        Ok(Self { conn })
    }

    /// Open (or create) a store read-write for provisioning.
    pub fn open(path: &Path) -> Result<Self> {
        let conn = Connection::open(path)
            .with_context(|| format!("Failed to open corpus store at {}", path.display()))?;
        Ok(Self { conn })
    }

    /// Create the lyrics table and its lookup index. Idempotent.
    pub fn init_schema(&self) -> Result<()> {
        self.conn
            .execute(
                "CREATE TABLE IF NOT EXISTS lyrics (
                    id       INTEGER PRIMARY KEY,
                    Language TEXT NOT NULL,
                    Genre    TEXT NOT NULL,
                    Lyrics   TEXT NOT NULL
                )",
                (),
            )
            .context("Invalid SQL command when CREATEing lyrics TABLE.")?;
        self.conn
            .execute(
                "CREATE INDEX IF NOT EXISTS idx_lyrics_lang_genre
                 ON lyrics (Language, Genre)",
                (),
            )
            .context("Failed to create lyrics lookup index.")?;
        Ok(())
    }

    /// Batch-insert records inside one transaction. Returns the insert count.
    ///
    /// Language is resolved to its stored corpus code and genre is
    /// lowercased, so retrieval compares against the same keys regardless of
    /// how the records file spells them.
    pub fn import_records(&mut self, records: &[CorpusRecord]) -> Result<usize> {
        let tx = self.conn.transaction()?;
        {
            let mut stmt = tx
                .prepare("INSERT INTO lyrics (Language, Genre, Lyrics) VALUES (?1, ?2, ?3)")?;
            for record in records {
                stmt.execute((
                    language_code(&record.language),
                    record.genre.trim().to_lowercase(),
                    &record.lyrics,
                ))
                .with_context(|| {
                    format!(
                        "Failed to INSERT corpus record for {}/{}",
                        record.language, record.genre
                    )
                })?;
            }
        }
        tx.commit().context("Committing SQL transaction failed.")?;
        Ok(records.len())
    }

    /// Tiered retrieval of raw lyric texts, most to least specific.
    ///
    /// Tier 1 matches language and genre exactly, tier 2 broadens the genre
    /// to its close aliases, tier 3 matches language only; every tier applies
    /// the bias containment filter when keywords are present. Results are
    /// appended to a running accumulator and retrieval stops as soon as
    /// [`MIN_CORPUS_SIZE`] characters are collected. If all bias-filtered
    /// tiers return nothing, one final language-only query runs without the
    /// bias filter.
    ///
    /// An empty return means no language match exists; the caller decides
    /// how to report that.
    pub fn fetch(
        &self,
        lang_code: &str,
        genre: &str,
        bias_keywords: &BTreeSet<String>,
    ) -> Result<Vec<String>, GenerateError> {
        let genre = genre.trim().to_lowercase();
        let bias = bias_clause(bias_keywords);
        debug!(
            "store lookup: language='{lang_code}' genre='{genre}' bias_keywords={}",
            bias_keywords.len()
        );

        let mut tiers: Vec<(String, Vec<String>)> = Vec::new();
        tiers.push((
            "LOWER(Language) = ? AND LOWER(Genre) = ?".to_string(),
            vec![lang_code.to_string(), genre.clone()],
        ));
        let aliases = close_genres(&genre);
        if !aliases.is_empty() {
            let placeholders = vec!["?"; aliases.len() + 1].join(", ");
            let mut params = vec![lang_code.to_string(), genre.clone()];
            params.extend(aliases.iter().map(|a| (*a).to_string()));
            tiers.push((
                format!("LOWER(Language) = ? AND LOWER(Genre) IN ({placeholders})"),
                params,
            ));
        }
        tiers.push((
            "LOWER(Language) = ?".to_string(),
            vec![lang_code.to_string()],
        ));

        let mut results: Vec<String> = Vec::new();
        let mut accumulated = 0usize;
        for (tier, (where_clause, mut params)) in tiers.into_iter().enumerate() {
            let mut clause = where_clause;
            if let Some((bias_sql, bias_params)) = &bias {
                clause.push_str(" AND ");
                clause.push_str(bias_sql);
                params.extend(bias_params.iter().cloned());
            }
            let rows = self.run_query(&clause, &params)?;
            if !rows.is_empty() {
                info!("tier {} matched {} records", tier + 1, rows.len());
                for row in rows {
                    accumulated += row.len() + 1;
                    results.push(row);
                }
            }
            if accumulated >= MIN_CORPUS_SIZE {
                debug!("retrieval stopped early at {accumulated} chars");
                break;
            }
        }

        if results.is_empty() && bias.is_some() {
            warn!("bias-filtered tiers returned nothing; retrying without bias");
            results = self.run_query("LOWER(Language) = ?", &[lang_code.to_string()])?;
            if !results.is_empty() {
                info!("unbiased fallback matched {} records", results.len());
            }
        }

        Ok(results)
    }

    fn run_query(
        &self,
        where_clause: &str,
        params: &[String],
    ) -> Result<Vec<String>, GenerateError> {
        let sql = format!("SELECT Lyrics FROM lyrics WHERE {where_clause}");
        let mut stmt = self
            .conn
            .prepare(&sql)
            .map_err(|e| GenerateError::StoreUnavailable(e.to_string()))?;
        let rows = stmt
            .query_map(params_from_iter(params.iter()), |row| {
                row.get::<_, String>(0)
            })
            .map_err(|e| GenerateError::StoreUnavailable(e.to_string()))?;

        let mut texts = Vec::new();
        for row in rows {
            let text = row.map_err(|e| GenerateError::StoreUnavailable(e.to_string()))?;
            if !text.trim().is_empty() {
                texts.push(text);
            }
        }
        Ok(texts)
    }

    /// Record counts and character totals per (language, genre).
    pub fn summary(&self) -> Result<Vec<GenreSummary>> {
        let mut stmt = self
            .conn
            .prepare(
                "SELECT LOWER(Language), LOWER(Genre), COUNT(*),
                        COALESCE(SUM(LENGTH(Lyrics)), 0)
                 FROM lyrics
                 GROUP BY LOWER(Language), LOWER(Genre)
                 ORDER BY LOWER(Language), LOWER(Genre)",
            )
            .context("Invalid SQL statement when summarizing the corpus store.")?;

        let rows = stmt
            .query_map([], |row| {
                Ok(GenreSummary {
                    language: row.get(0)?,
                    genre: row.get(1)?,
                    records: row.get(2)?,
                    chars: row.get(3)?,
                })
            })
            .context("Cannot query corpus summary.")?;

        let mut summaries = Vec::new();
        for row in rows {
            summaries.push(row.context("Queried summary row failed.")?);
        }
        Ok(summaries)
    }
}

/// Build the SQL containment filter for a keyword set: one `LIKE` clause per
/// keyword plus one per adjacent keyword pair, OR-joined.
fn bias_clause(keywords: &BTreeSet<String>) -> Option<(String, Vec<String>)> {
    if keywords.is_empty() {
        return None;
    }
    let mut clauses = Vec::new();
    let mut params = Vec::new();
    for keyword in keywords {
        clauses.push("LOWER(Lyrics) LIKE ?");
        params.push(format!("%{keyword}%"));
    }
    let ordered: Vec<&String> = keywords.iter().collect();
    for pair in ordered.windows(2) {
        clauses.push("LOWER(Lyrics) LIKE ?");
        params.push(format!("%{} {}%", pair[0], pair[1]));
    }
    Some((format!("({})", clauses.join(" OR ")), params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn scratch_store(records: &[CorpusRecord]) -> (TempDir, CorpusStore) {
        let dir = TempDir::new().expect("tempdir");
        let path = dir.path().join("corpus.db");
        let mut store = CorpusStore::open(&path).expect("open store");
        store.init_schema().expect("schema");
        store.import_records(records).expect("import");
        (dir, store)
    }

    fn record(language: &str, genre: &str, lyrics: &str) -> CorpusRecord {
        CorpusRecord {
            language: language.to_string(),
            genre: genre.to_string(),
            lyrics: lyrics.to_string(),
        }
    }

    #[test]
    fn missing_store_is_unavailable() {
        let err = CorpusStore::open_read_only(Path::new("/nonexistent/corpus.db")).unwrap_err();
        assert!(matches!(err, GenerateError::StoreUnavailable(_)));
    }

    #[test]
    fn display_name_records_are_reachable_by_code() {
        // Records files spell languages out; retrieval keys on the code.
        let (_dir, store) = scratch_store(&[record("English", "Pop", "hold me close tonight")]);
        let texts = store.fetch("en", "pop", &BTreeSet::new()).unwrap();
        assert_eq!(texts, vec!["hold me close tonight"]);
    }

    #[test]
    fn exact_match_tier_is_preferred() {
        let (_dir, store) = scratch_store(&[
            record("en", "pop", "pop line one here"),
            record("en", "rock", "rock line one here"),
        ]);
        let texts = store.fetch("en", "pop", &BTreeSet::new()).unwrap();
        assert_eq!(texts[0], "pop line one here");
    }

    #[test]
    fn language_only_tier_catches_missing_genre() {
        let (_dir, store) = scratch_store(&[record("en", "rock", "rock line one here")]);
        let texts = store.fetch("en", "opera", &BTreeSet::new()).unwrap();
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn missing_language_returns_empty() {
        let (_dir, store) = scratch_store(&[record("en", "pop", "pop line one here")]);
        let texts = store.fetch("fr", "opera", &BTreeSet::new()).unwrap();
        assert!(texts.is_empty());
    }

    #[test]
    fn genre_aliases_broaden_tier_two() {
        let (_dir, store) = scratch_store(&[record("en", "hip-hop", "beats on the block tonight")]);
        let texts = store.fetch("en", "rap", &BTreeSet::new()).unwrap();
        assert!(!texts.is_empty());
    }

    #[test]
    fn retrieval_stops_once_enough_text_is_accumulated() {
        let big = "la la la la ".repeat(1000); // 12,000 chars per record
        let (_dir, store) = scratch_store(&[
            record("en", "pop", &big),
            record("en", "rock", &big),
        ]);
        let texts = store.fetch("en", "pop", &BTreeSet::new()).unwrap();
        // Tier 1 alone satisfies the size threshold; tier 3 never runs.
        assert_eq!(texts.len(), 1);
    }

    #[test]
    fn bias_filter_narrows_then_falls_back() {
        let (_dir, store) = scratch_store(&[
            record("en", "pop", "walking in the rain tonight"),
            record("en", "pop", "sunshine on the boulevard"),
        ]);

        let mut keywords = BTreeSet::new();
        keywords.insert("rain".to_string());
        let texts = store.fetch("en", "pop", &keywords).unwrap();
        // Tier 1 and tier 3 both match the same record; the accumulator
        // keeps the duplicate and never admits the keyword-free row.
        assert!(!texts.is_empty());
        assert!(texts.iter().all(|t| t.contains("rain")));

        // No record matches the keyword: the unbiased fallback returns all
        // language rows instead of nothing.
        let mut missing = BTreeSet::new();
        missing.insert("zanzibar".to_string());
        let texts = store.fetch("en", "pop", &missing).unwrap();
        assert_eq!(texts.len(), 2);
    }

    #[test]
    fn close_genre_clusters_are_symmetric() {
        assert!(close_genres("rap").contains(&"hip-hop"));
        assert!(close_genres("hip-hop").contains(&"rap"));
        assert!(close_genres("pop").is_empty());
    }
}
