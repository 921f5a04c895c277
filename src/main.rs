//! # Versecraft CLI
//!
//! Thin delivery layer over the library pipeline. Parses arguments, resolves
//! the corpus store location, selects the lexicon variants once at startup,
//! and routes commands. All user-facing error text lives here; the engine
//! itself only ever returns generated lines or a failure signal.

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;
use std::fs;
use std::path::PathBuf;

use versecraft::cli::{Args, Command};
use versecraft::generate::{generate_lyrics, GenerationRequest};
use versecraft::language::LANGUAGES;
use versecraft::lexicon::Lexicons;
use versecraft::store::{CorpusRecord, CorpusStore};

/// Resolve an explicit `--db` override or the platform default.
fn store_path(db: Option<PathBuf>) -> Result<PathBuf> {
    match db {
        Some(path) => Ok(path),
        None => versecraft::config::default_store_path(),
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    match args.command {
        Command::Generate {
            language,
            genre,
            min_lines,
            max_lines,
            bias,
            db,
            allow_profanity,
            censor_list,
        } => {
            let path = store_path(db)?;
            let store = CorpusStore::open_read_only(&path)
                .with_context(|| format!("Cannot open corpus store at {}", path.display()))?;

            // Lexicon variants are selected once here; the pipeline only
            // ever sees the capability interface.
            let lexicons = if allow_profanity {
                Lexicons::permissive()
            } else if let Some(list) = censor_list {
                Lexicons::with_censor_file(&list)
            } else {
                Lexicons::builtin()
            };

            let request = GenerationRequest {
                language: language.clone(),
                genre: genre.clone(),
                min_lines,
                max_lines,
                bias,
            };
            match generate_lyrics(&store, &lexicons, &request) {
                Some(lyrics) => println!("{lyrics}"),
                None => bail!("could not generate lyrics for {language}/{genre}"),
            }
        }
        Command::InitDb { records, db, force } => {
            let path = store_path(db)?;
            if path.exists() && !force {
                bail!(
                    "corpus store already exists at {}; pass --force to import anyway",
                    path.display()
                );
            }

            let raw = fs::read_to_string(&records)
                .with_context(|| format!("Cannot read records file {}", records.display()))?;
            let parsed: Vec<CorpusRecord> = serde_json::from_str(&raw)
                .with_context(|| format!("Malformed records file {}", records.display()))?;

            info!("importing {} records into {}", parsed.len(), path.display());
            let mut store = CorpusStore::open(&path)?;
            store.init_schema()?;
            let count = store.import_records(&parsed)?;
            println!("Imported {count} corpus records into {}", path.display());
        }
        Command::List { db } => {
            let path = store_path(db)?;
            let store = CorpusStore::open_read_only(&path)
                .with_context(|| format!("Cannot open corpus store at {}", path.display()))?;
            let summaries = store.summary()?;
            if summaries.is_empty() {
                println!("Corpus store is empty.");
            } else {
                println!("{:<10} {:<14} {:>8} {:>12}", "Language", "Genre", "Records", "Characters");
                for s in summaries {
                    println!(
                        "{:<10} {:<14} {:>8} {:>12}",
                        s.language, s.genre, s.records, s.chars
                    );
                }
            }
        }
        Command::Languages => {
            for (name, code) in LANGUAGES {
                println!("{code}  {name}");
            }
        }
    }

    Ok(())
}
