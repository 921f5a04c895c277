//! Script-aware cleaning for noisy lyric-transcription corpora.
//!
//! Two passes run per request: [`clean_corpus_text`] strips structural noise
//! right after retrieval, and [`prepare_corpus`] does the model-facing pass
//! (character sanitizing, foreign-script rejection, dedup) just before the
//! chain is trained. The split mirrors how the corpora were transcribed:
//! annotation markers are universal, but word- and sentence-boundary
//! conventions differ per script.

use crate::language::Script;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashSet;

lazy_static! {
    // Annotation tokens common in lyric-transcription dumps: "@@1234",
    // "@!VERSE-2", "@(CHORUS)", stray '@' runs, and leftover markup tags.
    static ref NUMERIC_MARKER: Regex = Regex::new(r"@@\d+").unwrap();
    static ref ID_MARKER: Regex = Regex::new(r"@![A-Z0-9\-]+").unwrap();
    static ref TAG_MARKER: Regex = Regex::new(r"@\([A-Z\-]+\)").unwrap();
    static ref AT_RUN: Regex = Regex::new(r"@+").unwrap();
    static ref ANGLE_MARKUP: Regex = Regex::new(r"<[^>]+>").unwrap();
    static ref INNER_WS: Regex = Regex::new(r"[ \t]+").unwrap();
    static ref WS_RUN: Regex = Regex::new(r"\s+").unwrap();
    // Everything outside word characters, whitespace, Cyrillic, Arabic, CJK
    // ideographs, and light punctuation is sampling noise.
    static ref DISALLOWED: Regex = Regex::new(
        r"[^\w\s\x{0400}-\x{04FF}\x{0600}-\x{06FF}\x{4E00}-\x{9FFF}'!?.,\-]"
    )
    .unwrap();
}

/// Transcription-credit markers that flag a Cyrillic line as metadata rather
/// than lyrics.
const CREDIT_MARKERS: &[&str] = &["дмитрий", "денис", "рашид", "и сл"];

/// First-pass cleaning: strip annotation noise and enforce per-script line
/// shape.
///
/// The default path collapses internal whitespace and keeps lines with at
/// least 2 words. The right-to-left path additionally splits on sentence
/// boundaries, requires 3 words per fragment, and restores terminal
/// punctuation, since Arabic transcriptions routinely pack several sentences
/// into one physical line. CJK text is unspaced, so its path gates on
/// character count instead of word count.
pub fn clean_corpus_text(text: &str, script: Script) -> String {
    if text.trim().is_empty() {
        return String::new();
    }

    let stripped = NUMERIC_MARKER.replace_all(text, "");
    let stripped = ID_MARKER.replace_all(&stripped, "");
    let stripped = TAG_MARKER.replace_all(&stripped, "");
    let stripped = AT_RUN.replace_all(&stripped, "");
    let stripped = ANGLE_MARKUP.replace_all(&stripped, "");
    let normalized = stripped.replace("\r\n", "\n").replace('\r', "\n");

    match script {
        Script::Rtl => clean_rtl(&normalized),
        Script::Cjk => clean_cjk(&normalized),
        _ => clean_default(&normalized),
    }
}

fn clean_default(text: &str) -> String {
    text.lines()
        .map(|line| INNER_WS.replace_all(line, " ").trim().to_string())
        .filter(|line| line.split_whitespace().count() >= 2)
        .collect::<Vec<_>>()
        .join("\n")
}

fn clean_cjk(text: &str) -> String {
    text.lines()
        .map(|line| INNER_WS.replace_all(line, " ").trim().to_string())
        .filter(|line| line.chars().count() >= 2)
        .collect::<Vec<_>>()
        .join("\n")
}

fn clean_rtl(text: &str) -> String {
    let mut cleaned = Vec::new();
    for line in text.lines() {
        let line = INNER_WS.replace_all(line, " ").trim().to_string();
        let fragments: Vec<&str> = if line.contains(". ") {
            line.split(". ").collect()
        } else {
            vec![line.as_str()]
        };
        for fragment in fragments {
            let fragment = fragment.trim();
            if fragment.split_whitespace().count() >= 3 {
                if fragment.ends_with(['.', '?', '!']) {
                    cleaned.push(fragment.to_string());
                } else {
                    cleaned.push(format!("{fragment}."));
                }
            }
        }
    }
    cleaned.join("\n")
}

/// Second-pass, model-facing preparation dispatched by script.
pub fn prepare_corpus(text: &str, script: Script) -> String {
    match script {
        Script::Cyrillic => prepare_cyrillic(text),
        Script::Cjk => prepare_cjk(text),
        _ => prepare_generic(text, script),
    }
}

/// Generic model preparation: drop short lines, sanitize characters, and for
/// non-Latin scripts reject lines that are mostly Latin letters (a strong
/// signal the record was mis-tagged).
pub fn prepare_generic(text: &str, script: Script) -> String {
    let mut prepared = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.split_whitespace().count() < 3 {
            continue;
        }
        let sanitized = DISALLOWED.replace_all(line, "").into_owned();
        if script != Script::Latin && latin_ratio(&sanitized) > 0.4 {
            continue;
        }
        prepared.push(sanitized);
    }
    prepared.join("\n")
}

/// Cyrillic preparation: drop transcription-credit lines and mostly-Latin
/// lines, deduplicate exact matches.
pub fn prepare_cyrillic(text: &str) -> String {
    let mut seen = HashSet::new();
    let mut prepared = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.split_whitespace().count() < 2 {
            continue;
        }
        let lower = line.to_lowercase();
        if CREDIT_MARKERS.iter().any(|marker| lower.contains(marker)) {
            continue;
        }
        if latin_ratio(line) > 0.4 {
            continue;
        }
        if seen.insert(line.to_string()) {
            prepared.push(line.to_string());
        }
    }
    prepared.join("\n")
}

/// CJK preparation: reject any line carrying Latin letters, collapse
/// whitespace, deduplicate exact matches.
///
/// CJK text is unspaced, so the gate is character-count rather than the
/// word-count gate used elsewhere.
pub fn prepare_cjk(text: &str) -> String {
    let mut seen = HashSet::new();
    let mut prepared = Vec::new();
    for line in text.lines() {
        let line = line.trim();
        if line.chars().count() < 2 {
            continue;
        }
        if line.chars().any(|c| c.is_ascii_alphabetic()) {
            continue;
        }
        let normalized = WS_RUN.replace_all(line, " ").trim().to_string();
        if seen.insert(normalized.clone()) {
            prepared.push(normalized);
        }
    }
    prepared.join("\n")
}

/// Strip residual markup characters from a freshly sampled sentence.
pub fn strip_residual_markup(sentence: &str) -> String {
    DISALLOWED.replace_all(sentence, "").trim().to_string()
}

/// Share of a line's letters that are Latin. Empty lines count as 0.
fn latin_ratio(line: &str) -> f64 {
    let letters: Vec<char> = line.chars().filter(|c| c.is_alphabetic()).collect();
    if letters.is_empty() {
        return 0.0;
    }
    let latin = letters.iter().filter(|c| c.is_ascii_alphabetic()).count();
    latin as f64 / letters.len() as f64
}
