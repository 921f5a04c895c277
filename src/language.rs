//! Language name resolution and script classification.
//!
//! Corpus records are keyed by lowercase ISO-style language codes while the
//! public API accepts full language names; this module maps between the two
//! and decides which normalization path and initial Markov state size a
//! language gets.

/// Supported languages as `(display name, stored code)` pairs.
pub const LANGUAGES: &[(&str, &str)] = &[
    ("English", "en"),
    ("Chinese", "zh"),
    ("French", "fr"),
    ("German", "de"),
    ("Hindi", "hi"),
    ("Italian", "it"),
    ("Japanese", "ja"),
    ("Korean", "ko"),
    ("Polish", "pl"),
    ("Portuguese", "pt"),
    ("Russian", "ru"),
    ("Spanish", "es"),
    ("Turkish", "tr"),
    ("Arabic", "ar"),
];

/// Resolve a language name (or code) to its stored corpus code.
///
/// Matching is case-insensitive and accepts either the display name or the
/// code itself. Unknown languages fall back to `"en"`, mirroring how the
/// corpus was originally tagged.
pub fn language_code(name: &str) -> &'static str {
    let needle = name.trim().to_lowercase();
    for (display, code) in LANGUAGES {
        if display.to_lowercase() == needle || *code == needle {
            return code;
        }
    }
    "en"
}

/// Writing-system family of a corpus language.
///
/// The script decides which cleaning path the assembler runs and whether the
/// Markov model starts at the degraded context length. Transcription corpora
/// in non-Latin scripts carry different word- and sentence-boundary
/// conventions, so generic cleaning under-performs there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Script {
    Latin,
    /// Right-to-left scripts (Arabic): sentence-split cleaning.
    Rtl,
    /// Cyrillic (Russian): noise-line filtering plus dedup.
    Cyrillic,
    /// CJK (Chinese): foreign-script rejection plus dedup.
    Cjk,
}

impl Script {
    /// Classify a stored language code.
    pub fn for_code(code: &str) -> Self {
        match code {
            "ar" => Self::Rtl,
            "ru" => Self::Cyrillic,
            "zh" => Self::Cjk,
            _ => Self::Latin,
        }
    }

    /// Initial Markov context length for this script.
    ///
    /// Logographic and heavily-inflected scripts start at the permissive
    /// length; everything else starts at the default and degrades only on
    /// build failure.
    pub fn initial_state_size(self) -> usize {
        match self {
            Self::Cyrillic | Self::Cjk => crate::config::FALLBACK_STATE_SIZE,
            Self::Latin | Self::Rtl => crate::config::DEFAULT_STATE_SIZE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_and_code_both_resolve() {
        assert_eq!(language_code("English"), "en");
        assert_eq!(language_code("  RUSSIAN "), "ru");
        assert_eq!(language_code("ar"), "ar");
    }

    #[test]
    fn unknown_language_falls_back_to_english() {
        assert_eq!(language_code("Klingon"), "en");
        assert_eq!(language_code(""), "en");
    }

    #[test]
    fn scripts_classify_special_cases() {
        assert_eq!(Script::for_code("ar"), Script::Rtl);
        assert_eq!(Script::for_code("ru"), Script::Cyrillic);
        assert_eq!(Script::for_code("zh"), Script::Cjk);
        assert_eq!(Script::for_code("fr"), Script::Latin);
    }

    #[test]
    fn degraded_state_size_for_logographic_scripts() {
        assert_eq!(Script::Cjk.initial_state_size(), 2);
        assert_eq!(Script::Cyrillic.initial_state_size(), 2);
        assert_eq!(Script::Latin.initial_state_size(), 3);
    }
}
