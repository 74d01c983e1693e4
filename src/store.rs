//! In-memory translation store.

use std::collections::HashMap;

use crate::input::translation::TranslationMap;

/// Language code → (translation key → translated string).
///
/// Each language's map is owned as a whole: loading a language again
/// replaces its previous keys entirely instead of merging them.
#[derive(Debug, Clone, Default)]
pub struct TranslationStore {
    /// Per-language key maps
    translations: HashMap<String, TranslationMap>,
}

impl TranslationStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace (or create) the entry for `language`.
    ///
    /// Returns the previous map for that language, if any.
    pub fn replace(
        &mut self,
        language: impl Into<String>,
        keys: TranslationMap,
    ) -> Option<TranslationMap> {
        self.translations.insert(language.into(), keys)
    }

    #[must_use]
    pub fn get(&self, language: &str) -> Option<&TranslationMap> {
        self.translations.get(language)
    }

    /// Look up `key` in `language` only; no fallback is applied here.
    #[must_use]
    pub fn lookup(&self, language: &str, key: &str) -> Option<&str> {
        self.translations.get(language)?.get(key).map(String::as_str)
    }

    #[must_use]
    pub fn contains_language(&self, language: &str) -> bool {
        self.translations.contains_key(language)
    }

    /// Loaded language codes, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        let mut languages: Vec<&str> = self.translations.keys().map(String::as_str).collect();
        languages.sort_unstable();
        languages
    }

    /// Number of loaded languages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.translations.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.translations.is_empty()
    }
}
