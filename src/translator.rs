//! Key based translation lookup with default language fallback.

use std::path::Path;

use crate::config::{
    ConfigError,
    FileMatcher,
    TranslatorSettings,
    load_from_workspace,
};
use crate::error::TranslationError;
use crate::input::translation::load_translation_file;
use crate::store::TranslationStore;
use crate::workspace::{
    WorkspaceError,
    ensure_unique_languages,
    find_translation_files,
    relative_display,
};

/// Resolves `(key, language)` pairs against loaded translation files.
///
/// Lookup order for [`Translator::translate`]:
/// 1. the requested language
/// 2. the default language, logging a warning
///
/// Anything else is a `TranslationNotFound` error.
#[derive(Debug, Clone)]
pub struct Translator {
    /// Loaded translations
    store: TranslationStore,
    /// Fallback language, fixed at construction
    default_language: String,
}

impl Translator {
    /// Create a translator with an empty store.
    #[must_use]
    pub fn new(default_language: impl Into<String>) -> Self {
        Self { store: TranslationStore::new(), default_language: default_language.into() }
    }

    /// Build a translator from the workspace's `.translator.json` and load
    /// every translation file its patterns select.
    ///
    /// Falls back to [`TranslatorSettings::default`] when there is no settings file.
    ///
    /// # Errors
    /// - Settings read, parse or validation failure
    /// - Invalid glob pattern
    /// - Unreadable workspace directory
    /// - Two selected files with the same language
    /// - The first translation file that fails to load
    pub fn from_workspace(workspace_root: &Path) -> Result<Self, ConfigError> {
        let settings = load_from_workspace(workspace_root)?.unwrap_or_default();
        settings.validate().map_err(ConfigError::ValidationErrors)?;

        let matcher = FileMatcher::new(workspace_root.to_path_buf(), &settings)?;
        let mut translator = Self::from_settings(&settings);
        translator.load_workspace(&matcher)?;

        Ok(translator)
    }

    /// Create an empty translator using the configured default language.
    #[must_use]
    pub fn from_settings(settings: &TranslatorSettings) -> Self {
        Self::new(settings.default_language.clone())
    }

    #[must_use]
    pub fn default_language(&self) -> &str {
        &self.default_language
    }

    /// Load one translation file, replacing every key previously loaded for
    /// its language.
    ///
    /// The language is the file name up to its first `.`, so
    /// `locales/pt-BR.json` loads `pt-BR`. On failure the store is untouched.
    pub fn load_translations(
        &mut self,
        file_path: impl AsRef<Path>,
    ) -> Result<(), TranslationError> {
        let file_path = file_path.as_ref();
        tracing::debug!(file_path = %file_path.display(), "Loading translations");

        let file = load_translation_file(file_path)?;

        tracing::debug!(
            language = %file.language,
            keys = file.keys.len(),
            "Loaded translations"
        );
        if self.store.replace(file.language.clone(), file.keys).is_some() {
            tracing::debug!(language = %file.language, "Replaced previously loaded translations");
        }

        Ok(())
    }

    /// Load every translation file the matcher selects, in path order.
    ///
    /// Nothing is loaded if the walk fails or two files derive the same
    /// language. Otherwise stops at the first file that fails; languages
    /// loaded before it stay loaded. Returns the number of files loaded.
    ///
    /// # Errors
    /// - `Walk` for an unreadable directory
    /// - `DuplicateLanguage` naming both files
    /// - `Translation` for the first file that fails to load
    pub fn load_workspace(&mut self, matcher: &FileMatcher) -> Result<usize, WorkspaceError> {
        let files = find_translation_files(matcher)?;
        ensure_unique_languages(matcher, &files)?;

        for file in &files {
            if let Err(e) = self.load_translations(file) {
                tracing::debug!(
                    file = %relative_display(matcher, file),
                    "Stopping workspace load"
                );
                return Err(e.into());
            }
        }

        Ok(files.len())
    }

    /// Translate `key` into `lang`, falling back to the default language.
    ///
    /// # Errors
    /// `TranslationNotFound` when neither `lang` nor the default language
    /// has `key`. The message names `lang`, not the default language.
    pub fn translate(&self, key: &str, lang: &str) -> Result<String, TranslationError> {
        if let Some(translation) = self.store.lookup(lang, key) {
            return Ok(translation.to_string());
        }

        if let Some(translation) = self.store.lookup(&self.default_language, key) {
            tracing::warn!(
                key,
                language = lang,
                default_language = %self.default_language,
                "No translations for {key} on language {lang} was found. Falling back to default {}",
                self.default_language
            );
            return Ok(translation.to_string());
        }

        Err(TranslationError::not_found(key, lang))
    }

    /// Loaded language codes, sorted.
    #[must_use]
    pub fn languages(&self) -> Vec<&str> {
        self.store.languages()
    }

    #[must_use]
    pub fn has_language(&self, lang: &str) -> bool {
        self.store.contains_language(lang)
    }
}
