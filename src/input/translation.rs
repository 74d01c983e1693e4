//! Translation file input definitions

use std::collections::HashMap;
use std::path::Path;

use crate::error::TranslationError;

/// Flat key to translated string mapping for one language.
pub type TranslationMap = HashMap<String, String>;

/// Derive the language code from a translation file path.
///
/// Takes the last `/` separated segment and keeps everything before its
/// first `.`. Dots inside the language code itself are not supported.
///
/// # Examples
/// - `locales/en.json` → `en`
/// - `../mock_translation_files/pt-BR.json` → `pt-BR`
/// - `locales/en.us.json` → `en`
#[must_use]
pub fn detect_language_from_path(file_path: &str) -> String {
    let file_name = file_path.rsplit('/').next().unwrap_or(file_path);
    file_name.split('.').next().unwrap_or(file_name).to_string()
}

/// Parse the contents of a translation file.
///
/// The top level must be a JSON object whose values are all strings.
pub fn parse_translations(content: &[u8]) -> Result<TranslationMap, serde_json::Error> {
    serde_json::from_slice(content)
}

/// One translation file read from disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationFile {
    /// Language code derived from the file name.
    pub language: String,

    /// Path as given by the caller.
    pub file_path: String,

    pub keys: TranslationMap,
}

/// Load a translation file.
///
/// # Errors
/// - `FileLoadingError` if the file cannot be read.
/// - `FileUnmarshalingError` if the contents are not a flat string map.
pub fn load_translation_file(file_path: &Path) -> Result<TranslationFile, TranslationError> {
    let display_path = file_path.to_string_lossy().to_string();

    let content = std::fs::read(file_path).map_err(|e| {
        tracing::debug!(file_path = %display_path, error = %e, "Failed to read translation file");
        TranslationError::file_loading(&display_path)
    })?;

    let keys = parse_translations(&content).map_err(|e| {
        tracing::debug!(file_path = %display_path, error = %e, "Failed to parse translation file");
        TranslationError::file_unmarshaling(&display_path)
    })?;

    let language = detect_language_from_path(&display_path);

    Ok(TranslationFile { language, file_path: display_path, keys })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::fs;

    use googletest::prelude::*;
    use rstest::rstest;
    use tempfile::TempDir;

    use super::*;
    use crate::error::TranslationCode;

    #[rstest]
    #[case("en.json", "en")]
    #[case("locales/en.json", "en")]
    #[case("../mock_translation_files/pt-BR.json", "pt-BR")]
    #[case("/abs/path/to/pt-PT.json", "pt-PT")]
    // Everything after the first dot is dropped
    #[case("locales/en.us.json", "en")]
    // Extension is irrelevant
    #[case("locales/ja.yaml", "ja")]
    #[case("locales/de", "de")]
    // Only `/` separates segments
    #[case("some.dir/fr.json", "fr")]
    #[case("locales/", "")]
    fn test_detect_language_from_path(#[case] path: &str, #[case] expected: &str) {
        assert_eq!(detect_language_from_path(path), expected);
    }

    #[googletest::test]
    fn test_parse_translations_flat_object() {
        let result = parse_translations(br#"{ "greeting": "hello", "farewell": "bye" }"#);

        let keys = result.unwrap();
        expect_that!(keys.get("greeting"), some(eq(&"hello".to_string())));
        expect_that!(keys.get("farewell"), some(eq(&"bye".to_string())));
        expect_that!(keys.len(), eq(2));
    }

    #[googletest::test]
    fn test_parse_translations_empty_object() {
        let result = parse_translations(b"{}");

        expect_that!(result.unwrap().len(), eq(0));
    }

    #[rstest]
    #[case::malformed(r#"{ "greeting": "hello""#)]
    #[case::not_json("greeting=hello")]
    #[case::nested(r#"{ "common": { "greeting": "hello" } }"#)]
    #[case::array(r#"["hello"]"#)]
    #[case::number_value(r#"{ "count": 1 }"#)]
    #[case::null_value(r#"{ "greeting": null }"#)]
    #[case::null("null")]
    #[case::empty("")]
    fn test_parse_translations_rejects_wrong_shape(#[case] content: &str) {
        assert!(parse_translations(content.as_bytes()).is_err());
    }

    #[googletest::test]
    fn test_load_translation_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("pt-BR.json");
        fs::write(&path, r#"{"greeting": "ola"}"#).unwrap();

        let file = load_translation_file(&path).unwrap();

        expect_that!(file.language, eq("pt-BR"));
        assert_eq!(file.file_path, path.to_string_lossy());
        expect_that!(file.keys.get("greeting"), some(eq(&"ola".to_string())));
    }

    #[googletest::test]
    fn test_load_translation_file_missing() {
        let error = load_translation_file(Path::new("non-existing-file.json")).unwrap_err();

        expect_that!(error.kind(), some(eq(TranslationCode::FileLoadingError)));
        expect_that!(error.message, eq("could not open file at non-existing-file.json"));
    }

    #[googletest::test]
    fn test_load_translation_file_malformed() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("en.json");
        fs::write(&path, "{ not json").unwrap();
        let display_path = path.to_string_lossy().to_string();

        let error = load_translation_file(&path).unwrap_err();

        assert_eq!(error, TranslationError::file_unmarshaling(&display_path));
    }
}
