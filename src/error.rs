//! Translation error taxonomy.

use std::fmt;

use thiserror::Error;

/// Closed set of translation failure kinds.
///
/// The discriminant is the numeric code carried by [`TranslationError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum TranslationCode {
    /// Key absent from both the requested and the default language.
    TranslationNotFound = 1,
    /// Translation file could not be opened or read.
    FileLoadingError = 2,
    /// Translation file is not a flat string-to-string JSON object.
    FileUnmarshalingError = 3,
}

impl TranslationCode {
    /// Numeric code of this kind.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Maps a numeric code back to its kind, if it is one of the known codes.
    #[must_use]
    pub const fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(Self::TranslationNotFound),
            2 => Some(Self::FileLoadingError),
            3 => Some(Self::FileUnmarshalingError),
            _ => None,
        }
    }
}

impl fmt::Display for TranslationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::TranslationNotFound => "TranslationNotFound",
            Self::FileLoadingError => "FileLoadingError",
            Self::FileUnmarshalingError => "FileUnmarshalingError",
        };
        f.write_str(name)
    }
}

/// Failure returned by translation lookups and file loads.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Code: {code}, Msg: {message}")]
pub struct TranslationError {
    pub code: i32,
    pub message: String,
}

impl TranslationError {
    #[must_use]
    pub fn new(kind: TranslationCode, message: impl Into<String>) -> Self {
        Self { code: kind.code(), message: message.into() }
    }

    /// `key` was found neither in `language` nor in the default language.
    ///
    /// The message always names the requested language.
    #[must_use]
    pub fn not_found(key: &str, language: &str) -> Self {
        Self::new(
            TranslationCode::TranslationNotFound,
            format!("could not find translation for key {key} on language {language}"),
        )
    }

    #[must_use]
    pub fn file_loading(file_path: &str) -> Self {
        Self::new(TranslationCode::FileLoadingError, format!("could not open file at {file_path}"))
    }

    #[must_use]
    pub fn file_unmarshaling(file_path: &str) -> Self {
        Self::new(
            TranslationCode::FileUnmarshalingError,
            format!(
                "an error occured while unmarshaling the JSON contents for file at {file_path}"
            ),
        )
    }

    /// Kind of this error, or `None` when `code` is not a known code.
    #[must_use]
    pub const fn kind(&self) -> Option<TranslationCode> {
        TranslationCode::from_code(self.code)
    }
}
