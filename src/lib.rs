//! flat-translator
//!
//! Key based translation lookup over flat per-language JSON files, falling
//! back to a default language when the requested language or key is missing.
//!
//! ```no_run
//! use flat_translator::Translator;
//!
//! let mut translator = Translator::new("en");
//! translator.load_translations("locales/en.json")?;
//! translator.load_translations("locales/pt-BR.json")?;
//!
//! let greeting = translator.translate("greeting", "pt-BR")?;
//! # Ok::<(), flat_translator::TranslationError>(())
//! ```

pub mod config;
pub mod error;
pub mod input;
pub mod store;
pub mod translator;
pub mod workspace;

mod test_utils;

pub use error::{
    TranslationCode,
    TranslationError,
};
pub use translator::Translator;
