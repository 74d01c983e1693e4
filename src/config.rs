//! Translator configuration
/// Config file loader
mod loader;
/// Translation file pattern matcher
mod matcher;
/// Configuration types and settings
mod types;

pub use loader::{
    CONFIG_FILE_NAME,
    load_from_workspace,
};
pub use matcher::{
    FileMatcher,
    MatcherError,
    PatternList,
};
pub use types::{
    ConfigError,
    TranslationFilesConfig,
    TranslatorSettings,
    ValidationError,
};
