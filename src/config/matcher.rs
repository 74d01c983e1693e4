//! Include/exclude glob matching for translation files.

use std::fmt;
use std::path::{
    Path,
    PathBuf,
};

use globset::{
    Glob,
    GlobSet,
    GlobSetBuilder,
};

use super::TranslatorSettings;

/// Which pattern list a bad glob came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternList {
    Include,
    Exclude,
}

impl fmt::Display for PatternList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Include => "translationFiles.includePatterns",
            Self::Exclude => "translationFiles.excludePatterns",
        })
    }
}

#[derive(Debug, thiserror::Error)]
#[error("Invalid glob in {list} '{pattern}': {source}")]
pub struct MatcherError {
    pub list: PatternList,
    pub pattern: String,
    /// Underlying globset failure
    #[source]
    source: globset::Error,
}

/// Compile one pattern list into a single set.
fn compile(list: PatternList, patterns: &[String]) -> Result<GlobSet, MatcherError> {
    let builder = patterns.iter().try_fold(GlobSetBuilder::new(), |mut builder, pattern| {
        let glob = Glob::new(pattern)
            .map_err(|source| MatcherError { list, pattern: pattern.clone(), source })?;
        builder.add(glob);
        Ok(builder)
    })?;

    builder.build().map_err(|source| MatcherError { list, pattern: patterns.join(", "), source })
}

/// Decides which files under a workspace root are translation files.
#[derive(Debug, Clone)]
pub struct FileMatcher {
    /// Root the globs are relative to
    workspace_root: PathBuf,
    /// Compiled `includePatterns`
    include: GlobSet,
    /// Compiled `excludePatterns`
    exclude: GlobSet,
}

impl FileMatcher {
    pub fn new(
        workspace_root: PathBuf,
        settings: &TranslatorSettings,
    ) -> Result<Self, MatcherError> {
        let files = &settings.translation_files;

        Ok(Self {
            workspace_root,
            include: compile(PatternList::Include, &files.include_patterns)?,
            exclude: compile(PatternList::Exclude, &files.exclude_patterns)?,
        })
    }

    #[must_use]
    pub fn workspace_root(&self) -> &Path {
        &self.workspace_root
    }

    /// True when `path` is selected by an include glob and by no exclude glob.
    ///
    /// Relative paths are taken relative to the workspace root. Absolute paths
    /// outside the root never match.
    #[must_use]
    pub fn is_translation_file(&self, path: &Path) -> bool {
        let relative = if path.is_absolute() {
            match path.strip_prefix(&self.workspace_root) {
                Ok(relative) => relative,
                Err(_) => return false,
            }
        } else {
            path
        };

        self.include.is_match(relative) && !self.exclude.is_match(relative)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use rstest::rstest;

    use super::*;
    use crate::config::TranslationFilesConfig;

    fn matcher(include: &[&str], exclude: &[&str]) -> Result<FileMatcher, MatcherError> {
        let settings = TranslatorSettings {
            translation_files: TranslationFilesConfig {
                include_patterns: include.iter().copied().map(String::from).collect(),
                exclude_patterns: exclude.iter().copied().map(String::from).collect(),
            },
            ..TranslatorSettings::default()
        };
        FileMatcher::new(PathBuf::from("/workspace"), &settings)
    }

    #[rstest]
    #[case("/workspace/locales/en.json", true)]
    #[case("/workspace/app/locales/pt-BR.json", true)]
    #[case("locales/en.json", true)]
    #[case("nested/locales/pt-PT.json", true)]
    #[case("/workspace/package.json", false)]
    #[case("/workspace/locales/en.yaml", false)]
    #[case("src/config.json", false)]
    // Outside the workspace root
    #[case("/other/locales/en.json", false)]
    fn default_patterns(#[case] path: &str, #[case] expected: bool) {
        let matcher =
            FileMatcher::new(PathBuf::from("/workspace"), &TranslatorSettings::default())
                .expect("valid patterns");

        assert_eq!(matcher.is_translation_file(Path::new(path)), expected);
    }

    #[rstest]
    fn exclude_wins_over_include() {
        let matcher = matcher(&["i18n/*.json"], &["i18n/incorrect.json"]).expect("valid patterns");

        assert!(matcher.is_translation_file(Path::new("/workspace/i18n/en.json")));
        assert!(!matcher.is_translation_file(Path::new("/workspace/i18n/incorrect.json")));
        assert!(!matcher.is_translation_file(Path::new("i18n/incorrect.json")));
    }

    #[rstest]
    #[case(&["**/*.{json"], &[], PatternList::Include, "**/*.{json")]
    #[case(&["**/*.json"], &["[invalid"], PatternList::Exclude, "[invalid")]
    fn reports_the_bad_pattern(
        #[case] include: &[&str],
        #[case] exclude: &[&str],
        #[case] list: PatternList,
        #[case] pattern: &str,
    ) {
        let err = matcher(include, exclude).unwrap_err();

        assert_eq!(err.list, list);
        assert_eq!(err.pattern, pattern);
        assert!(err.to_string().contains(&list.to_string()));
    }

    #[rstest]
    fn workspace_root_accessor() {
        let matcher = matcher(&["**/*.json"], &[]).expect("valid patterns");

        assert_eq!(matcher.workspace_root(), Path::new("/workspace"));
    }
}
