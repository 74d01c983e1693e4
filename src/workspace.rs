//! Translation file discovery under a workspace root.

use std::collections::HashMap;
use std::path::{
    Path,
    PathBuf,
};

use ignore::WalkBuilder;
use thiserror::Error;

use crate::config::FileMatcher;
use crate::error::TranslationError;
use crate::input::translation::detect_language_from_path;

#[derive(Error, Debug)]
pub enum WorkspaceError {
    /// A directory under the workspace could not be read
    #[error("Failed to walk workspace: {0}")]
    Walk(#[from] ignore::Error),

    /// Two selected files derive the same language code
    #[error("Language '{language}' is provided by both {first} and {second}")]
    DuplicateLanguage { language: String, first: String, second: String },

    #[error("Failed to load translations: {0}")]
    Translation(#[from] TranslationError),
}

/// Find every translation file under the matcher's workspace root.
///
/// Honors `.gitignore`. Symlinks are not descended into, but a symlink that
/// matches the patterns is selected unless it points at a directory. The
/// paths come back sorted so that loading order is stable.
///
/// # Errors
/// The first directory entry the walk fails to read.
pub fn find_translation_files(matcher: &FileMatcher) -> Result<Vec<PathBuf>, WorkspaceError> {
    let workspace_path = matcher.workspace_root();
    tracing::debug!(workspace_path = %workspace_path.display(), "Searching translation files");

    let mut found_files = Vec::new();

    for result in WalkBuilder::new(workspace_path)
        .hidden(false)
        .git_ignore(true)
        .git_global(true)
        .git_exclude(true)
        .follow_links(false)
        .build()
    {
        let entry = result?;
        let path = entry.path();

        let selectable = entry
            .file_type()
            .is_some_and(|ft| ft.is_file() || (ft.is_symlink() && !path.is_dir()));
        if !selectable {
            continue;
        }

        let Ok(relative_path) = path.strip_prefix(workspace_path) else {
            continue;
        };
        if !matcher.is_translation_file(relative_path) {
            continue;
        }

        found_files.push(path.to_path_buf());
    }

    found_files.sort();
    tracing::debug!(count = found_files.len(), "Found translation files");
    Ok(found_files)
}

/// Fail if two of `files` would load into the same language.
///
/// # Errors
/// `DuplicateLanguage` naming the language and both files.
pub fn ensure_unique_languages(
    matcher: &FileMatcher,
    files: &[PathBuf],
) -> Result<(), WorkspaceError> {
    let mut seen: HashMap<String, &Path> = HashMap::new();

    for file in files {
        let language = detect_language_from_path(&file.to_string_lossy());
        if let Some(first) = seen.get(&language) {
            return Err(WorkspaceError::DuplicateLanguage {
                language,
                first: relative_display(matcher, first),
                second: relative_display(matcher, file),
            });
        }
        seen.insert(language, file);
    }

    Ok(())
}

/// Relative display form of `path`, used in logs and errors.
pub(crate) fn relative_display(matcher: &FileMatcher, path: &Path) -> String {
    path.strip_prefix(matcher.workspace_root()).unwrap_or(path).display().to_string()
}
