use std::fmt;
use std::path::{Component, Path, PathBuf};

use crate::languages::Language;

/// Everything after the FIRST `.` of a file name: `a.b.json` gives `b.json`.
///
/// This is the rule used to identify a file's format.
pub fn first_dot_extension(name: &str) -> Option<&str> {
    name.split_once('.').map(|(_, ext)| ext)
}

/// Everything after the LAST `.` of a file name, ignoring a leading dot:
/// `a.b.json` gives `json`, `.bashrc` gives nothing.
///
/// This is the rule used for `<extension>` in pull patterns.
pub fn last_dot_extension(name: &str) -> Option<&str> {
    Path::new(name).extension().and_then(|ext| ext.to_str())
}

/// Join the normal components of a path with `/`.
pub fn to_posix(path: &Path) -> String {
    path_parts(path).join("/")
}

fn path_parts(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

/// A file located relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TranslationFile {
    relative_path: PathBuf,
    name: String,
    language: Language,
    root: PathBuf,
}

impl TranslationFile {
    pub fn new(relative_path: impl Into<PathBuf>, language: Language, root: impl Into<PathBuf>) -> Self {
        let relative_path = relative_path.into();
        let name = relative_path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        Self {
            relative_path,
            name,
            language,
            root: root.into(),
        }
    }

    pub fn relative_path(&self) -> &Path {
        &self.relative_path
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn language(&self) -> &Language {
        &self.language
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn full_path(&self) -> PathBuf {
        self.root.join(&self.relative_path)
    }

    pub fn extension(&self) -> Option<&str> {
        first_dot_extension(&self.name)
    }

    pub fn posix_path(&self) -> String {
        to_posix(&self.relative_path)
    }

    pub fn path_parts(&self) -> Vec<String> {
        path_parts(&self.relative_path)
    }

    /// Identifier of the file in the remote project: `i18n/en-us/App.json` is
    /// `i18n-en-us-app.json`.
    pub fn unique_name(&self) -> String {
        self.path_parts().join("-").to_lowercase()
    }

    /// Same directory and language, different file name.
    pub fn with_name(&self, name: &str) -> Self {
        let relative_path = match self.relative_path.parent() {
            Some(parent) => parent.join(name),
            None => PathBuf::from(name),
        };
        Self::new(relative_path, self.language.clone(), self.root.clone())
    }
}

impl fmt::Display for TranslationFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}
