use std::collections::BTreeMap;

use tracing::debug;

use super::TranslationFile;
use crate::api::ProjectApi;
use crate::error::{QordobaError, Result};

/// Built-in file formats, in declaration order. When two formats share an
/// extension the later one wins.
pub const CONTENT_TYPE_CODES: &[(&str, &[&str])] = &[
    ("excel", &["xlsx"]),
    ("xliff", &["xliff", "xlf"]),
    ("XLIFF1.2", &["xliff", "xlf"]),
    ("xmlAndroid", &["xml"]),
    ("macStrings", &["strings"]),
    ("PO", &["po"]),
    ("propertiesJava", &["properties"]),
    ("YAML", &["yml", "yaml"]),
    ("YAMLi18n", &["yml", "yaml"]),
    ("csv", &["csv"]),
    ("JSON", &["json"]),
    ("SRT", &["srt"]),
    ("md", &["md", "text"]),
];

pub fn builtin_extensions(code: &str) -> Option<&'static [&'static str]> {
    CONTENT_TYPE_CODES
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, extensions)| *extensions)
}

/// Formats known to a project and the extension index derived from them.
#[derive(Debug, Clone)]
pub struct ContentTypeTable {
    formats: Vec<(String, Vec<String>)>,
    by_extension: BTreeMap<String, String>,
}

impl Default for ContentTypeTable {
    fn default() -> Self {
        let formats = CONTENT_TYPE_CODES
            .iter()
            .map(|(code, extensions)| {
                (
                    code.to_string(),
                    extensions.iter().map(|e| e.to_string()).collect(),
                )
            })
            .collect();
        let mut table = Self {
            formats,
            by_extension: BTreeMap::new(),
        };
        table.reindex();
        table
    }
}

impl ContentTypeTable {
    /// Merge project specific formats. A merged code moves to the end of the table,
    /// so its extensions win over the built-in ones and over earlier overrides.
    pub fn merge<I, C, E, S>(&mut self, overrides: I)
    where
        I: IntoIterator<Item = (C, E)>,
        C: Into<String>,
        E: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for (code, extensions) in overrides {
            let code = code.into();
            self.formats.retain(|(existing, _)| *existing != code);
            self.formats
                .push((code, extensions.into_iter().map(Into::into).collect()));
        }
        self.reindex();
    }

    /// Merge the formats the remote project declares over this table.
    pub fn with_project_overrides(mut self, api: &dyn ProjectApi) -> Result<Self> {
        let overrides = api.content_type_overrides()?;
        if !overrides.is_empty() {
            debug!(count = overrides.len(), "merging project content types");
            self.merge(overrides);
        }
        Ok(self)
    }

    fn reindex(&mut self) {
        self.by_extension.clear();
        for (code, extensions) in &self.formats {
            for extension in extensions {
                self.by_extension.insert(extension.clone(), code.clone());
            }
        }
    }

    pub fn content_type_for_extension(&self, extension: &str) -> Option<&str> {
        self.by_extension.get(extension).map(String::as_str)
    }

    /// Content type code of a file, by its first-dot extension.
    pub fn resolve(&self, file: &TranslationFile) -> Result<&str> {
        let extension = file.extension().unwrap_or_default();
        self.content_type_for_extension(extension)
            .ok_or_else(|| QordobaError::UnsupportedExtension {
                extension: extension.to_string(),
                allowed: self.allowed_extensions().collect::<Vec<_>>().join(", "),
            })
    }

    pub fn allowed_extensions(&self) -> impl Iterator<Item = &str> {
        self.by_extension.keys().map(String::as_str)
    }

    pub fn formats(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.formats
            .iter()
            .map(|(code, extensions)| (code.as_str(), extensions.as_slice()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::languages::Language;
    use rstest::rstest;

    fn file(path: &str) -> TranslationFile {
        TranslationFile::new(path, Language::new(1, "en-us", "English"), "/project")
    }

    #[rstest]
    #[case("a/strings.json", "JSON")]
    #[case("a/strings.yml", "YAMLi18n")]
    #[case("a/strings.yaml", "YAMLi18n")]
    #[case("a/strings.xlf", "XLIFF1.2")]
    #[case("a/values.xml", "xmlAndroid")]
    #[case("a/notes.text", "md")]
    #[case("a/book.xlsx", "excel")]
    fn test_resolve_builtin(#[case] path: &str, #[case] expected: &str) {
        let table = ContentTypeTable::default();
        assert_eq!(table.resolve(&file(path)).unwrap(), expected);
    }

    #[rstest]
    #[case("a/Resource.resx")]
    #[case("a/Makefile")]
    #[case("a/server.en.yml")]
    fn test_resolve_unsupported(#[case] path: &str) {
        let table = ContentTypeTable::default();
        let result = table.resolve(&file(path));
        assert!(matches!(result, Err(QordobaError::UnsupportedExtension { .. })));
    }

    #[test]
    fn test_resolve_is_idempotent() {
        let table = ContentTypeTable::default();
        let f = file("i18n/strings.po");
        assert_eq!(table.resolve(&f).unwrap(), table.resolve(&f).unwrap());
    }

    #[test]
    fn test_merge_project_formats() {
        let mut table = ContentTypeTable::default();
        table.merge([
            ("resx", vec!["resx"]),
            ("plaintext", vec!["txt", "text"]),
        ]);

        assert_eq!(table.content_type_for_extension("resx"), Some("resx"));
        assert_eq!(table.content_type_for_extension("txt"), Some("plaintext"));
        assert_eq!(table.content_type_for_extension("text"), Some("plaintext"));
        assert_eq!(table.content_type_for_extension("md"), Some("md"));
    }

    #[test]
    fn test_override_of_existing_code_wins() {
        let mut table = ContentTypeTable::default();
        let f = file("config/en.yml");
        assert_eq!(table.resolve(&f).unwrap(), "YAMLi18n");

        table.merge([("YAML", ["yml"])]);
        assert_eq!(table.resolve(&f).unwrap(), "YAML");
        assert_eq!(table.content_type_for_extension("yaml"), Some("YAMLi18n"));

        table.merge([("YAMLi18n", ["yml"])]);
        assert_eq!(table.resolve(&f).unwrap(), "YAMLi18n");
    }

    #[test]
    fn test_builtin_extensions() {
        assert_eq!(builtin_extensions("xliff"), Some(&["xliff", "xlf"][..]));
        assert_eq!(builtin_extensions("nope"), None);
    }
}
