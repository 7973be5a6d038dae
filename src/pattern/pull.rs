use std::path::{Component, Path, PathBuf};

use super::variable::{contains_any, segments, PatternVariable, Segment};
use crate::error::{QordobaError, Result};
use crate::languages::Language;
use crate::sources::{last_dot_extension, TranslationFile};

pub const DEFAULT_PULL_PATTERN: &str = "<language_code><extension>";

/// A validated pull pattern, kept as text and substituted at generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PullPattern {
    raw: String,
}

impl PullPattern {
    pub fn compile(raw: &str) -> Result<Self> {
        if !contains_any(raw, &PatternVariable::LANGUAGE) {
            return Err(QordobaError::PatternInvalid {
                pattern: raw.to_string(),
                expected: PatternVariable::describe(&PatternVariable::LANGUAGE),
            });
        }
        Ok(Self {
            raw: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    /// `<extension>` is only substituted when the pattern ends with it; elsewhere it
    /// is kept verbatim.
    pub fn render(&self, language: &Language, source_name: Option<&str>) -> String {
        let parsed = segments(&self.raw);
        let extension = if self.ends_with_extension() {
            Some(source_extension(source_name))
        } else {
            None
        };

        let mut rendered = String::with_capacity(self.raw.len());
        for segment in parsed {
            match segment {
                Segment::Literal(text) => rendered.push_str(text),
                Segment::Variable(PatternVariable::Extension) => match &extension {
                    Some(ext) => rendered.push_str(ext),
                    None => rendered.push_str(PatternVariable::Extension.token()),
                },
                Segment::Variable(variable) => {
                    if let Some(value) = variable.substitute(language) {
                        rendered.push_str(&value);
                    }
                }
            }
        }
        rendered
    }

    pub fn ends_with_extension(&self) -> bool {
        matches!(
            segments(&self.raw).last(),
            Some(Segment::Variable(PatternVariable::Extension))
        )
    }

    /// The text after the last `.` of the pattern.
    pub fn trailing_extension(&self) -> Option<&str> {
        self.raw.rsplit_once('.').map(|(_, ext)| ext)
    }

    /// Last path component of the pattern.
    pub fn file_name(&self) -> &str {
        self.raw.rsplit(&['/', '\\'][..]).next().unwrap_or(&self.raw)
    }
}

impl Default for PullPattern {
    fn default() -> Self {
        Self {
            raw: DEFAULT_PULL_PATTERN.to_string(),
        }
    }
}

/// Extension of the source name with its leading dot, e.g. `.json`; empty if none.
fn source_extension(source_name: Option<&str>) -> String {
    source_name
        .and_then(last_dot_extension)
        .map(|ext| format!(".{ext}"))
        .unwrap_or_default()
}

/// Generate the destination of a pulled file for `language`.
///
/// `<extension>` comes from `source_name` alone; the page's content type code is
/// accepted but never changes the result. Pure: nothing is read from or written
/// to disk.
pub fn resolve_destination_path(
    curdir: &Path,
    language: &Language,
    pattern: Option<&str>,
    source_name: Option<&str>,
    _content_type_code: Option<&str>,
) -> Result<TranslationFile> {
    let pattern = match pattern {
        Some(raw) => PullPattern::compile(raw)?,
        None => PullPattern::default(),
    };

    let rendered = pattern.render(language, source_name);
    let relative = relative_to(Path::new(&rendered), curdir);

    Ok(TranslationFile::new(relative, language.clone(), curdir))
}

/// Make `path` relative to `curdir` when it lies inside it and drop `.` components.
fn relative_to(path: &Path, curdir: &Path) -> PathBuf {
    let path = if path.is_absolute() {
        path.strip_prefix(curdir).unwrap_or(path)
    } else {
        path
    };

    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                if !normalized.pop() {
                    normalized.push("..");
                }
            }
            other => normalized.push(other.as_os_str()),
        }
    }
    normalized
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn language_en() -> Language {
        Language::new(94, "en-us", "English - United States")
    }

    fn language_fr() -> Language {
        Language::new(110, "fr-fr", "French - France")
    }

    fn language_cn() -> Language {
        Language::new(46, "zh-cn", "Chinese - China")
    }

    #[rstest]
    #[case("i18n/<language_lang>/translations.json")]
    #[case("")]
    #[case("./sources/")]
    #[case("strings<extension>")]
    fn test_compile_invalid(#[case] pattern: &str) {
        let result = PullPattern::compile(pattern);
        assert!(matches!(result, Err(QordobaError::PatternInvalid { .. })));

        let result = resolve_destination_path(Path::new(""), &language_fr(), Some(pattern), None, None);
        assert!(matches!(result, Err(QordobaError::PatternInvalid { .. })));
    }

    #[rstest]
    #[case("i18n/<language_code>/translations.json", language_cn(), "i18n/zh-cn/translations.json")]
    #[case("folder1/values-<language_lang_code>/strings.xml", language_en(), "folder1/values-en/strings.xml")]
    #[case("config/locales/server.<language_code>.yml", language_fr(), "config/locales/server.fr-fr.yml")]
    #[case("folder2/<language_name>/strings.xml", language_cn(), "folder2/Chinese - China/strings.xml")]
    #[case("folder3/strings.<language_name_cap>", language_fr(), "folder3/strings.French - france")]
    #[case("<language_name_allcap>.locale", language_fr(), "FRENCH - FRANCE.locale")]
    #[case("./i18n/<language_code>.json", language_fr(), "i18n/fr-fr.json")]
    fn test_resolve_destination_path(
        #[case] pattern: &str,
        #[case] language: Language,
        #[case] expected: &str,
    ) {
        let file = resolve_destination_path(Path::new(""), &language, Some(pattern), None, None).unwrap();
        assert_eq!(file.posix_path(), expected);
        assert_eq!(file.relative_path(), Path::new(expected));
    }

    #[rstest]
    #[case(Some("strings.json"), ".json")]
    #[case(Some("Resource.That.Has.Many.Extensions.json.yml"), ".yml")]
    #[case(Some("README"), "")]
    #[case(Some(".bashrc"), "")]
    #[case(None, "")]
    fn test_default_pattern_extension(#[case] source_name: Option<&str>, #[case] expected: &str) {
        let file = resolve_destination_path(Path::new(""), &language_fr(), None, source_name, None).unwrap();
        assert_eq!(file.posix_path(), format!("fr-fr{expected}"));
    }

    #[rstest]
    #[case(Some("values/<language_code><extension>"), Some("strings"), Some("xmlAndroid"), "values/fr-fr")]
    #[case(None, Some("README"), Some("JSON"), "fr-fr")]
    #[case(None, Some("strings.po"), Some("JSON"), "fr-fr.po")]
    fn test_extension_ignores_content_type(
        #[case] pattern: Option<&str>,
        #[case] source_name: Option<&str>,
        #[case] content_type_code: Option<&str>,
        #[case] expected: &str,
    ) {
        let file =
            resolve_destination_path(Path::new(""), &language_fr(), pattern, source_name, content_type_code)
                .unwrap();
        assert_eq!(file.posix_path(), expected);
    }

    #[test]
    fn test_extension_kept_when_not_trailing() {
        let file = resolve_destination_path(
            Path::new(""),
            &language_fr(),
            Some("<extension>/<language_code>.json"),
            Some("strings.po"),
            None,
        )
        .unwrap();
        assert_eq!(file.posix_path(), "<extension>/fr-fr.json");
    }

    #[test]
    fn test_absolute_pattern_relative_to_curdir() {
        let file = resolve_destination_path(
            Path::new("/project"),
            &language_fr(),
            Some("/project/i18n/<language_code>.json"),
            None,
            None,
        )
        .unwrap();
        assert_eq!(file.relative_path(), Path::new("i18n/fr-fr.json"));
        assert_eq!(file.full_path(), Path::new("/project/i18n/fr-fr.json"));
    }

    #[test]
    fn test_resolution_is_deterministic() {
        let a = resolve_destination_path(Path::new("/p"), &language_en(), None, Some("a.json"), None).unwrap();
        let b = resolve_destination_path(Path::new("/p"), &language_en(), None, Some("a.json"), None).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_pattern_helpers() {
        let pattern = PullPattern::compile("i18n/<language_code>/strings.json").unwrap();
        assert_eq!(pattern.trailing_extension(), Some("json"));
        assert_eq!(pattern.file_name(), "strings.json");
        assert_eq!(PullPattern::default().trailing_extension(), None);
    }
}
