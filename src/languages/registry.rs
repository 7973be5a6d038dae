use std::collections::HashMap;
use std::path::Path;

use super::Language;
use crate::error::{QordobaError, Result};
use crate::sources::TranslationFile;

/// Lower-cases and maps `_` to `-` so `en_US`, `EN-us` and `en-us` share a key.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase().replace('_', "-")
}

/// Project languages, loaded once and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    index: HashMap<String, usize>,
}

impl LanguageRegistry {
    /// Codes are indexed before names and short codes, so a language whose code is `en`
    /// wins over the `lang` of `en-us`. Among short codes the first registered wins.
    pub fn new(languages: impl IntoIterator<Item = Language>) -> Self {
        let languages: Vec<Language> = languages.into_iter().collect();
        let mut index = HashMap::new();

        for (i, language) in languages.iter().enumerate() {
            index.entry(normalize_key(&language.code)).or_insert(i);
        }
        for (i, language) in languages.iter().enumerate() {
            for key in [
                language.name.clone(),
                language.name_capitalized(),
                language.name_uppercased(),
            ] {
                index.entry(normalize_key(&key)).or_insert(i);
            }
        }
        for (i, language) in languages.iter().enumerate() {
            index.entry(normalize_key(language.lang())).or_insert(i);
        }

        Self { languages, index }
    }

    /// Parse the JSON language list returned by the project API.
    pub fn from_json(json: &str) -> Result<Self> {
        let languages: Vec<Language> =
            serde_json::from_str(json).map_err(|e| QordobaError::LanguagesParse { source: e })?;
        Ok(Self::new(languages))
    }

    pub fn get_language(&self, identifier: &str) -> Result<&Language> {
        self.index
            .get(&normalize_key(identifier))
            .map(|&i| &self.languages[i])
            .ok_or_else(|| QordobaError::LanguageNotFound {
                language: identifier.to_string(),
            })
    }

    /// Canonical identifier (the language code) for a raw token.
    pub fn normalize(&self, raw: &str) -> Result<&str> {
        self.get_language(raw).map(|language| language.code.as_str())
    }

    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }

    /// Like [`crate::pattern::resolve_destination_path`], for a raw language token.
    pub fn resolve_destination_path(
        &self,
        curdir: &Path,
        language: &str,
        pattern: Option<&str>,
        source_name: Option<&str>,
        content_type_code: Option<&str>,
    ) -> Result<TranslationFile> {
        let language = self.get_language(language)?;
        crate::pattern::resolve_destination_path(
            curdir,
            language,
            pattern,
            source_name,
            content_type_code,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn registry() -> LanguageRegistry {
        LanguageRegistry::new([
            Language::new(94, "en-us", "English - United States"),
            Language::new(95, "en-gb", "English - United Kingdom"),
            Language::new(110, "fr-fr", "French - France"),
            Language::new(46, "zh-cn", "Chinese - China"),
        ])
    }

    #[rstest]
    #[case("fr-fr", "fr-fr")]
    #[case("FR-FR", "fr-fr")]
    #[case("fr_FR", "fr-fr")]
    #[case("French - France", "fr-fr")]
    #[case("FRENCH - FRANCE", "fr-fr")]
    #[case("French - france", "fr-fr")]
    #[case("fr", "fr-fr")]
    #[case("en", "en-us")]
    #[case(" zh-cn ", "zh-cn")]
    fn test_normalize(#[case] raw: &str, #[case] expected: &str) {
        assert_eq!(registry().normalize(raw).unwrap(), expected);
    }

    #[test]
    fn test_normalize_is_idempotent() {
        let registry = registry();
        for raw in ["fr_FR", "Chinese - China", "en", "EN-GB"] {
            let once = registry.normalize(raw).unwrap().to_string();
            assert_eq!(registry.normalize(&once).unwrap(), once);
        }
    }

    #[test]
    fn test_unknown_language() {
        let registry = registry();
        let result = registry.normalize("de-de");
        assert!(matches!(
            result,
            Err(QordobaError::LanguageNotFound { ref language }) if language == "de-de"
        ));
    }

    #[test]
    fn test_exact_code_beats_short_code() {
        let registry = LanguageRegistry::new([
            Language::new(1, "pt-br", "Portuguese - Brazil"),
            Language::new(2, "pt", "Portuguese"),
        ]);
        assert_eq!(registry.get_language("pt").unwrap().id, 2);
    }

    #[test]
    fn test_from_json() {
        let json = r#"[
            {"id": 110, "name": "French - France", "code": "fr-fr", "direction": "ltr"},
            {"id": 12, "name": "Arabic - Egypt", "code": "ar-eg", "direction": "rtl"}
        ]"#;
        let registry = LanguageRegistry::from_json(json).unwrap();
        assert_eq!(registry.languages().len(), 2);
        assert_eq!(
            registry.get_language("ar").unwrap().direction,
            crate::languages::Direction::Rtl
        );
    }

    #[test]
    fn test_from_json_malformed() {
        let result = LanguageRegistry::from_json("{not json");
        assert!(matches!(result, Err(QordobaError::LanguagesParse { .. })));
    }

    #[test]
    fn test_resolve_destination_path_by_token() {
        let file = registry()
            .resolve_destination_path(
                Path::new(""),
                "zh_CN",
                Some("i18n/<language_code>/translations.json"),
                None,
                None,
            )
            .unwrap();
        assert_eq!(file.posix_path(), "i18n/zh-cn/translations.json");

        let result = registry().resolve_destination_path(
            Path::new(""),
            "xx-yy",
            Some("i18n/<language_code>/translations.json"),
            None,
            None,
        );
        assert!(matches!(result, Err(QordobaError::LanguageNotFound { .. })));
    }
}
