use std::fmt;

use crate::languages::Language;

/// A placeholder that may appear in a push or pull pattern, written `<name>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PatternVariable {
    LanguageCode,
    LanguageName,
    LanguageNameCap,
    LanguageNameAllCap,
    LanguageLangCode,
    Extension,
}

impl PatternVariable {
    pub const ALL: [PatternVariable; 6] = [
        PatternVariable::LanguageCode,
        PatternVariable::LanguageName,
        PatternVariable::LanguageNameCap,
        PatternVariable::LanguageNameAllCap,
        PatternVariable::LanguageLangCode,
        PatternVariable::Extension,
    ];

    /// Language placeholders in the order a matched language token is looked up.
    pub const LANGUAGE: [PatternVariable; 5] = [
        PatternVariable::LanguageCode,
        PatternVariable::LanguageName,
        PatternVariable::LanguageNameCap,
        PatternVariable::LanguageNameAllCap,
        PatternVariable::LanguageLangCode,
    ];

    /// Placeholders that can be recovered from a file name.
    pub const PUSH: [PatternVariable; 2] = [
        PatternVariable::LanguageCode,
        PatternVariable::LanguageLangCode,
    ];

    pub fn name(self) -> &'static str {
        match self {
            PatternVariable::LanguageCode => "language_code",
            PatternVariable::LanguageName => "language_name",
            PatternVariable::LanguageNameCap => "language_name_cap",
            PatternVariable::LanguageNameAllCap => "language_name_allcap",
            PatternVariable::LanguageLangCode => "language_lang_code",
            PatternVariable::Extension => "extension",
        }
    }

    /// The literal token as written in configuration files.
    pub fn token(self) -> &'static str {
        match self {
            PatternVariable::LanguageCode => "<language_code>",
            PatternVariable::LanguageName => "<language_name>",
            PatternVariable::LanguageNameCap => "<language_name_cap>",
            PatternVariable::LanguageNameAllCap => "<language_name_allcap>",
            PatternVariable::LanguageLangCode => "<language_lang_code>",
            PatternVariable::Extension => "<extension>",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Value substituted for this placeholder when generating a path.
    /// `Extension` is resolved from the source file name, not the language.
    pub fn substitute(self, language: &Language) -> Option<String> {
        match self {
            PatternVariable::LanguageCode => Some(language.code.clone()),
            PatternVariable::LanguageName => Some(language.name.clone()),
            PatternVariable::LanguageNameCap => Some(language.name_capitalized()),
            PatternVariable::LanguageNameAllCap => Some(language.name_uppercased()),
            PatternVariable::LanguageLangCode => Some(language.lang().to_string()),
            PatternVariable::Extension => None,
        }
    }

    /// Regex fragment matching this placeholder inside a push pattern.
    pub fn capture_fragment(self) -> Option<&'static str> {
        match self {
            PatternVariable::LanguageCode => Some(r"\w{2}-\w{2}"),
            PatternVariable::LanguageLangCode => Some(r"\w+"),
            _ => None,
        }
    }

    /// Comma separated tokens, used in error messages.
    pub fn describe(variables: &[PatternVariable]) -> String {
        variables
            .iter()
            .map(|v| v.token())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl fmt::Display for PatternVariable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// A piece of a parsed pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Segment<'a> {
    Literal(&'a str),
    Variable(PatternVariable),
}

/// Split a pattern into literal text and placeholders.
///
/// A `<` that does not start a known token stays part of the surrounding literal.
pub fn segments(pattern: &str) -> Vec<Segment<'_>> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(offset) = pattern[cursor..].find('<') {
        let at = cursor + offset;
        let variable = PatternVariable::ALL
            .into_iter()
            .find(|v| pattern[at..].starts_with(v.token()));

        match variable {
            Some(variable) => {
                if literal_start < at {
                    segments.push(Segment::Literal(&pattern[literal_start..at]));
                }
                segments.push(Segment::Variable(variable));
                cursor = at + variable.token().len();
                literal_start = cursor;
            }
            None => cursor = at + 1,
        }
    }

    if literal_start < pattern.len() {
        segments.push(Segment::Literal(&pattern[literal_start..]));
    }

    segments
}

/// Whether the pattern contains at least one of `variables`.
pub fn contains_any(pattern: &str, variables: &[PatternVariable]) -> bool {
    segments(pattern)
        .iter()
        .any(|s| matches!(s, Segment::Variable(v) if variables.contains(v)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_segments() {
        let parsed = segments("i18n/<language_code>/strings<extension>");
        assert_eq!(
            parsed,
            vec![
                Segment::Literal("i18n/"),
                Segment::Variable(PatternVariable::LanguageCode),
                Segment::Literal("/strings"),
                Segment::Variable(PatternVariable::Extension),
            ]
        );
    }

    #[test]
    fn test_segments_unknown_token_is_literal() {
        let parsed = segments("a<b/<language_lang>/<language_name_cap>");
        assert_eq!(
            parsed,
            vec![
                Segment::Literal("a<b/<language_lang>/"),
                Segment::Variable(PatternVariable::LanguageNameCap),
            ]
        );
    }

    #[test]
    fn test_segments_empty() {
        assert!(segments("").is_empty());
    }

    #[rstest]
    #[case("language_code", Some(PatternVariable::LanguageCode))]
    #[case("language_name_allcap", Some(PatternVariable::LanguageNameAllCap))]
    #[case("extension", Some(PatternVariable::Extension))]
    #[case("language", None)]
    fn test_from_name(#[case] name: &str, #[case] expected: Option<PatternVariable>) {
        assert_eq!(PatternVariable::from_name(name), expected);
    }

    #[test]
    fn test_tokens_roundtrip_through_segments() {
        for variable in PatternVariable::ALL {
            assert_eq!(segments(variable.token()), vec![Segment::Variable(variable)]);
        }
    }

    #[test]
    fn test_substitute() {
        let language = Language::new(46, "zh-cn", "Chinese - China");
        assert_eq!(
            PatternVariable::LanguageName.substitute(&language).as_deref(),
            Some("Chinese - China")
        );
        assert_eq!(
            PatternVariable::LanguageLangCode
                .substitute(&language)
                .as_deref(),
            Some("zh")
        );
        assert_eq!(PatternVariable::Extension.substitute(&language), None);
    }
}
