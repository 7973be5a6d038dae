use std::collections::HashSet;
use std::path::Path;

use regex_lite::{Regex, RegexBuilder};
use tracing::{debug, warn};

use super::variable::{contains_any, segments, PatternVariable, Segment};
use crate::error::{QordobaError, Result};
use crate::languages::LanguageRegistry;
use crate::sources::{to_posix, TranslationFile};

/// A push pattern compiled into an anchored, case-insensitive matcher.
#[derive(Debug, Clone)]
pub struct PushPattern {
    raw: String,
    regex: Regex,
}

/// Placeholder values captured from a matched path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatternMatch {
    values: Vec<(PatternVariable, String)>,
}

impl PatternMatch {
    pub fn get(&self, variable: PatternVariable) -> Option<&str> {
        self.values
            .iter()
            .find(|(v, _)| *v == variable)
            .map(|(_, value)| value.as_str())
    }

    /// Non-empty language tokens in lookup order.
    pub fn language_tokens(&self) -> impl Iterator<Item = &str> + '_ {
        PatternVariable::LANGUAGE
            .into_iter()
            .filter_map(|v| self.get(v))
            .filter(|value| !value.is_empty())
    }
}

impl PushPattern {
    pub fn compile(raw: &str) -> Result<Self> {
        if !contains_any(raw, &PatternVariable::PUSH) {
            return Err(QordobaError::PatternInvalid {
                pattern: raw.to_string(),
                expected: PatternVariable::describe(&PatternVariable::PUSH),
            });
        }

        let posix = raw.replace('\\', "/");
        let mut expression = String::from("^");
        let mut named = HashSet::new();

        for segment in segments(&posix) {
            match segment {
                Segment::Variable(variable) => match variable.capture_fragment() {
                    // Regex group names must be unique, repeats only have to match.
                    Some(fragment) if named.insert(variable) => {
                        expression.push_str(&format!("(?P<{}>{fragment})", variable.name()));
                    }
                    Some(fragment) => expression.push_str(&format!("(?:{fragment})")),
                    None => expression.push_str(&regex_lite::escape(variable.token())),
                },
                Segment::Literal(text) => expression.push_str(&regex_lite::escape(text)),
            }
        }
        expression.push('$');

        let regex = RegexBuilder::new(&expression)
            .case_insensitive(true)
            .build()
            .map_err(|e| QordobaError::PatternRegex {
                pattern: raw.to_string(),
                source: e,
            })?;

        Ok(Self {
            raw: raw.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    /// Match a project relative path, with either separator style.
    pub fn captures(&self, relative_path: &str) -> Option<PatternMatch> {
        let candidate = relative_path.replace('\\', "/");
        let captures = self.regex.captures(&candidate)?;

        let values = PatternVariable::PUSH
            .into_iter()
            .filter_map(|v| {
                captures
                    .name(v.name())
                    .map(|m| (v, m.as_str().to_string()))
            })
            .collect();

        Some(PatternMatch { values })
    }

    /// Build a [`TranslationFile`] for `relative_path` when it matches and its
    /// language token is known to the registry.
    pub fn match_file(
        &self,
        root: &Path,
        relative_path: &Path,
        registry: &LanguageRegistry,
    ) -> Option<TranslationFile> {
        let posix = to_posix(relative_path);
        let Some(matched) = self.captures(&posix) else {
            debug!(path = %posix, pattern = %self.raw, "path does not match push pattern");
            return None;
        };

        for token in matched.language_tokens() {
            match registry.get_language(token) {
                Ok(language) => {
                    return Some(TranslationFile::new(
                        relative_path,
                        language.clone(),
                        root,
                    ));
                }
                Err(err) => debug!(path = %posix, token, "{err}"),
            }
        }

        warn!(
            "Language code {:?} not found in qordoba, skipping {posix}",
            matched.language_tokens().collect::<Vec<_>>()
        );
        None
    }
}
