use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{QordobaError, Result};
use crate::languages::{Language, LanguageRegistry};
use crate::pattern::{PullPattern, PushPattern};
use crate::sources::ContentTypeTable;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub project: ProjectConfig,

    #[serde(default)]
    pub push: PushConfig,

    #[serde(default)]
    pub pull: PullConfig,

    /// Project specific formats: content type code to extensions.
    #[serde(default)]
    pub content_types: BTreeMap<String, Vec<String>>,

    /// Cached project languages, as returned by the project API.
    #[serde(default)]
    pub languages: Vec<Language>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProjectConfig {
    pub organization_id: u64,
    pub project_id: u64,
    pub access_token: Option<String>,
    pub source_language: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PushConfig {
    pub pattern: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct PullConfig {
    #[serde(default)]
    pub patterns: Vec<String>,
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        if let Some(pattern) = &self.push.pattern {
            PushPattern::compile(pattern)?;
        }

        for pattern in &self.pull.patterns {
            PullPattern::compile(pattern)?;
        }

        if let Some(source) = &self.project.source_language {
            if !self.languages.is_empty() {
                self.registry().get_language(source)?;
            }
        }

        Ok(())
    }

    pub fn push_pattern(&self) -> Result<PushPattern> {
        let pattern = self
            .push
            .pattern
            .as_deref()
            .ok_or_else(|| QordobaError::ConfigInvalid {
                reason: "no [push] pattern configured".into(),
            })?;
        PushPattern::compile(pattern)
    }

    /// Configured pull patterns; `None` stands for the default pattern.
    pub fn pull_patterns(&self) -> Result<Vec<Option<PullPattern>>> {
        if self.pull.patterns.is_empty() {
            return Ok(vec![None]);
        }
        self.pull
            .patterns
            .iter()
            .map(|p| PullPattern::compile(p).map(Some))
            .collect()
    }

    pub fn registry(&self) -> LanguageRegistry {
        LanguageRegistry::new(self.languages.iter().cloned())
    }

    pub fn content_type_table(&self) -> ContentTypeTable {
        let mut table = ContentTypeTable::default();
        table.merge(
            self.content_types
                .iter()
                .map(|(code, extensions)| (code.as_str(), extensions.iter().map(String::as_str))),
        );
        table
    }

    pub fn source_language<'r>(&self, registry: &'r LanguageRegistry) -> Result<&'r Language> {
        let code = self
            .project
            .source_language
            .as_deref()
            .ok_or_else(|| QordobaError::ConfigInvalid {
                reason: "no source_language in [project]".into(),
            })?;
        registry.get_language(code)
    }

    /// Every project language except the source language.
    pub fn destination_languages<'r>(&self, registry: &'r LanguageRegistry) -> Result<Vec<&'r Language>> {
        let source = self.source_language(registry)?;
        Ok(registry
            .languages()
            .iter()
            .filter(|language| language.code != source.code)
            .collect())
    }
}
