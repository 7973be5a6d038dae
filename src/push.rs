use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use crate::api::ProjectApi;
use crate::config::Config;
use crate::error::{QordobaError, Result};
use crate::languages::{Language, LanguageRegistry};
use crate::prompt::Prompter;
use crate::sources::{discover_files, ContentTypeTable, TranslationFile};

#[derive(Debug, Default)]
pub struct PushOptions {
    /// Record files with an unknown format as skipped instead of failing.
    pub skip_unsupported: bool,
}

/// A local file ready to be uploaded.
#[derive(Debug, Clone)]
pub struct PushItem {
    pub file: TranslationFile,
    pub content_type: String,
    pub unique_name: String,
}

#[derive(Debug, Default)]
pub struct PushPlan {
    pub items: Vec<PushItem>,
    pub skipped: Vec<(TranslationFile, QordobaError)>,
}

#[derive(Debug, Default)]
pub struct PushReport {
    pub uploaded: Vec<String>,
    pub updated: Vec<String>,
}

/// Collect the files to push, without talking to the project.
///
/// Explicit `files` are pushed as source language files; otherwise the configured
/// push pattern is used to discover them.
pub fn plan_push(
    curdir: &Path,
    config: &Config,
    registry: &LanguageRegistry,
    table: &ContentTypeTable,
    files: &[PathBuf],
    options: &PushOptions,
) -> Result<PushPlan> {
    let candidates: Vec<TranslationFile> = if files.is_empty() {
        let pattern = config.push_pattern()?;
        let found: Vec<_> = discover_files(curdir, &pattern, registry)?.collect();
        if found.is_empty() {
            return Err(QordobaError::FilesNotFound {
                pattern: pattern.as_str().to_string(),
            });
        }
        found
    } else {
        let source = config.source_language(registry)?;
        files
            .iter()
            .map(|path| {
                let relative = path.strip_prefix(curdir).unwrap_or(path);
                TranslationFile::new(relative, source.clone(), curdir)
            })
            .collect()
    };

    let mut plan = PushPlan::default();
    for file in candidates {
        match table.resolve(&file) {
            Ok(content_type) => {
                let content_type = content_type.to_string();
                plan.items.push(PushItem {
                    unique_name: file.unique_name(),
                    content_type,
                    file,
                });
            }
            Err(err) if options.skip_unsupported => {
                warn!("Skipping {}: {err}", file.posix_path());
                plan.skipped.push((file, err));
            }
            Err(err) => return Err(err),
        }
    }

    Ok(plan)
}

/// Upload planned files. Files already in the project are updated in place when
/// `update` is set, otherwise uploaded again under a new version tag.
pub fn execute_push(
    api: &dyn ProjectApi,
    plan: &PushPlan,
    target_language: &Language,
    prompter: &dyn Prompter,
    update: bool,
) -> Result<PushReport> {
    let mut report = PushReport::default();

    for item in &plan.items {
        let content = read_file(&item.file)?;
        let remote = api.find_page(target_language.id, &item.unique_name)?;

        match remote {
            Some(page) if update => {
                info!("Updating {} with ID({})", item.unique_name, page.page_id);
                api.update(&page, &item.unique_name, &content)?;
                info!("Updated {} successfully.", item.unique_name);
                report.updated.push(item.unique_name.clone());
            }
            _ => {
                info!("Uploading {}", item.file.posix_path());
                let receipt = api.upload(&item.unique_name, &item.content_type, &content)?;
                debug!(
                    "File `{}` uploaded. Name - `{}`. Adding to the project...",
                    item.file.posix_path(),
                    item.unique_name
                );

                let version_tag = if receipt.version_tags.is_empty() {
                    None
                } else {
                    Some(select_version_tag(prompter, &item.unique_name, &receipt.version_tags)?)
                };

                api.append(&receipt.upload_id, &item.unique_name, version_tag.as_deref())?;
                info!(
                    "Uploaded {} successfully as {}",
                    item.file.posix_path(),
                    item.unique_name
                );
                report.uploaded.push(item.unique_name.clone());
            }
        }
    }

    Ok(report)
}

fn select_version_tag(prompter: &dyn Prompter, file_name: &str, existing: &[String]) -> Result<String> {
    info!(
        "File `{file_name}` already exist with tags {}. Please setup new version tag:",
        existing.join(", ")
    );
    loop {
        let tag = prompter.version_tag(file_name, existing)?;
        if !existing.contains(&tag) {
            return Ok(tag);
        }
    }
}

fn read_file(file: &TranslationFile) -> Result<Vec<u8>> {
    let path = file.full_path();
    std::fs::read(&path).map_err(|e| QordobaError::Io {
        context: format!("reading {}", path.display()),
        source: e,
    })
}
