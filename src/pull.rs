use std::collections::BTreeSet;
use std::path::Path;

use tracing::{debug, info, warn};

use crate::api::{PageStatus, ProjectApi, RemotePage};
use crate::error::{QordobaError, Result};
use crate::languages::{Language, LanguageRegistry};
use crate::pattern::{resolve_destination_path, PullPattern};
use crate::prompt::{ConflictAction, Prompter};
use crate::sources::{last_dot_extension, TranslationFile};

#[derive(Debug, Clone, Default)]
pub struct PullOptions {
    /// Overwrite existing files without asking.
    pub force: bool,
    /// Pull enabled (unfinished) translations too.
    pub in_progress: bool,
    /// Only pull pages with this version tag.
    pub version: Option<String>,
    /// Only pull pages whose tagged name matches the pattern's file name.
    pub distinct: bool,
    /// Do not filter pages by the pattern's extension.
    pub custom: bool,
    /// Answer for existing files instead of asking.
    pub update_action: Option<ConflictAction>,
}

/// A translated page and where it will be written.
#[derive(Debug, Clone)]
pub struct PullTarget {
    pub page: RemotePage,
    pub language: Language,
    pub destination: TranslationFile,
}

#[derive(Debug, Default)]
pub struct PullPlan {
    pub targets: Vec<PullTarget>,
}

#[derive(Debug, Default)]
pub struct PullReport {
    pub downloaded: Vec<TranslationFile>,
    pub skipped: Vec<TranslationFile>,
}

/// Languages to pull: the requested ones, which must all be destination languages,
/// or every destination language when none is requested.
pub fn select_languages(
    registry: &LanguageRegistry,
    requested: &[String],
    destination: &[&Language],
) -> Result<Vec<Language>> {
    if requested.is_empty() {
        return Ok(destination.iter().map(|&language| language.clone()).collect());
    }

    let mut selected = Vec::new();
    let mut not_configured = BTreeSet::new();
    for token in requested {
        let language = registry.get_language(token)?;
        if !destination.iter().any(|d| d.code == language.code) {
            not_configured.insert(language.code.clone());
        } else if !selected.contains(language) {
            selected.push(language.clone());
        }
    }

    if !not_configured.is_empty() {
        return Err(QordobaError::LanguageNotConfigured {
            languages: not_configured.into_iter().collect(),
        });
    }
    Ok(selected)
}

/// Decide which pages to download and where, per pattern and language.
pub fn plan_pull(
    api: &dyn ProjectApi,
    curdir: &Path,
    languages: &[Language],
    patterns: &[Option<PullPattern>],
    options: &PullOptions,
) -> Result<PullPlan> {
    let statuses: &[PageStatus] = if options.in_progress {
        &[PageStatus::Enabled]
    } else {
        debug!("Pull only completed translations.");
        &[PageStatus::Completed]
    };

    let mut plan = PullPlan::default();
    for pattern in patterns {
        for language in languages {
            let pages = api.pages(language.id, statuses)?;
            if pages.is_empty() {
                info!(
                    "Nothing to download for language `{}`. Check if your file translation status is `completed`.",
                    language.code
                );
                continue;
            }

            for page in pages {
                if page.version_tag != options.version {
                    continue;
                }
                if !accepts_page(pattern.as_ref(), &page, options) {
                    debug!(page = %page.display_name(), "page filtered out by pattern");
                    continue;
                }

                let destination = resolve_destination_path(
                    curdir,
                    language,
                    pattern.as_ref().map(PullPattern::as_str),
                    Some(page.name.as_str()),
                    Some(page.content_type_code.as_str()),
                )?;

                plan.targets.push(PullTarget {
                    page,
                    language: language.clone(),
                    destination,
                });
            }
        }
    }

    Ok(plan)
}

fn accepts_page(pattern: Option<&PullPattern>, page: &RemotePage, options: &PullOptions) -> bool {
    let Some(pattern) = pattern else {
        return true;
    };

    if !options.custom && !pattern.ends_with_extension() {
        let page_extension = last_dot_extension(&page.url);
        if pattern.trailing_extension() != page_extension {
            return false;
        }
    }

    if options.distinct {
        let real_name = match &page.version_tag {
            Some(tag) => format!("{tag}_{}", page.name),
            None => page.name.clone(),
        };
        if real_name != pattern.file_name() {
            return false;
        }
    }

    true
}

/// Download planned pages, resolving conflicts with existing files.
pub fn execute_pull(
    api: &dyn ProjectApi,
    plan: &PullPlan,
    options: &PullOptions,
    prompter: &dyn Prompter,
) -> Result<PullReport> {
    let mut report = PullReport::default();

    for target in &plan.targets {
        info!(
            "Starting Download of translation file(s) for src `{}`, language `{}`",
            target.page.display_name(),
            target.language.code
        );

        let mut destination = target.destination.clone();
        if destination.full_path().exists() && !options.force {
            warn!("Translation file already exists. `{}`", destination.posix_path());
            let action = match options.update_action {
                Some(action) => action,
                None => prompter.conflict_action(&destination)?,
            };
            debug!("conflict resolved with: {action}");

            match action {
                ConflictAction::Skip => {
                    info!("Download translation file `{}` was skipped.", destination.posix_path());
                    report.skipped.push(destination);
                    continue;
                }
                ConflictAction::NewName => {
                    while destination.full_path().exists() {
                        let name = prompter.new_file_name(&destination)?;
                        destination = destination.with_name(&name);
                    }
                }
                ConflictAction::Replace => {}
            }
        }

        let content = api.download(&target.page, target.language.id)?;
        write_file(&destination, &content)?;

        info!(
            "Downloaded translation file `{}` for src `{}` and language `{}`",
            destination.posix_path(),
            target.page.display_name(),
            target.language.code
        );
        report.downloaded.push(destination);
    }

    Ok(report)
}

fn write_file(file: &TranslationFile, content: &[u8]) -> Result<()> {
    let path = file.full_path();
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| QordobaError::Io {
            context: format!("creating directory {}", parent.display()),
            source: e,
        })?;
    }
    std::fs::write(&path, content).map_err(|e| QordobaError::Io {
        context: format!("writing {}", path.display()),
        source: e,
    })
}
