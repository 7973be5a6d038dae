use std::collections::HashSet;
use std::path::{Path, PathBuf};

use tracing::debug;
use walkdir::WalkDir;

use super::TranslationFile;
use crate::error::{QordobaError, Result};
use crate::languages::LanguageRegistry;
use crate::pattern::PushPattern;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PathStyle {
    Absolute,
    #[default]
    Relative,
}

/// Lazy walk over the regular files of a project.
///
/// Symlinks are followed, and a directory reachable through more than one path is
/// only descended into once.
pub struct ProjectFiles {
    root: PathBuf,
    walker: walkdir::IntoIter,
    visited: HashSet<PathBuf>,
    style: PathStyle,
}

/// Start walking `root`. Fails only when `root` itself cannot be resolved.
pub fn files_in_project(root: &Path, style: PathStyle) -> Result<ProjectFiles> {
    let root = std::fs::canonicalize(root).map_err(|e| QordobaError::Io {
        context: format!("resolving project directory {}", root.display()),
        source: e,
    })?;

    let walker = WalkDir::new(&root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter();

    Ok(ProjectFiles {
        root,
        walker,
        visited: HashSet::new(),
        style,
    })
}

impl ProjectFiles {
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl Iterator for ProjectFiles {
    type Item = PathBuf;

    fn next(&mut self) -> Option<PathBuf> {
        loop {
            let entry = match self.walker.next()? {
                Ok(entry) => entry,
                // Vanished entries, broken links and loops count as absent.
                Err(err) => {
                    debug!("skipping unreadable entry: {err}");
                    continue;
                }
            };

            if entry.file_type().is_dir() {
                let seen = match std::fs::canonicalize(entry.path()) {
                    Ok(real) => !self.visited.insert(real),
                    Err(_) => true,
                };
                if seen {
                    debug!(path = %entry.path().display(), "directory already visited");
                    self.walker.skip_current_dir();
                }
                continue;
            }

            if !entry.file_type().is_file() {
                continue;
            }

            let path = match self.style {
                PathStyle::Absolute => entry.into_path(),
                PathStyle::Relative => match entry.path().strip_prefix(&self.root) {
                    Ok(relative) => relative.to_path_buf(),
                    Err(_) => continue,
                },
            };
            return Some(path);
        }
    }
}

/// Files under `root` matching a push pattern whose language is known.
pub fn discover_files<'a>(
    root: &Path,
    pattern: &'a PushPattern,
    registry: &'a LanguageRegistry,
) -> Result<impl Iterator<Item = TranslationFile> + 'a> {
    let files = files_in_project(root, PathStyle::Relative)?;
    let root = files.root().to_path_buf();

    Ok(files.filter_map(move |relative| pattern.match_file(&root, &relative, registry)))
}
