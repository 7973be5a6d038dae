use std::fmt;
use std::str::FromStr;

use crate::error::{QordobaError, Result};
use crate::sources::TranslationFile;

/// What to do when a pulled file already exists locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConflictAction {
    Skip,
    Replace,
    NewName,
}

impl FromStr for ConflictAction {
    type Err = QordobaError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "skip" => Ok(ConflictAction::Skip),
            "replace" => Ok(ConflictAction::Replace),
            "set_new" => Ok(ConflictAction::NewName),
            other => Err(QordobaError::ConfigInvalid {
                reason: format!("unknown update action '{other}', expected skip, replace or set_new"),
            }),
        }
    }
}

impl fmt::Display for ConflictAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConflictAction::Skip => "Skip",
            ConflictAction::Replace => "Replace",
            ConflictAction::NewName => "Set new filename",
        })
    }
}

/// Questions push and pull may need to ask the user.
pub trait Prompter {
    /// A version tag for `file_name` that is not among `existing`.
    fn version_tag(&self, file_name: &str, existing: &[String]) -> Result<String>;

    fn conflict_action(&self, destination: &TranslationFile) -> Result<ConflictAction>;

    /// A replacement file name for an existing destination.
    fn new_file_name(&self, destination: &TranslationFile) -> Result<String>;
}
