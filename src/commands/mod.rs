pub mod check;
pub mod ls;
pub mod targets;

use std::path::{Path, PathBuf};

use qordoba::config::{load_config, Config, CONFIG_FILE_NAME};
use qordoba::QordobaError;

/// The project directory and its config. The project directory is the one holding
/// the config file.
pub fn load_project(config: Option<PathBuf>) -> Result<(PathBuf, Config), QordobaError> {
    let path = match config {
        Some(path) => path,
        None => std::env::current_dir()
            .map_err(|e| QordobaError::Io {
                context: "getting current directory".into(),
                source: e,
            })?
            .join(CONFIG_FILE_NAME),
    };

    let config = load_config(&path)?;
    let curdir = if path.is_dir() {
        path
    } else {
        path.parent()
            .filter(|parent| !parent.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."))
    };

    Ok((curdir, config))
}
