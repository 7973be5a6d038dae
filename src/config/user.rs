use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{QordobaError, Result};

/// User-level configuration loaded from `~/.config/qordoba/config.toml`.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UserConfig {
    /// Used when the project config carries no token.
    pub access_token: Option<String>,
}

fn config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|d| d.join("qordoba").join("config.toml"))
}

/// Returns `Ok(None)` if the config file does not exist.
pub fn load_user_config() -> Result<Option<UserConfig>> {
    let path = match config_path() {
        Some(p) => p,
        None => return Ok(None),
    };

    if !path.exists() {
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path).map_err(|e| QordobaError::Io {
        context: format!("reading user config {}", path.display()),
        source: e,
    })?;

    let config: UserConfig =
        toml::from_str(&content).map_err(|e| QordobaError::ConfigParse { path, source: e })?;

    Ok(Some(config))
}
