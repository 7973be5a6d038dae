pub mod schema;
pub mod user;

use std::path::Path;

use crate::error::{QordobaError, Result};

pub use schema::{Config, ProjectConfig, PullConfig, PushConfig};
pub use user::{load_user_config, UserConfig};

pub const CONFIG_FILE_NAME: &str = ".qordoba.toml";
pub const ACCESS_TOKEN_ENV: &str = "QORDOBA_ACCESS_TOKEN";

/// Load and validate a project config. `path` may be the file or its directory.
pub fn load_config(path: &Path) -> Result<Config> {
    let config_path = if path.is_dir() {
        path.join(CONFIG_FILE_NAME)
    } else {
        path.to_path_buf()
    };

    if !config_path.exists() {
        return Err(QordobaError::ConfigNotFound { path: config_path });
    }

    let content = std::fs::read_to_string(&config_path).map_err(|e| QordobaError::Io {
        context: format!("reading {}", config_path.display()),
        source: e,
    })?;

    let config: Config = toml::from_str(&content).map_err(|e| QordobaError::ConfigParse {
        path: config_path.clone(),
        source: e,
    })?;

    config.validate()?;

    Ok(config)
}

/// Access token from the environment, the project config, then the user config.
pub fn access_token(config: &Config) -> Result<Option<String>> {
    if let Ok(token) = std::env::var(ACCESS_TOKEN_ENV) {
        if !token.is_empty() {
            return Ok(Some(token));
        }
    }
    if let Some(token) = &config.project.access_token {
        return Ok(Some(token.clone()));
    }
    Ok(load_user_config()?.and_then(|user| user.access_token))
}
