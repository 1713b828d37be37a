use std::fs;
use std::path::{Path, PathBuf};

use crate::io::paths::home_dir;
use crate::model::Config;

/// Directory name under the user config directory
pub const APP_DIR: &str = "mdtask";

/// Error type for config file operations
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("couldn't get home directory")]
    NoHome,
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("failed to serialize config: {0}")]
    SerializeError(#[from] toml::ser::Error),
}

/// The application's config directory, respecting XDG_CONFIG_HOME
pub fn config_dir() -> Result<PathBuf, ConfigError> {
    let base = match std::env::var_os("XDG_CONFIG_HOME").filter(|v| !v.is_empty()) {
        Some(dir) => PathBuf::from(dir),
        None => home_dir().ok_or(ConfigError::NoHome)?.join(".config"),
    };
    Ok(base.join(APP_DIR))
}

/// Default config file path
pub fn config_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()?.join("config.toml"))
}

/// Load the config at `path`. A missing file is created with
/// [`Config::initial`] and that configuration is returned.
pub fn load_config(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        let cfg = Config::initial();
        save_config(path, &cfg)?;
        tracing::info!(path = %path.display(), "created default config");
        return Ok(cfg);
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(toml::from_str(&text)?)
}

/// Load the config from `path`, or from [`config_path`] when none is given.
/// Returns the config together with the path it came from.
pub fn resolve_config(path: Option<&Path>) -> Result<(Config, PathBuf), ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_path()?,
    };
    let cfg = load_config(&path)?;
    Ok((cfg, path))
}

/// Write the config to `path`, creating parent directories
pub fn save_config(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }
    let text = toml::to_string_pretty(cfg)?;
    fs::write(path, text).map_err(|e| ConfigError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })
}
