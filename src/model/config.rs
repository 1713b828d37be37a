use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::task::StatusKind;

/// Directory used when nothing is configured
pub const DEFAULT_DIRECTORY: &str = "~/.tasks";

/// Status substituted for tasks whose front matter has none
pub const DEFAULT_STATUS: &str = "todo";

/// Configuration from config.toml
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub taskmanager: TaskManagerConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TaskManagerConfig {
    /// Single directory (older config files)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
    /// Directories containing task markdown files
    #[serde(default)]
    pub directories: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Status assumed when a task has none
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_status: Option<String>,
    /// Indicator shown next to each status, e.g. `done = "[x]"`
    #[serde(default)]
    pub status_indicators: HashMap<String, String>,
    /// Hex color overrides for the theme, e.g. `highlight = "#FB4196"`
    #[serde(default, skip_serializing_if = "HashMap::is_empty")]
    pub colors: HashMap<String, String>,
}

impl Config {
    /// The configuration written when no config file exists yet
    pub fn initial() -> Self {
        let status_indicators = [("todo", "[ ]"), ("in-progress", "[~]"), ("done", "[✓]")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config {
            taskmanager: TaskManagerConfig {
                directory: None,
                directories: vec![DEFAULT_DIRECTORY.to_string()],
            },
            display: DisplayConfig {
                default_status: Some(DEFAULT_STATUS.to_string()),
                status_indicators,
                colors: HashMap::new(),
            },
        }
    }
}

impl TaskManagerConfig {
    /// All configured directories. `directories` wins over the legacy
    /// `directory` key; with neither set, the default directory is used.
    pub fn directories(&self) -> Vec<String> {
        if !self.directories.is_empty() {
            return self.directories.clone();
        }
        match self.directory.as_deref() {
            Some(dir) if !dir.is_empty() => vec![dir.to_string()],
            _ => vec![DEFAULT_DIRECTORY.to_string()],
        }
    }
}

impl DisplayConfig {
    /// The configured default status, or `todo`
    pub fn default_status(&self) -> &str {
        match self.default_status.as_deref() {
            Some(s) if !s.is_empty() => s,
            _ => DEFAULT_STATUS,
        }
    }

    /// Resolve a task's status, substituting the default when absent or blank
    pub fn effective_status<'a>(&'a self, status: Option<&'a str>) -> &'a str {
        match status {
            Some(s) if !s.is_empty() => s,
            _ => self.default_status(),
        }
    }

    /// Indicator for a status: the configured one if present, else the built-in
    pub fn status_indicator(&self, status: &str) -> &str {
        if let Some(indicator) = self.status_indicators.get(status) {
            return indicator;
        }
        default_status_indicator(status)
    }
}

/// Built-in indicator for a status
pub fn default_status_indicator(status: &str) -> &'static str {
    match StatusKind::parse(status) {
        StatusKind::Done => "[✓]",
        StatusKind::InProgress => "[~]",
        StatusKind::Todo => "[ ]",
        StatusKind::Other => "   ",
    }
}
