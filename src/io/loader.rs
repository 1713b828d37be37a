use std::fs;
use std::path::PathBuf;

use chrono::{DateTime, Local};

use crate::io::paths::expand_home;
use crate::model::TaskRecord;
use crate::parse::read_metadata;

/// Extension of files treated as task documents
pub const TASK_EXTENSION: &str = "md";

/// Error type for loading a task directory
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("couldn't get home directory to expand {dir}")]
    NoHome { dir: String },
    #[error("couldn't read directory {dir}: {source}")]
    ReadDir {
        dir: String,
        source: std::io::Error,
    },
}

impl LoadError {
    /// The directory as configured
    pub fn dir(&self) -> &str {
        match self {
            LoadError::NoHome { dir } | LoadError::ReadDir { dir, .. } => dir,
        }
    }
}

/// Load every task document directly inside `dir` (not recursive).
///
/// `dir` may start with `~/`. Files without front matter get empty
/// metadata; entries whose attributes can't be read are skipped.
pub fn load_directory(dir: &str) -> Result<Vec<TaskRecord>, LoadError> {
    let expanded = expand_home(dir).ok_or_else(|| LoadError::NoHome {
        dir: dir.to_string(),
    })?;
    let entries = fs::read_dir(&expanded).map_err(|e| LoadError::ReadDir {
        dir: dir.to_string(),
        source: e,
    })?;
    let base = absolute(expanded);

    let mut tasks = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(e) => e,
            Err(e) => {
                tracing::debug!(dir, error = %e, "skipping unreadable entry");
                continue;
            }
        };
        let file_name = entry.file_name();
        let name = match file_name.to_str() {
            Some(n) => n.to_string(),
            None => continue,
        };
        let path = base.join(&name);
        if path.extension().and_then(|e| e.to_str()) != Some(TASK_EXTENSION) {
            continue;
        }

        // Follows symlinks, so a linked task file is loaded like any other
        let modified = match fs::metadata(&path).and_then(|m| {
            if m.is_dir() {
                Err(std::io::Error::other("is a directory"))
            } else {
                m.modified()
            }
        }) {
            Ok(t) => DateTime::<Local>::from(t),
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "skipping entry");
                continue;
            }
        };

        let metadata = read_metadata(&path);
        tasks.push(TaskRecord {
            name,
            path,
            source_dir: dir.to_string(),
            modified,
            metadata,
        });
    }

    tracing::debug!(dir, count = tasks.len(), "loaded directory");
    Ok(tasks)
}

fn absolute(path: PathBuf) -> PathBuf {
    if path.is_absolute() {
        return path;
    }
    std::env::current_dir()
        .map(|cwd| cwd.join(&path))
        .unwrap_or(path)
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::fs;
    use std::path::{Path, PathBuf};
    use std::time::{Duration, SystemTime};

    /// Write a file and pin its modification time to `secs` after the epoch
    pub fn write_task(dir: &Path, name: &str, content: &str, secs: u64) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        let file = fs::File::options().write(true).open(&path).unwrap();
        file.set_modified(SystemTime::UNIX_EPOCH + Duration::from_secs(secs))
            .unwrap();
        path
    }
}
