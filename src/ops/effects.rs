use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};

use chrono::{DateTime, Local, Timelike};

use crate::io::paths::expand_home;
use crate::model::{Metadata, TaskDate};
use crate::parse::render_document;

/// Editor used when neither `EDITOR` nor `VISUAL` is set
pub const DEFAULT_EDITOR: &str = "vim";

const NEW_TASK_TITLE: &str = "New Task";
const NEW_TASK_BODY: &str = "# New Task\n\nWrite your task description here...\n";

/// A side effect requested by the state machine and run by the event loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Open an existing task in the editor
    Edit { path: PathBuf },
    /// Create a task in the first configured directory, then edit it
    Create,
}

/// Error type for command effects
#[derive(Debug, thiserror::Error)]
pub enum EffectError {
    #[error("couldn't resolve task directory {dir}")]
    NoHome { dir: String },
    #[error("no task directory to create tasks in")]
    NoDirectory,
    #[error("failed to create task {path}: {source}")]
    Create {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to render task template: {0}")]
    Template(#[from] crate::parse::frontmatter::FrontmatterError),
    #[error("failed to delete task: {source}")]
    Delete {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to run editor {editor}: {source}")]
    Editor {
        editor: String,
        source: std::io::Error,
    },
    #[error("editor command is empty")]
    EmptyEditor,
}

/// Pick the editor command from `EDITOR`, then `VISUAL`, then the default.
pub fn resolve_editor() -> String {
    resolve_editor_with(|key| std::env::var(key).ok())
}

fn resolve_editor_with(lookup: impl Fn(&str) -> Option<String>) -> String {
    ["EDITOR", "VISUAL"]
        .into_iter()
        .filter_map(|key| lookup(key))
        .find(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_EDITOR.to_string())
}

/// Build the editor process for `path`. The editor value may carry
/// arguments (`code --wait`); it is split on whitespace.
pub fn editor_command(editor: &str, path: &Path) -> Result<Command, EffectError> {
    let mut parts = editor.split_whitespace();
    let program = parts.next().ok_or(EffectError::EmptyEditor)?;
    let mut cmd = Command::new(program);
    cmd.args(parts).arg(path);
    Ok(cmd)
}

/// Run the editor on `path` and wait for it to exit.
/// The exit status is returned but never treated as a failure.
pub fn run_editor(editor: &str, path: &Path) -> Result<ExitStatus, EffectError> {
    tracing::info!(editor, path = %path.display(), "launching editor");
    let status = editor_command(editor, path)?
        .status()
        .map_err(|e| EffectError::Editor {
            editor: editor.to_string(),
            source: e,
        })?;
    tracing::info!(?status, "editor exited");
    Ok(status)
}

/// File name for a task created at `now`
pub fn new_task_file_name(now: DateTime<Local>) -> String {
    format!("task-{}.md", now.format("%Y%m%d-%H%M%S"))
}

/// The document written for a new task
pub fn new_task_template(now: DateTime<Local>) -> Result<String, EffectError> {
    let created = now.with_nanosecond(0).unwrap_or(now).fixed_offset();
    let meta = Metadata {
        title: Some(NEW_TASK_TITLE.to_string()),
        status: Some("todo".to_string()),
        priority: Some("medium".to_string()),
        created: Some(TaskDate::Timestamp(created)),
        ..Default::default()
    };
    Ok(render_document(&meta, NEW_TASK_BODY)?)
}

/// Write a new task template into `dir` (as configured, `~/` allowed).
/// Never overwrites an existing file.
pub fn create_task_file(dir: &str, now: DateTime<Local>) -> Result<PathBuf, EffectError> {
    let expanded = expand_home(dir).ok_or_else(|| EffectError::NoHome {
        dir: dir.to_string(),
    })?;
    let path = expanded.join(new_task_file_name(now));
    let template = new_task_template(now)?;

    let mut file = fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(&path)
        .map_err(|e| EffectError::Create {
            path: path.clone(),
            source: e,
        })?;
    file.write_all(template.as_bytes())
        .map_err(|e| EffectError::Create {
            path: path.clone(),
            source: e,
        })?;

    tracing::info!(path = %path.display(), "created task");
    Ok(path)
}

/// Remove a task file
pub fn delete_task_file(path: &Path) -> Result<(), EffectError> {
    fs::remove_file(path).map_err(|e| EffectError::Delete {
        path: path.to_path_buf(),
        source: e,
    })?;
    tracing::info!(path = %path.display(), "deleted task");
    Ok(())
}
