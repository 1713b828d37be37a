use serde::Serialize;

use crate::model::{DisplayConfig, TaskDate, TaskRecord};
use crate::util::unicode::fit_to_width;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub name: String,
    pub path: String,
    pub source_dir: String,
    /// RFC 3339
    pub modified: String,
    /// Front matter status, or the configured default
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<TaskDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<TaskDate>,
    pub tags: Vec<String>,
}

pub fn task_to_json(task: &TaskRecord, display: &DisplayConfig) -> TaskJson {
    let meta = &task.metadata;
    TaskJson {
        name: task.name.clone(),
        path: task.path.display().to_string(),
        source_dir: task.source_dir.clone(),
        modified: task.modified.to_rfc3339(),
        status: display.effective_status(meta.status.as_deref()).to_string(),
        title: meta.title.clone(),
        priority: meta.priority.clone(),
        due_date: meta.due_date.clone(),
        created: meta.created.clone(),
        tags: meta.tags.clone(),
    }
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Width of the title column
const TITLE_WIDTH: usize = 40;

/// Format a task as one line: indicator, priority, title, modified time,
/// and the source directory when `show_dir` is set.
pub fn format_task_line(task: &TaskRecord, display: &DisplayConfig, show_dir: bool) -> String {
    let status = display.effective_status(task.metadata.status.as_deref());
    let priority = task
        .metadata
        .priority()
        .map(|p| p.label())
        .unwrap_or("    ");
    let mut line = format!(
        "{} {} {}  {}",
        display.status_indicator(status),
        priority,
        fit_to_width(task.display_name(), TITLE_WIDTH),
        task.modified.format("%Y-%m-%d %H:%M"),
    );
    if show_dir {
        line.push_str(&format!("  [{}]", task.source_dir));
    }
    line
}
