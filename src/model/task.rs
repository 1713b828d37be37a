use std::fmt;
use std::path::PathBuf;

use chrono::{DateTime, FixedOffset, Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Broad classification of a free-form status string
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Todo,
    InProgress,
    Done,
    Other,
}

impl StatusKind {
    /// Classify a status, case-insensitively. `doing` and `completed` are
    /// synonyms for `in-progress` and `done`.
    pub fn parse(status: &str) -> StatusKind {
        match status.trim().to_lowercase().as_str() {
            "todo" => StatusKind::Todo,
            "in-progress" | "doing" => StatusKind::InProgress,
            "done" | "completed" => StatusKind::Done,
            _ => StatusKind::Other,
        }
    }
}

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn parse(s: &str) -> Option<Priority> {
        match s.trim().to_lowercase().as_str() {
            "low" => Some(Priority::Low),
            "medium" => Some(Priority::Medium),
            "high" => Some(Priority::High),
            _ => None,
        }
    }

    /// Fixed-width label for list columns
    pub fn label(self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "med ",
            Priority::Low => "low ",
        }
    }
}

/// A date from front matter. Unrecognised formats are kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskDate {
    /// RFC 3339, e.g. `2025-05-14T09:30:00+02:00`
    Timestamp(DateTime<FixedOffset>),
    /// `2025-05-14 09:30` or `2025-05-14 09:30:00`
    Local(NaiveDateTime),
    /// `2025-05-14`
    Day(NaiveDate),
    Unparsed(String),
}

impl TaskDate {
    pub fn parse(s: &str) -> TaskDate {
        let s = s.trim();
        if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
            return TaskDate::Timestamp(ts);
        }
        for fmt in ["%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M", "%Y-%m-%dT%H:%M:%S"] {
            if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
                return TaskDate::Local(dt);
            }
        }
        if let Ok(day) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return TaskDate::Day(day);
        }
        TaskDate::Unparsed(s.to_string())
    }

    /// The calendar day, when the value could be parsed
    pub fn day(&self) -> Option<NaiveDate> {
        match self {
            TaskDate::Timestamp(ts) => Some(ts.date_naive()),
            TaskDate::Local(dt) => Some(dt.date()),
            TaskDate::Day(day) => Some(*day),
            TaskDate::Unparsed(_) => None,
        }
    }
}

impl fmt::Display for TaskDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TaskDate::Timestamp(ts) => write!(f, "{}", ts.to_rfc3339()),
            TaskDate::Local(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M:%S")),
            TaskDate::Day(day) => write!(f, "{}", day.format("%Y-%m-%d")),
            TaskDate::Unparsed(raw) => f.write_str(raw),
        }
    }
}

impl Serialize for TaskDate {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for TaskDate {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(TaskDate::parse(&raw))
    }
}

/// Front matter fields of a task document. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// Free-form; see [`StatusKind`] for the recognised values
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<TaskDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<TaskDate>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

impl Metadata {
    pub fn priority(&self) -> Option<Priority> {
        self.priority.as_deref().and_then(Priority::parse)
    }
}

/// One task document found in a configured directory
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TaskRecord {
    /// File name, e.g. `task-20250514-093000.md`
    pub name: String,
    /// Absolute path to the file
    pub path: PathBuf,
    /// The directory as configured (before `~` expansion)
    pub source_dir: String,
    pub modified: DateTime<Local>,
    pub metadata: Metadata,
}

impl TaskRecord {
    /// Title from front matter, falling back to the file name
    pub fn display_name(&self) -> &str {
        match self.metadata.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => &self.name,
        }
    }
}
