use crate::io::loader::{LoadError, load_directory};
use crate::model::TaskRecord;

/// Tasks merged from every readable directory
#[derive(Debug, Clone, Default)]
pub struct Aggregate {
    /// Newest first
    pub tasks: Vec<TaskRecord>,
    /// One entry per directory that couldn't be read
    pub warnings: Vec<String>,
}

/// Error type for aggregation
#[derive(Debug, thiserror::Error)]
pub enum AggregateError {
    #[error("no task directories configured")]
    NoDirectories,
    #[error("couldn't read any directories: {first}")]
    AllFailed {
        first: LoadError,
        /// How many directories were tried
        count: usize,
    },
}

/// Load every directory and merge the results, newest first.
///
/// A directory that fails to load becomes a warning as long as at least one
/// other directory loads. Only when every directory fails is the whole
/// operation an error, carrying the first failure.
pub fn load_all<S: AsRef<str>>(dirs: &[S]) -> Result<Aggregate, AggregateError> {
    if dirs.is_empty() {
        return Err(AggregateError::NoDirectories);
    }

    let mut tasks = Vec::new();
    let mut failures: Vec<LoadError> = Vec::new();
    let mut loaded_any = false;

    for dir in dirs {
        match load_directory(dir.as_ref()) {
            Ok(found) => {
                loaded_any = true;
                tasks.extend(found);
            }
            Err(e) => {
                tracing::warn!(dir = dir.as_ref(), error = %e, "directory could not be read");
                failures.push(e);
            }
        }
    }

    if !loaded_any {
        let count = failures.len();
        let first = failures.remove(0);
        return Err(AggregateError::AllFailed { first, count });
    }

    sort_newest_first(&mut tasks);
    let warnings = failures
        .iter()
        .map(|e| format!("{}: {}", e.dir(), e))
        .collect();

    Ok(Aggregate { tasks, warnings })
}

/// Stable sort on modification time only, newest first
pub fn sort_newest_first(tasks: &mut [TaskRecord]) {
    tasks.sort_by(|a, b| b.modified.cmp(&a.modified));
}
