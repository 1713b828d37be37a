use crate::model::TaskRecord;

/// Which field of a task matched a query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchField {
    Name,
    Title,
    Status,
    Tag,
}

/// First field of `task` containing `needle`, checked in the order
/// name, title, status, tags. `needle` must already be lowercase.
fn first_match(task: &TaskRecord, needle: &str) -> Option<MatchField> {
    let contains = |s: &str| s.to_lowercase().contains(needle);

    if contains(&task.name) {
        return Some(MatchField::Name);
    }
    if task.metadata.title.as_deref().is_some_and(contains) {
        return Some(MatchField::Title);
    }
    if task.metadata.status.as_deref().is_some_and(contains) {
        return Some(MatchField::Status);
    }
    if task.metadata.tags.iter().any(|t| contains(t)) {
        return Some(MatchField::Tag);
    }
    None
}

/// Which field of `task` matches `query` (case-insensitive substring).
/// An empty query matches nothing here; see [`matching_indices`].
pub fn task_match(task: &TaskRecord, query: &str) -> Option<MatchField> {
    if query.is_empty() {
        return None;
    }
    first_match(task, &query.to_lowercase())
}

/// Indices of the tasks visible for `query`, in their original order.
///
/// An empty query keeps every task.
pub fn matching_indices(tasks: &[TaskRecord], query: &str) -> Vec<usize> {
    if query.is_empty() {
        return (0..tasks.len()).collect();
    }
    let needle = query.to_lowercase();
    tasks
        .iter()
        .enumerate()
        .filter(|(_, t)| first_match(t, &needle).is_some())
        .map(|(i, _)| i)
        .collect()
}

/// The tasks visible for `query`
pub fn filter_tasks(tasks: &[TaskRecord], query: &str) -> Vec<TaskRecord> {
    matching_indices(tasks, query)
        .into_iter()
        .map(|i| tasks[i].clone())
        .collect()
}
