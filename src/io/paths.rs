use std::path::PathBuf;

/// Get the user's home directory
pub fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .filter(|h| !h.is_empty())
        .map(PathBuf::from)
}

/// Expand a leading `~/` (or a bare `~`) to the home directory.
/// Returns `None` only when expansion is needed and `HOME` is unset.
pub fn expand_home(path: &str) -> Option<PathBuf> {
    expand_home_with(path, home_dir)
}

fn expand_home_with(path: &str, home: impl FnOnce() -> Option<PathBuf>) -> Option<PathBuf> {
    if path == "~" {
        return home();
    }
    match path.strip_prefix("~/") {
        Some(rest) => home().map(|h| h.join(rest)),
        None => Some(PathBuf::from(path)),
    }
}
