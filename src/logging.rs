use std::path::{Path, PathBuf};

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::io::config_io;

/// Environment variable holding the log filter, e.g. `MDTASK_LOG=debug`
pub const LOG_ENV: &str = "MDTASK_LOG";

/// Log file name inside the log directory
pub const LOG_FILE: &str = "mdtask.log";

/// Directory for the log file: next to an explicit config file,
/// otherwise the default config directory.
pub fn log_dir(config_path: Option<&Path>) -> Option<PathBuf> {
    match config_path {
        Some(path) => path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .or_else(|| Some(PathBuf::from("."))),
        None => config_io::config_dir().ok(),
    }
}

/// Send tracing output to `<dir>/mdtask.log`. The terminal belongs to the
/// TUI, so nothing is written to stdout or stderr.
///
/// The returned guard flushes the writer when dropped; keep it alive for
/// the life of the process.
pub fn init_logging(dir: &Path) -> Result<WorkerGuard, String> {
    std::fs::create_dir_all(dir).map_err(|e| e.to_string())?;
    let file_appender = tracing_appender::rolling::never(dir, LOG_FILE);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_ansi(false)
        .with_writer(non_blocking)
        .try_init()
        .map_err(|e| e.to_string())?;

    Ok(guard)
}
