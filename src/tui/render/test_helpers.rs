use std::path::PathBuf;

use chrono::{Local, TimeZone};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::{Config, Metadata, TaskRecord};
use crate::tui::app::App;

pub const TERM_W: u16 = 100;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A task in `/tasks/<dir>` modified at 2025-05-14 09:30 local time plus `minutes`.
pub fn task(name: &str, dir: &str, minutes: u32, meta: Metadata) -> TaskRecord {
    TaskRecord {
        name: name.to_string(),
        path: PathBuf::from(format!("/tasks/{dir}/{name}")),
        source_dir: dir.to_string(),
        modified: Local
            .with_ymd_and_hms(2025, 5, 14, 9, 30 + minutes, 0)
            .unwrap(),
        metadata: meta,
    }
}

/// Metadata with a title, status and priority.
pub fn meta(title: &str, status: &str, priority: &str) -> Metadata {
    Metadata {
        title: Some(title.to_string()),
        status: Some(status.to_string()),
        priority: Some(priority.to_string()),
        ..Default::default()
    }
}

/// An app over `dirs` holding `tasks` as already loaded.
pub fn app_with_tasks(dirs: &[&str], tasks: Vec<TaskRecord>) -> App {
    let dirs = dirs.iter().map(|d| d.to_string()).collect();
    let mut app = App::new(Config::initial(), dirs);
    app.tasks = tasks;
    app
}
