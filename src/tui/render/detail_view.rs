use std::path::Path;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::model::{StatusKind, TaskRecord};
use crate::tui::app::App;

/// Render one task: file info, a metadata summary, then the raw document
pub fn render_detail_view(frame: &mut Frame, app: &App, path: &Path, content: &str, area: Rect) {
    let bg = app.theme.background;
    let dim = Style::default().fg(app.theme.dim).bg(bg);
    let text = Style::default().fg(app.theme.text).bg(bg);

    let mut lines: Vec<Line> = Vec::new();
    let task = app.task_by_path(path);
    if let Some(task) = task {
        lines.push(Line::from(Span::styled(format!(" File: {}", task.name), dim)));
    }
    lines.push(Line::from(Span::styled(
        format!(" Path: {}", path.display()),
        dim,
    )));
    if let Some(task) = task
        && let Some(summary) = metadata_line(app, task)
    {
        lines.push(summary);
    }
    lines.push(Line::from(""));

    lines.extend(
        content
            .lines()
            .map(|l| Line::from(Span::styled(format!(" {}", l), text))),
    );

    let paragraph = Paragraph::new(lines)
        .style(Style::default().bg(bg))
        .wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// `status · priority · due · tags`, whichever are present
fn metadata_line<'a>(app: &App, task: &TaskRecord) -> Option<Line<'a>> {
    let theme = &app.theme;
    let bg = theme.background;
    let meta = &task.metadata;
    let sep = Span::styled("  \u{00B7}  ", Style::default().fg(theme.dim).bg(bg));

    let mut parts: Vec<Span> = Vec::new();
    if let Some(status) = meta.status.as_deref().filter(|s| !s.is_empty()) {
        parts.push(Span::styled(
            status.to_string(),
            Style::default()
                .fg(theme.status_color(StatusKind::parse(status)))
                .bg(bg),
        ));
    }
    if let Some(priority) = meta.priority.as_deref().filter(|s| !s.is_empty()) {
        parts.push(Span::styled(
            format!("{} priority", priority),
            Style::default()
                .fg(theme.priority_color(meta.priority()))
                .bg(bg),
        ));
    }
    if let Some(due) = &meta.due_date {
        parts.push(Span::styled(
            format!("due {}", due),
            Style::default().fg(theme.yellow).bg(bg),
        ));
    }
    if !meta.tags.is_empty() {
        let tags: Vec<String> = meta.tags.iter().map(|t| format!("#{}", t)).collect();
        parts.push(Span::styled(
            tags.join(" "),
            Style::default().fg(theme.cyan).bg(bg),
        ));
    }
    if parts.is_empty() {
        return None;
    }

    let mut spans = vec![Span::styled(" ", Style::default().bg(bg))];
    for (i, part) in parts.into_iter().enumerate() {
        if i > 0 {
            spans.push(sep.clone());
        }
        spans.push(part);
    }
    Some(Line::from(spans))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Metadata, TaskDate};
    use crate::tui::render::test_helpers::*;

    #[test]
    fn shows_file_metadata_and_body() {
        let mut m = meta("Ship release", "in-progress", "high");
        m.tags = vec!["urgent".into(), "work".into()];
        m.due_date = Some(TaskDate::parse("2025-06-01"));
        let t = task("deploy.md", "work", 0, m);
        let path = t.path.clone();
        let app = app_with_tasks(&["~/work"], vec![t]);
        let content = "---\ntitle: Ship release\n---\n# Ship it\n\nSteps here.\n";

        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, &path, content, area);
        });
        assert!(out.contains("File: deploy.md"), "{out}");
        assert!(out.contains("Path: /tasks/work/deploy.md"), "{out}");
        assert!(
            out.contains("in-progress  ·  high priority  ·  due 2025-06-01  ·  #urgent #work"),
            "{out}"
        );
        assert!(out.contains("# Ship it"));
        assert!(out.contains("Steps here."));
    }

    #[test]
    fn bare_task_has_no_summary() {
        let t = task("notes.md", "home", 0, Metadata::default());
        let path = t.path.clone();
        let app = app_with_tasks(&["~/home"], vec![t]);
        let out = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_detail_view(frame, &app, &path, "just text\n", area);
        });
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines[2], "");
        assert_eq!(lines[3], " just text");
    }
}
