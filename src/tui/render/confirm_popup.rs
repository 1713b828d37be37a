use std::path::Path;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;

use super::centered_rect;

/// Render the delete confirmation popup over the detail view
pub fn render_confirm_popup(frame: &mut Frame, app: &App, path: &Path, area: Rect) {
    let popup = centered_rect(70, 60, area);
    frame.render_widget(Clear, popup);

    let bg = app.theme.background;
    let text = Style::default().fg(app.theme.text).bg(bg);
    let bright = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines = vec![
        Line::from(Span::styled(
            " Are you sure you want to delete this task?",
            bright,
        )),
        Line::from(""),
    ];
    match app.task_by_path(path) {
        Some(task) => {
            lines.push(Line::from(Span::styled(format!(" File: {}", task.name), text)));
            if let Some(title) = task.metadata.title.as_deref().filter(|t| !t.is_empty()) {
                lines.push(Line::from(Span::styled(format!(" Title: {}", title), text)));
            }
        }
        None => {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            lines.push(Line::from(Span::styled(format!(" File: {}", name), text)));
        }
    }
    lines.push(Line::from(Span::styled(
        format!(" Path: {}", path.display()),
        text,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " This action cannot be undone!",
        Style::default()
            .fg(app.theme.red)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " y: yes, delete \u{2022} esc/n: cancel",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .title(" Delete Task ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.red).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);
}
