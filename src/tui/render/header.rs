use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};

/// Render the title row with a separator line below
pub fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // title
            Constraint::Length(1), // separator
        ])
        .split(area);

    let bg = app.theme.background;
    let bg_style = Style::default().bg(bg);
    let title_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![
        Span::styled(" ", bg_style),
        Span::styled(
            "\u{25B6}",
            Style::default().fg(app.theme.purple).bg(bg),
        ),
        Span::styled(" ", bg_style),
    ];

    match &app.mode {
        Mode::Search { query, .. } if query.is_empty() => {
            spans.push(Span::styled("Search (type to filter)", title_style));
        }
        Mode::Search { query, .. } => {
            spans.push(Span::styled("Search: ", title_style));
            spans.push(Span::styled(
                query.clone(),
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
        }
        Mode::TaskDetail { path, .. } => {
            spans.push(Span::styled(task_title(app, path), title_style));
        }
        Mode::ConfirmDelete { .. } => {
            spans.push(Span::styled("Delete Task", title_style));
        }
        Mode::List | Mode::Help => {
            spans.push(Span::styled(list_title(&app.dirs), title_style));
        }
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).style(bg_style), chunks[0]);

    let sep = "\u{2500}".repeat(chunks[1].width as usize);
    frame.render_widget(
        Paragraph::new(Span::styled(sep, Style::default().fg(app.theme.dim).bg(bg))),
        chunks[1],
    );
}

fn list_title(dirs: &[String]) -> String {
    match dirs {
        [one] => format!("Task Manager - {}", one),
        many => format!("Task Manager - {} directories", many.len()),
    }
}

fn task_title(app: &App, path: &std::path::Path) -> String {
    match app.task_by_path(path) {
        Some(task) => task.display_name().to_string(),
        None => path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default(),
    }
}
