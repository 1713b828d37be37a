use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::util::unicode::{display_width, truncate_to_width};

/// Render the status row (bottom of screen)
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans: Vec<Span> = Vec::new();
    let hint = match &app.mode {
        Mode::Search { query, .. } => {
            // Search prompt: /pattern▌
            spans.push(Span::styled(
                format!("/{}", query),
                Style::default().fg(app.theme.text_bright).bg(bg),
            ));
            spans.push(Span::styled(
                "\u{258C}",
                Style::default().fg(app.theme.highlight).bg(bg),
            ));
            spans.push(Span::styled(
                format!("  {}", summary(app)),
                Style::default().fg(app.theme.dim).bg(bg),
            ));
            "Enter view  Esc cancel"
        }
        mode => {
            let (message, color) = if let Some(err) = &app.last_error {
                (err.clone(), app.theme.red)
            } else if !app.warnings.is_empty() {
                (warning_text(&app.warnings), app.theme.yellow)
            } else {
                (summary(app), app.theme.dim)
            };
            spans.push(Span::styled(
                format!(" {}", message),
                Style::default().fg(color).bg(bg),
            ));
            match mode {
                Mode::TaskDetail { .. } => "Esc back  e edit  d delete  q quit",
                Mode::ConfirmDelete { .. } => "y delete  n cancel",
                Mode::Help => "Esc close",
                _ => "/ search  n new  ? help  q quit",
            }
        }
    };

    // Right-align the hint when it fits; the message gets truncated first
    let hint_width = display_width(hint);
    let content_width: usize = spans.iter().map(|s| display_width(&s.content)).sum();
    if content_width + hint_width + 1 < width {
        let padding = width - content_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    } else if let Some(last) = spans.last_mut() {
        let room = width.saturating_sub(content_width - display_width(&last.content));
        last.content = truncate_to_width(&last.content, room).into();
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

/// "Showing N tasks from M directories", or "N of M" while searching
fn summary(app: &App) -> String {
    match &app.mode {
        Mode::Search { matches, .. } => {
            format!("Showing {} of {} tasks", matches.len(), app.tasks.len())
        }
        _ if app.dirs.len() > 1 => format!(
            "Showing {} tasks from {} directories",
            app.tasks.len(),
            app.dirs.len()
        ),
        _ => format!("Showing {} tasks", app.tasks.len()),
    }
}

fn warning_text(warnings: &[String]) -> String {
    match warnings {
        [one] => format!("warning: {}", one),
        [first, rest @ ..] => format!("warning: {} (+{} more)", first, rest.len()),
        [] => String::new(),
    }
}
