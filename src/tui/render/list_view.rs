use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::{StatusKind, TaskRecord};
use crate::tui::app::{App, Mode};
use crate::util::unicode::fit_to_width;

use super::{push_highlighted_spans, search_regex};

/// Width of the title column
const NAME_WIDTH: usize = 40;

/// Render the task list (also used under the help overlay and while searching)
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;

    if app.tasks.is_empty() {
        let lines = match &app.last_error {
            Some(err) => error_lines(app, err),
            None => empty_lines(app),
        };
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    }

    let query = match &app.mode {
        Mode::Search { query, .. } => Some(query.as_str()),
        _ => None,
    };

    if query.is_some() && app.visible_len() == 0 {
        let dim = Style::default().fg(app.theme.dim).bg(bg);
        let lines = vec![
            Line::from(Span::styled(
                " No tasks match your search.",
                Style::default().fg(app.theme.text).bg(bg),
            )),
            Line::from(""),
            Line::from(Span::styled(" esc: clear search \u{2022} q: quit", dim)),
        ];
        frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
        return;
    }

    let search_re = query.and_then(search_regex);
    let show_dir = app.dirs.len() > 1;
    let height = area.height as usize;
    let offset = if height > 0 && app.cursor >= height {
        app.cursor + 1 - height
    } else {
        0
    };

    let lines: Vec<Line> = app
        .visible_tasks()
        .into_iter()
        .enumerate()
        .skip(offset)
        .take(height)
        .map(|(i, task)| task_line(app, task, i == app.cursor, show_dir, search_re.as_ref()))
        .collect();

    frame.render_widget(Paragraph::new(lines).style(Style::default().bg(bg)), area);
}

fn task_line<'a>(
    app: &App,
    task: &TaskRecord,
    selected: bool,
    show_dir: bool,
    search_re: Option<&regex::Regex>,
) -> Line<'a> {
    let theme = &app.theme;
    let bg = if selected { theme.selection_bg } else { theme.background };
    let base = Style::default().bg(bg);

    let display = &app.config.display;
    let status = display.effective_status(task.metadata.status.as_deref());
    let indicator = display.status_indicator(status).to_string();

    let mut spans = vec![if selected {
        Span::styled(
            "> ",
            base.fg(theme.highlight).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("  ", base)
    }];
    spans.push(Span::styled(
        indicator,
        base.fg(theme.status_color(StatusKind::parse(status))),
    ));
    spans.push(Span::styled(" ", base));

    let priority = task.metadata.priority();
    if let Some(p) = priority {
        spans.push(Span::styled(p.label(), base.fg(theme.priority_color(priority))));
        spans.push(Span::styled(" ", base));
    }

    let name_style = if selected {
        base.fg(theme.text_bright)
    } else {
        base.fg(theme.text)
    };
    let highlight = Style::default()
        .fg(theme.search_match_fg)
        .bg(theme.search_match_bg);
    let name = fit_to_width(task.display_name(), NAME_WIDTH);
    push_highlighted_spans(&mut spans, &name, name_style, highlight, search_re);

    spans.push(Span::styled(
        format!("  {}", task.modified.format("%Y-%m-%d %H:%M")),
        base.fg(theme.dim),
    ));
    if show_dir {
        spans.push(Span::styled(
            format!("  [{}]", task.source_dir),
            base.fg(theme.cyan),
        ));
    }

    Line::from(spans).style(base)
}

fn error_lines<'a>(app: &App, err: &str) -> Vec<Line<'a>> {
    let bg = app.theme.background;
    let text = Style::default().fg(app.theme.text).bg(bg);
    let mut lines = vec![
        Line::from(Span::styled(
            format!(" Error: {}", err),
            Style::default()
                .fg(app.theme.red)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(" Make sure the configured directories exist:", text)),
    ];
    lines.extend(dir_lines(app));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Press 'q' to quit",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines
}

fn empty_lines<'a>(app: &App) -> Vec<Line<'a>> {
    let bg = app.theme.background;
    let text = Style::default().fg(app.theme.text).bg(bg);
    let mut lines = vec![Line::from(Span::styled(" No markdown files found in:", text))];
    lines.extend(dir_lines(app));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " Add some .md files to get started!",
        text,
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        " n: new task \u{2022} q: quit",
        Style::default().fg(app.theme.dim).bg(bg),
    )));
    lines
}

fn dir_lines<'a>(app: &App) -> Vec<Line<'a>> {
    let style = Style::default().fg(app.theme.cyan).bg(app.theme.background);
    app.dirs
        .iter()
        .map(|dir| Line::from(Span::styled(format!("   - {}", dir), style)))
        .collect()
}
