use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;

use super::centered_rect;

/// Render the help overlay (opened with ? or h)
pub fn render_help_overlay(frame: &mut Frame, app: &App, area: Rect) {
    // Center the overlay, leaving some margin
    let overlay_area = centered_rect(70, 90, area);

    // Clear the area behind the overlay
    frame.render_widget(Clear, overlay_area);

    let bg = app.theme.background;
    let key_style = Style::default()
        .fg(app.theme.highlight)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let desc_style = Style::default().fg(app.theme.text).bg(bg);
    let header_style = Style::default()
        .fg(app.theme.text_bright)
        .bg(bg)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(" List", header_style)));
    add_binding(&mut lines, " \u{2191}/k", "Move cursor up", key_style, desc_style);
    add_binding(&mut lines, " \u{2193}/j", "Move cursor down", key_style, desc_style);
    add_binding(&mut lines, " Enter", "View selected task", key_style, desc_style);
    add_binding(&mut lines, " /", "Search/filter tasks", key_style, desc_style);
    add_binding(&mut lines, " n", "Create new task", key_style, desc_style);
    add_binding(&mut lines, " ?/h", "Show this help", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Search", header_style)));
    add_binding(
        &mut lines,
        " [type]",
        "Filter by name, title, status, tags",
        key_style,
        desc_style,
    );
    add_binding(&mut lines, " \u{2191}\u{2193}", "Move through results", key_style, desc_style);
    add_binding(&mut lines, " Backspace", "Delete last character", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Leave search", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Task", header_style)));
    add_binding(&mut lines, " e", "Edit task in $EDITOR", key_style, desc_style);
    add_binding(&mut lines, " d", "Delete task (asks first)", key_style, desc_style);
    add_binding(&mut lines, " y / n,Esc", "Confirm / cancel deletion", key_style, desc_style);
    add_binding(&mut lines, " Esc", "Back to list", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Global", header_style)));
    add_binding(&mut lines, " q", "Quit (outside search)", key_style, desc_style);
    add_binding(&mut lines, " Ctrl+C", "Quit", key_style, desc_style);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(" Configuration", header_style)));
    if let Some(path) = &app.config_path {
        lines.push(Line::from(Span::styled(
            format!(" Config: {}", path.display()),
            desc_style,
        )));
    }
    lines.push(Line::from(Span::styled(
        " Set directories, status indicators, and colors there",
        Style::default().fg(app.theme.dim).bg(bg),
    )));

    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.dim).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}

fn add_binding<'a>(
    lines: &mut Vec<Line<'a>>,
    key: &'a str,
    desc: &'a str,
    key_style: Style,
    desc_style: Style,
) {
    let key_width = 14;
    let padded_key = format!("{:<width$}", key, width = key_width);
    lines.push(Line::from(vec![
        Span::styled(padded_key, key_style),
        Span::styled(desc, desc_style),
    ]));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;
    use std::path::PathBuf;

    #[test]
    fn lists_sections_and_config_path() {
        let mut app = app_with_tasks(&["~/a"], vec![]);
        app.config_path = Some(PathBuf::from("/home/me/.config/mdtask/config.toml"));
        let out = render_to_string(TERM_W, 40, |frame, area| {
            render_help_overlay(frame, &app, area);
        });
        for section in ["List", "Search", "Task", "Global", "Configuration"] {
            assert!(out.contains(section), "missing {section}: {out}");
        }
        assert!(out.contains("Create new task"));
        assert!(out.contains("Config: /home/me/.config/mdtask/config.toml"));
    }
}
