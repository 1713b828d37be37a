pub mod confirm_popup;
pub mod detail_view;
pub mod header;
pub mod help_overlay;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub(crate) mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::Span;
use ratatui::widgets::Block;
use regex::Regex;

use super::app::{App, Mode};

/// Main render function, dispatching on the current mode
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (2 rows) | content | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2), // title + separator
            Constraint::Min(1),    // content area
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);

    match &app.mode {
        Mode::List | Mode::Search { .. } | Mode::Help => {
            list_view::render_list_view(frame, app, chunks[1])
        }
        Mode::TaskDetail { path, content } => {
            detail_view::render_detail_view(frame, app, path, content, chunks[1])
        }
        Mode::ConfirmDelete { path, content } => {
            detail_view::render_detail_view(frame, app, path, content, chunks[1]);
            confirm_popup::render_confirm_popup(frame, app, path, chunks[1]);
        }
    }

    // Help overlay (rendered on top of the list)
    if app.mode == Mode::Help {
        help_overlay::render_help_overlay(frame, app, frame.area());
    }

    status_row::render_status_row(frame, app, chunks[2]);
}

/// Case-insensitive literal matcher for a search query
pub(super) fn search_regex(query: &str) -> Option<Regex> {
    if query.is_empty() {
        return None;
    }
    Regex::new(&format!("(?i){}", regex::escape(query))).ok()
}

/// Push spans for text with regex match highlighting. If no regex or no matches,
/// pushes a single span with `base_style`. Otherwise splits text at match boundaries.
pub(super) fn push_highlighted_spans<'a>(
    spans: &mut Vec<Span<'a>>,
    text: &str,
    base_style: Style,
    highlight_style: Style,
    search_re: Option<&Regex>,
) {
    let Some(re) = search_re else {
        spans.push(Span::styled(text.to_string(), base_style));
        return;
    };

    let mut last_end = 0;
    for m in re.find_iter(text) {
        if m.start() > last_end {
            spans.push(Span::styled(
                text[last_end..m.start()].to_string(),
                base_style,
            ));
        }
        spans.push(Span::styled(m.as_str().to_string(), highlight_style));
        last_end = m.end();
    }
    if last_end < text.len() || last_end == 0 {
        spans.push(Span::styled(text[last_end..].to_string(), base_style));
    }
}

/// Create a centered rectangle of the given percentage of the parent
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Color;

    fn texts(spans: &[Span]) -> Vec<String> {
        spans.iter().map(|s| s.content.to_string()).collect()
    }

    #[test]
    fn highlight_splits_on_matches() {
        let base = Style::default();
        let hl = Style::default().bg(Color::Red);
        let re = search_regex("MILK");
        let mut spans = Vec::new();
        push_highlighted_spans(&mut spans, "buy milk and more milk", base, hl, re.as_ref());
        assert_eq!(texts(&spans), vec!["buy ", "milk", " and more ", "milk"]);
        assert_eq!(spans[1].style, hl);
    }

    #[test]
    fn highlight_without_match_is_one_span() {
        let mut spans = Vec::new();
        let re = search_regex("zzz");
        push_highlighted_spans(&mut spans, "hello", Style::default(), Style::default(), re.as_ref());
        assert_eq!(texts(&spans), vec!["hello"]);
    }

    #[test]
    fn search_regex_escapes_metacharacters() {
        let re = search_regex("a.b(").unwrap();
        assert!(re.is_match("xA.B(y"));
        assert!(!re.is_match("axb("));
        assert!(search_regex("").is_none());
    }
}
