//! Status bar: parse summary on the left, key hints on the right

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

const KEY_HINTS: &[(&str, &str)] = &[
    ("↑/↓", "move"),
    ("⇥", "focus"),
    ("n", "next error"),
    ("q", "quit"),
];

fn summary_spans(message: &str, statement_count: usize, error_count: usize) -> Vec<Span<'static>> {
    let (badge, badge_bg) = match error_count {
        0 => (" OK ".to_string(), DEFAULT_THEME.ok),
        1 => (" 1 error ".to_string(), DEFAULT_THEME.error),
        n => (format!(" {} errors ", n), DEFAULT_THEME.error),
    };
    let bar = Style::default().bg(DEFAULT_THEME.bar_bg);

    vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} top-level statements ", statement_count),
            bar.fg(DEFAULT_THEME.muted),
        ),
        Span::styled(format!(" {} ", message), bar.fg(DEFAULT_THEME.text)),
    ]
}

fn hint_spans() -> Vec<Span<'static>> {
    let key_style = Style::default().bg(DEFAULT_THEME.muted).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.bar_bg)
        .fg(DEFAULT_THEME.text);

    KEY_HINTS
        .iter()
        .flat_map(|&(key, desc)| {
            [
                Span::styled(format!(" {} ", key), key_style),
                Span::styled(format!(" {} ", desc), desc_style),
            ]
        })
        .collect()
}

/// Render the status bar at the bottom.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    statement_count: usize,
    error_count: usize,
) {
    let halves = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);
    let bar = Style::default().bg(DEFAULT_THEME.bar_bg);

    let left = Paragraph::new(Line::from(summary_spans(
        message,
        statement_count,
        error_count,
    )))
    .style(bar)
    .alignment(Alignment::Left);
    frame.render_widget(left, halves[0]);

    let right = Paragraph::new(Line::from(hint_spans()))
        .style(bar)
        .alignment(Alignment::Right);
    frame.render_widget(right, halves[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_badge_pluralizes() {
        let clean = summary_spans("ready", 2, 0);
        assert_eq!(clean[0].content, " OK ");

        let one = summary_spans("ready", 2, 1);
        assert_eq!(one[0].content, " 1 error ");

        let many = summary_spans("ready", 2, 3);
        assert_eq!(many[0].content, " 3 errors ");
        assert_eq!(many[1].content, " 2 top-level statements ");
    }

    #[test]
    fn test_every_hint_has_key_and_description() {
        assert_eq!(hint_spans().len(), KEY_HINTS.len() * 2);
    }
}
