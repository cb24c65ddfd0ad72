//! Source code pane rendering with syntax highlighting
//!
//! Displays the ari program with basic keyword highlighting, line numbers,
//! a marker for the line of the node selected in the tree pane, and a red
//! background on every line that produced a syntax error.
//!
//! The pane uses a simple character-by-character scan to apply highlighting
//! styles instead of re-running the lexer per line.

use crate::parser::errors::SyntaxError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Diagnostic messages keyed by 1-based source line
pub type ErrorLines = FxHashMap<usize, Vec<String>>;

/// Group diagnostics by the line they were reported on
pub fn error_lines(diagnostics: &[SyntaxError]) -> ErrorLines {
    let mut lines = ErrorLines::default();
    for err in diagnostics {
        lines.entry(err.line).or_default().push(err.message.clone());
    }
    lines
}

/// Simple syntax highlighting for one line of ari code
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    let chars: Vec<(usize, char)> = line.char_indices().collect();
    let mut i = 0;

    while i < chars.len() {
        let (offset, c) = chars[i];

        // Handle comments
        if c == '/' && chars.get(i + 1).is_some_and(|&(_, next)| next == '/') {
            if !current_word.is_empty() {
                spans.push(Span::styled(current_word.clone(), get_word_style(&current_word)));
                current_word.clear();
            }
            spans.push(Span::styled(
                &line[offset..],
                Style::default().fg(DEFAULT_THEME.muted),
            ));
            break;
        }

        // Handle strings
        if c == '"' {
            if !current_word.is_empty() {
                spans.push(Span::styled(current_word.clone(), get_word_style(&current_word)));
                current_word.clear();
            }
            let mut end = i + 1;
            while end < chars.len() && chars[end].1 != '"' {
                end += 1;
            }
            if end < chars.len() {
                end += 1;
            }
            let end_offset = chars.get(end).map_or(line.len(), |&(o, _)| o);
            spans.push(Span::styled(
                &line[offset..end_offset],
                Style::default().fg(DEFAULT_THEME.literal),
            ));
            i = end;
            continue;
        }

        // Handle delimiters and operators
        if !c.is_alphanumeric() && c != '_' && c != '.' {
            if !current_word.is_empty() {
                spans.push(Span::styled(current_word.clone(), get_word_style(&current_word)));
                current_word.clear();
            }

            let style = match c {
                '{' | '}' | '(' | ')' | '[' | ']' => Style::default().fg(DEFAULT_THEME.bracket),
                _ => Style::default().fg(DEFAULT_THEME.text),
            };

            spans.push(Span::styled(c.to_string(), style));
            i += 1;
            continue;
        }

        current_word.push(c);
        i += 1;
    }

    if !current_word.is_empty() {
        let style = get_word_style(&current_word);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_word_style(word: &str) -> Style {
    match word {
        "var" | "if" | "else" | "while" | "for" | "fun" | "class" | "return" | "and" | "or"
        | "source" | "super" | "this" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        "true" | "false" | "null" => Style::default().fg(DEFAULT_THEME.literal),
        _ if word.starts_with(|c: char| c.is_ascii_digit()) => {
            Style::default().fg(DEFAULT_THEME.literal)
        }
        _ => Style::default().fg(DEFAULT_THEME.text),
    }
}

/// Scroll state for the source pane
#[derive(Debug, Default)]
pub struct SourceScrollState {
    pub offset: usize,
}

/// Render the source code pane.
///
/// When `current_line` is set the view scrolls to keep it visible.
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    current_line: Option<usize>,
    errors: &ErrorLines,
    is_focused: bool,
    scroll_state: &mut SourceScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    let total_lines = lines.len();
    let visible_height = area.height.saturating_sub(2).max(1) as usize; // Account for borders (2), min 1

    if let Some(line) = current_line.filter(|&l| l > 0 && l <= total_lines) {
        scroll_state.offset = super::keep_visible(scroll_state.offset, line - 1, visible_height);
    }

    if total_lines > visible_height {
        scroll_state.offset = scroll_state.offset.min(total_lines - visible_height);
    } else {
        scroll_state.offset = 0;
    }

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_current = current_line == Some(line_num);
            let is_error = errors.contains_key(&line_num);
            let marker = if is_error { '✗' } else if is_current { '▶' } else { ' ' };
            let line_num_str = format!("{:4}{} ", line_num, marker);

            let (num_style, content_base_style) = if is_error {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.error)
                        .add_modifier(Modifier::BOLD),
                    Style::default()
                        .bg(DEFAULT_THEME.error)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else if is_current {
                (
                    Style::default()
                        .fg(DEFAULT_THEME.marker)
                        .add_modifier(Modifier::BOLD),
                    Style::default().bg(DEFAULT_THEME.selection_bg),
                )
            } else {
                (Style::default().fg(DEFAULT_THEME.muted), Style::default())
            };

            let mut content_line = highlight_source_code(line);

            if is_error {
                for span in &mut content_line.spans {
                    span.style = content_base_style;
                }
            } else if is_current {
                for span in &mut content_line.spans {
                    span.style = span.style.patch(content_base_style);
                }
            }

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);

            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}
