//! Syntax tree pane - displays the flattened AST outline
//!
//! Each row is indented two spaces per depth level and prefixed with an icon
//! for its node kind. The selected row is highlighted and kept in view.

use crate::parser::printer::OutlineRow;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Map node labels to their icons
fn get_node_icon(label: &str) -> &'static str {
    let kind = label.split_whitespace().next().unwrap_or_default();
    match kind {
        "Block" => "{}",
        "Expr" => "▸",
        "If" | "Else" => "?",
        "While" | "For" => "↻",
        "Var" => "≔",
        "Binary" => "∘",
        "Unary" => "¬",
        "Literal" => "◦",
        "Variable" => "@",
        "Grouping" => "()",
        "Assign" => "←",
        _ => "∅",
    }
}

/// Scroll state for the tree pane
#[derive(Debug, Default)]
pub struct TreeScrollState {
    pub offset: usize,
}

/// Render the syntax tree pane
pub fn render_tree_pane(
    frame: &mut Frame,
    area: Rect,
    rows: &[OutlineRow],
    selected: usize,
    is_focused: bool,
    scroll_state: &mut TreeScrollState,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Syntax Tree ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if rows.is_empty() {
        let paragraph = Paragraph::new("(no statements)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.muted));
        frame.render_widget(paragraph, area);
        return;
    }

    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    scroll_state.offset = super::keep_visible(scroll_state.offset, selected, visible_height);

    let lines: Vec<Line> = rows
        .iter()
        .enumerate()
        .skip(scroll_state.offset)
        .take(visible_height)
        .map(|(idx, row)| {
            let indent = "  ".repeat(row.depth);
            let icon = get_node_icon(&row.label);
            let is_missing = row.label.starts_with('<');

            let label_style = if is_missing {
                Style::default().fg(DEFAULT_THEME.error)
            } else {
                Style::default().fg(DEFAULT_THEME.node_kind)
            };

            let line = Line::from(vec![
                Span::raw(indent),
                Span::styled(format!("{} ", icon), Style::default().fg(DEFAULT_THEME.muted)),
                Span::styled(row.label.clone(), label_style),
            ]);

            if idx == selected {
                line.style(
                    Style::default()
                        .bg(DEFAULT_THEME.selection_bg)
                        .fg(Color::White)
                        .add_modifier(Modifier::BOLD),
                )
            } else {
                line
            }
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
