//! Main TUI application state and logic

use crate::parser::printer::{outline, OutlineRow};
use crate::parser::ParseResult;
use crate::ui::panes::{error_lines, ErrorLines, SourceScrollState, TreeScrollState};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::Duration;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Tree,
    Diagnostics,
}

impl FocusedPane {
    /// Move focus to the next pane (source -> tree -> diagnostics)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Tree,
            FocusedPane::Tree => FocusedPane::Diagnostics,
            FocusedPane::Diagnostics => FocusedPane::Source,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Diagnostics,
            FocusedPane::Tree => FocusedPane::Source,
            FocusedPane::Diagnostics => FocusedPane::Tree,
        }
    }
}

/// The viewer state for one parsed program
pub struct App<'src> {
    /// The program text the tree borrows from
    pub source_code: &'src str,

    /// Statements and diagnostics from the parse
    pub result: ParseResult<'src>,

    /// Flattened tree shown in the tree pane
    pub rows: Vec<OutlineRow>,

    pub error_lines: ErrorLines,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: SourceScrollState,
    pub tree_scroll: TreeScrollState,
    pub diagnostics_scroll: usize,

    /// Index into `rows` of the highlighted node
    pub selected_row: usize,

    /// Whether the source pane tracks the selected node's line
    pub follow_selection: bool,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl<'src> App<'src> {
    /// Create a new app over a finished parse of `source_code`
    pub fn new(source_code: &'src str, result: ParseResult<'src>) -> Self {
        let rows = outline(&result.statements);
        let error_lines = error_lines(&result.diagnostics);
        let status_message = if result.had_error {
            String::from("Parsed with errors")
        } else {
            String::from("Parsed cleanly")
        };

        App {
            source_code,
            result,
            rows,
            error_lines,
            focused_pane: FocusedPane::Tree,
            source_scroll: SourceScrollState::default(),
            tree_scroll: TreeScrollState::default(),
            diagnostics_scroll: 0,
            selected_row: 0,
            follow_selection: true,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(50))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Source line of the selected node, if it carries one
    pub fn selected_line(&self) -> Option<usize> {
        self.rows.get(self.selected_row).and_then(|row| row.line)
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
            .split(pane_area);

        // Left column: Source (top) | Diagnostics (bottom)
        let left_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[0]);

        let current_line = if self.follow_selection {
            self.selected_line()
        } else {
            None
        };

        super::panes::render_source_pane(
            frame,
            left_rows[0],
            self.source_code,
            current_line,
            &self.error_lines,
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_diagnostics_pane(
            frame,
            left_rows[1],
            &self.result.diagnostics,
            self.focused_pane == FocusedPane::Diagnostics,
            &mut self.diagnostics_scroll,
        );

        super::panes::render_tree_pane(
            frame,
            columns[1],
            &self.rows,
            self.selected_row,
            self.focused_pane == FocusedPane::Tree,
            &mut self.tree_scroll,
        );

        super::panes::render_status_bar(
            frame,
            status_area,
            &self.status_message,
            self.result.statements.len(),
            self.result.diagnostics.len(),
        );
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Char('n') => self.jump_to_next_error(),
            KeyCode::Home => {
                self.selected_row = 0;
                self.follow_selection = true;
            }
            KeyCode::End => {
                self.selected_row = self.rows.len().saturating_sub(1);
                self.follow_selection = true;
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::Source => {
                    self.follow_selection = false;
                    self.source_scroll.offset = self.source_scroll.offset.saturating_sub(1);
                }
                FocusedPane::Tree => {
                    self.selected_row = self.selected_row.saturating_sub(1);
                    self.follow_selection = true;
                }
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::Source => {
                    self.follow_selection = false;
                    self.source_scroll.offset = self.source_scroll.offset.saturating_add(1);
                }
                FocusedPane::Tree => {
                    if self.selected_row + 1 < self.rows.len() {
                        self.selected_row += 1;
                    }
                    self.follow_selection = true;
                }
                FocusedPane::Diagnostics => {
                    self.diagnostics_scroll = self.diagnostics_scroll.saturating_add(1);
                }
            },
            _ => {}
        }
    }

    /// Select the first node on the next line that has a diagnostic, wrapping around
    fn jump_to_next_error(&mut self) {
        let mut lines: Vec<usize> = self.error_lines.keys().copied().collect();
        if lines.is_empty() {
            self.status_message = "No syntax errors".to_string();
            return;
        }
        lines.sort_unstable();

        let after = self.selected_line().unwrap_or(0);
        let target = lines
            .iter()
            .copied()
            .find(|&line| line > after)
            .unwrap_or(lines[0]);

        match self.rows.iter().position(|row| row.line == Some(target)) {
            Some(idx) => {
                self.selected_row = idx;
                self.follow_selection = true;
                self.status_message = format!("Error on line {}", target);
            }
            None => {
                // The erroneous line produced no node; scroll the source there instead.
                self.follow_selection = false;
                self.source_scroll.offset = target.saturating_sub(1);
                self.status_message = format!("Error on line {} (no node)", target);
            }
        }
    }
}
