//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source code with keyword highlighting and error-line markers
//! - [`tree`]: Flattened syntax tree with the current selection
//! - [`diagnostics`]: Syntax errors reported by the parse pass
//! - [`status`]: Status bar with keybindings and parse summary
//!
//! Each pane module exports a primary `render_*` function plus the scroll
//! state it needs between frames.

pub mod diagnostics;
pub mod source;
pub mod status;
pub mod tree;

pub use diagnostics::render_diagnostics_pane;
pub use source::{error_lines, render_source_pane, ErrorLines, SourceScrollState};
pub use status::render_status_bar;
pub use tree::{render_tree_pane, TreeScrollState};

/// Clamp `offset` so that `selected` stays inside a window of `height` rows
pub(crate) fn keep_visible(offset: usize, selected: usize, height: usize) -> usize {
    if selected < offset {
        selected
    } else if selected >= offset + height {
        selected + 1 - height
    } else {
        offset
    }
}
