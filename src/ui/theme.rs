//! Color palette shared by every pane

use ratatui::style::Color;

pub struct Theme {
    pub text: Color,
    pub bracket: Color,
    pub marker: Color,
    pub muted: Color,
    pub ok: Color,
    pub error: Color,
    pub keyword: Color,
    pub literal: Color,
    pub border_focused: Color,
    pub border_normal: Color,
    pub bar_bg: Color,
    pub selection_bg: Color,
    pub node_kind: Color,
}

pub const DEFAULT_THEME: Theme = Theme {
    text: Color::Rgb(205, 214, 244),
    bracket: Color::Rgb(137, 180, 250),
    marker: Color::Rgb(250, 179, 135),
    muted: Color::Rgb(108, 112, 134),
    ok: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    keyword: Color::Rgb(203, 166, 247),
    literal: Color::Rgb(250, 179, 135),
    border_focused: Color::Rgb(249, 226, 175),
    border_normal: Color::Rgb(108, 112, 134),
    bar_bg: Color::Rgb(50, 50, 70),
    selection_bg: Color::Rgb(69, 71, 90),
    node_kind: Color::Rgb(148, 226, 213),
};
