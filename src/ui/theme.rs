//! Color palette shared by all panes

use ratatui::style::Color;

pub struct Theme {
    pub fg: Color,
    pub primary: Color,   // Blue
    pub secondary: Color, // Orange
    pub comment: Color,   // Grey
    pub success: Color,   // Green
    pub error: Color,     // Red
    pub border_focused: Color,
    pub border_normal: Color,
    pub status_bg: Color,
    pub bar: Color,         // Untouched bars
    pub bar_touched: Color, // Indices written by the last event
}

pub const DEFAULT_THEME: Theme = Theme {
    fg: Color::Rgb(205, 214, 244),
    primary: Color::Rgb(137, 180, 250),   // Blue
    secondary: Color::Rgb(250, 179, 135), // Orange
    comment: Color::Rgb(108, 112, 134),
    success: Color::Rgb(166, 227, 161),
    error: Color::Rgb(243, 139, 168),
    border_focused: Color::Rgb(249, 226, 175), // Yellow border while sorting
    border_normal: Color::Rgb(108, 112, 134),  // Grey border when idle
    status_bg: Color::Rgb(50, 50, 70),
    bar: Color::Rgb(174, 186, 194),
    bar_touched: Color::Rgb(235, 63, 63),
};
