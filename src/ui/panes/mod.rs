//! TUI pane rendering modules
//!
//! - [`bars`]: the sequence as a bar chart, with touched and verified indices highlighted
//! - [`status`]: status bar with keybindings and run state
//!
//! Each pane module exports a primary `render_*` function and the render data
//! it consumes. [`render_screen`] lays both out on one frame and is shared by
//! the idle event loop and the in-run terminal sink.

pub mod bars;
pub mod status;

pub use bars::{render_bars_pane, BarTint, BarsRenderData};
pub use status::{render_status_bar, RunState, StatusRenderData};

use ratatui::{
    layout::{Constraint, Direction, Layout},
    Frame,
};

/// Bars above, one-line status bar below
pub fn render_screen(frame: &mut Frame, bars: &BarsRenderData<'_>, status: &StatusRenderData<'_>) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(frame.area());

    render_bars_pane(frame, chunks[0], bars);
    render_status_bar(frame, chunks[1], status);
}
