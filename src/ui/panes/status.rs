//! Status bar rendering with keybindings and run state

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// What the visualizer is doing right now
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Ready,
    Sorting,
    Verifying,
    Paused,
    Completed,
    Failed,
}

impl RunState {
    fn badge(self) -> (&'static str, Color) {
        match self {
            RunState::Ready => (" READY ", DEFAULT_THEME.primary),
            RunState::Sorting => (" ▶ SORTING ", DEFAULT_THEME.secondary),
            RunState::Verifying => (" ✓ CHECKING ", DEFAULT_THEME.success),
            RunState::Paused => (" ⏸ PAUSED ", DEFAULT_THEME.primary),
            RunState::Completed => (" DONE ", DEFAULT_THEME.success),
            RunState::Failed => (" FAILED ", DEFAULT_THEME.error),
        }
    }

    pub fn is_running(self) -> bool {
        matches!(self, RunState::Sorting | RunState::Verifying)
    }
}

pub struct StatusRenderData<'a> {
    pub state: RunState,
    pub message: &'a str,
    pub events: usize,
    pub check_completion: bool,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: &StatusRenderData<'_>) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let bg = DEFAULT_THEME.status_bg;
    let (badge, badge_color) = data.state.badge();

    // Left side: state badge, event count, message
    let left_spans = vec![
        Span::styled(
            badge,
            Style::default()
                .bg(badge_color)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} events ", data.events),
            Style::default().bg(bg).fg(DEFAULT_THEME.comment),
        ),
        Span::styled("|", Style::default().bg(bg).fg(DEFAULT_THEME.comment)),
        Span::styled(
            format!(" {} ", data.message),
            Style::default().bg(bg).fg(if data.state == RunState::Failed {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds, which change while a run is in progress
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default().bg(bg).fg(DEFAULT_THEME.fg);
    let sep_style = Style::default().bg(bg).fg(DEFAULT_THEME.comment);

    let binds: Vec<(&str, &str)> = if data.state.is_running() {
        vec![(" ⎵ ", " pause "), (" q ", " quit ")]
    } else {
        vec![
            (" ↵ ", " sort "),
            (" n ", " new array "),
            (" c ", if data.check_completion { " check: on " } else { " check: off " }),
            (" q ", " quit "),
        ]
    };

    let mut right_spans = Vec::new();
    for (i, (key, desc)) in binds.into_iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
