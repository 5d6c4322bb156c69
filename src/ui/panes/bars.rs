//! Bar chart pane: one column per element, downsampled to the pane width

use crate::sequence::Element;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashSet;

/// Glyphs for a cell filled 0/8 through 8/8 from the bottom
const EIGHTHS: [char; 9] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇', '█'];

/// Overall coloring of the chart
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarTint {
    Normal,
    Complete,
    Failed,
}

/// Everything the bars pane needs for one frame
pub struct BarsRenderData<'a> {
    pub title: &'a str,
    pub sequence: &'a [Element],
    pub touched: &'a [usize],
    /// Indices `0..=n` have been confirmed by the completion check
    pub verified_up_to: Option<usize>,
    pub tint: BarTint,
    /// Value range used for scaling, usually the sample bounds
    pub floor: Element,
    pub ceiling: Element,
    pub is_running: bool,
}

/// Element index range `[lo, hi)` drawn by column `col` out of `width`
fn column_range(col: usize, width: usize, len: usize) -> (usize, usize) {
    let lo = col * len / width;
    let hi = ((col + 1) * len / width).max(lo + 1).min(len);
    (lo, hi)
}

/// Bar height in eighths of a cell, at least one eighth for in-range values
fn bar_height(value: Element, floor: Element, ceiling: Element, total: usize) -> usize {
    if value < floor || total == 0 {
        return 0;
    }
    let span = (ceiling - floor).max(1) as u128;
    let offset = (value - floor).min(ceiling - floor) as u128;
    1 + (offset * (total as u128 - 1) / span) as usize
}

fn column_color(data: &BarsRenderData<'_>, touched: &FxHashSet<usize>, lo: usize, hi: usize) -> Color {
    match data.tint {
        BarTint::Failed => DEFAULT_THEME.error,
        BarTint::Complete => DEFAULT_THEME.success,
        BarTint::Normal => {
            if data.verified_up_to.is_some_and(|v| hi - 1 <= v) {
                DEFAULT_THEME.success
            } else if (lo..hi).any(|i| touched.contains(&i)) {
                DEFAULT_THEME.bar_touched
            } else {
                DEFAULT_THEME.bar
            }
        }
    }
}

/// Render the bar chart
pub fn render_bars_pane(frame: &mut Frame, area: Rect, data: &BarsRenderData<'_>) {
    let border_style = if data.is_running {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(format!(" {} ({} elements) ", data.title, data.sequence.len()))
        .borders(Borders::ALL)
        .border_style(border_style);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if data.sequence.is_empty() || inner.width == 0 || inner.height == 0 {
        let paragraph = Paragraph::new("(empty)").style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, inner);
        return;
    }

    let touched: FxHashSet<usize> = data.touched.iter().copied().collect();
    let len = data.sequence.len();
    let width = inner.width as usize;
    let rows = inner.height as usize;
    let total = rows * 8;

    // Tallest value and color per column
    let columns: Vec<(usize, Color)> = (0..width)
        .map(|col| {
            let (lo, hi) = column_range(col, width, len);
            let value = data.sequence[lo..hi].iter().copied().max().unwrap_or(0);
            (
                bar_height(value, data.floor, data.ceiling, total),
                column_color(data, &touched, lo, hi),
            )
        })
        .collect();

    let lines: Vec<Line> = (0..rows)
        .map(|row| {
            let level = (rows - 1 - row) * 8;
            let mut spans = Vec::new();
            let mut run = String::new();
            let mut run_color = None;

            for &(height, color) in &columns {
                let glyph = EIGHTHS[height.saturating_sub(level).min(8)];
                if run_color != Some(color) && !run.is_empty() {
                    spans.push(Span::styled(
                        std::mem::take(&mut run),
                        Style::default().fg(run_color.unwrap_or(color)),
                    ));
                }
                run_color = Some(color);
                run.push(glyph);
            }
            if let Some(color) = run_color {
                spans.push(Span::styled(run, Style::default().fg(color)));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_range_downsamples() {
        assert_eq!(column_range(0, 2, 6), (0, 3));
        assert_eq!(column_range(1, 2, 6), (3, 6));
    }

    #[test]
    fn test_column_range_upsamples() {
        // More columns than elements: neighbours repeat the same element
        assert_eq!(column_range(0, 4, 2), (0, 1));
        assert_eq!(column_range(1, 4, 2), (0, 1));
        assert_eq!(column_range(3, 4, 2), (1, 2));
    }

    #[test]
    fn test_bar_height_scales_between_bounds() {
        assert_eq!(bar_height(1, 1, 1000, 80), 1);
        assert_eq!(bar_height(1000, 1, 1000, 80), 80);
        assert_eq!(bar_height(0, 1, 1000, 80), 0);
        assert!(bar_height(500, 1, 1000, 80) < 80);
    }
}
