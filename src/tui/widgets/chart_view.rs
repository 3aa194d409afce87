//! Chart view widget.
//!
//! Renders a bar series as a ratatui bar chart. Unlike the map and graph
//! views there is no retained state: the chart widget is rebuilt from the
//! series on every draw and sizes itself to the available area.

use crate::adapters::BarSeries;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Bar, BarChart, BarGroup, Block, Borders},
    Frame,
};

/// Minimum width of one bar in cells.
const MIN_BAR_WIDTH: u16 = 3;

/// Gap between bars in cells.
const BAR_GAP: u16 = 1;

/// Draws the bar chart for a series.
pub fn render(frame: &mut Frame<'_>, area: Rect, series: &BarSeries) {
    let title = format!(" Chart · {} ", series.legend);
    let block = Block::default().borders(Borders::ALL).title(title);

    if series.is_empty() {
        frame.render_widget(block, area);
        return;
    }

    let inner_width = area.width.saturating_sub(2);
    let visible = visible_bars(series.len(), inner_width);
    let bar_width = bar_width_for(visible, inner_width);

    let bars: Vec<Bar<'_>> = series
        .labels
        .iter()
        .zip(&series.values)
        .take(visible)
        .map(|(label, value)| {
            // Bar heights are unsigned; negative values flatten to zero for
            // display while the underlying series keeps the raw number.
            let height = if value.is_sign_negative() {
                0
            } else {
                value.round() as u64
            };
            Bar::default()
                .value(height)
                .text_value(trim_number(*value))
                .label(truncate(label, bar_width as usize).into())
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(BAR_GAP)
        .bar_style(Style::default().fg(Color::Green))
        .value_style(Style::default().fg(Color::Black).bg(Color::Green))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

/// Number of bars that fit the width at minimum bar width.
fn visible_bars(total: usize, width: u16) -> usize {
    let capacity = (width / (MIN_BAR_WIDTH + BAR_GAP)).max(1) as usize;
    total.min(capacity)
}

/// Bar width that spreads the visible bars across the width.
fn bar_width_for(visible: usize, width: u16) -> u16 {
    if visible == 0 {
        return MIN_BAR_WIDTH;
    }
    let spread = width / visible as u16;
    spread.saturating_sub(BAR_GAP).max(MIN_BAR_WIDTH)
}

/// Compact numeric display for the bar value.
fn trim_number(value: f64) -> String {
    if (value.fract()).abs() < f64::EPSILON {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

/// Truncates a label to fit under its bar.
fn truncate(s: &str, max_width: usize) -> String {
    if s.chars().count() <= max_width {
        s.to_string()
    } else {
        s.chars().take(max_width.saturating_sub(1)).collect::<String>() + "…"
    }
}
