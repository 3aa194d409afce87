//! Tabular fallback widget.
//!
//! Renders a result that matched no adapter as a bordered table with
//! column headers and auto-sized columns. Unbound cells render as a dim
//! dash; URI and blank-node terms are tinted by kind.

use crate::results::{TabularResult, Term, TermKind};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Maximum width for any column.
const MAX_COLUMN_WIDTH: usize = 40;

/// Minimum width for any column.
const MIN_COLUMN_WIDTH: usize = 4;

/// Placeholder for unbound cells.
const UNBOUND: &str = "—";

/// Widget for rendering a tabular result.
pub struct ResultTable<'a> {
    result: &'a TabularResult,
}

impl<'a> ResultTable<'a> {
    /// Creates a new result table widget.
    pub fn new(result: &'a TabularResult) -> Self {
        Self { result }
    }

    /// Calculates the optimal width for each column.
    fn calculate_column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self
            .result
            .columns
            .iter()
            .map(|col| col.len().max(MIN_COLUMN_WIDTH))
            .collect();

        for row in &self.result.rows {
            for (i, col) in self.result.columns.iter().enumerate() {
                if let Some(term) = row.get(col) {
                    widths[i] = widths[i].max(term.value.len());
                }
            }
        }

        widths.iter().map(|&w| w.min(MAX_COLUMN_WIDTH)).collect()
    }

    /// Truncates a string to fit within the given width, adding ellipsis if needed.
    fn truncate(s: &str, max_width: usize) -> String {
        if s.chars().count() <= max_width {
            s.to_string()
        } else if max_width <= 3 {
            s.chars().take(max_width).collect()
        } else {
            let kept: String = s.chars().take(max_width - 3).collect();
            format!("{kept}...")
        }
    }

    /// Style for one cell, keyed by term kind.
    fn cell_style(term: Option<&Term>) -> Style {
        match term {
            None => Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
            Some(term) => match term.kind {
                TermKind::Uri => Style::default().fg(Color::Blue),
                TermKind::Blank => Style::default().fg(Color::Magenta),
                TermKind::Literal => Style::default(),
            },
        }
    }

    /// Renders the table to a vector of lines for embedding in other widgets.
    pub fn render_to_lines(&self) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if self.result.columns.is_empty() {
            lines.push(Line::from(Span::styled(
                "(empty result)",
                Style::default().fg(Color::DarkGray),
            )));
            return lines;
        }

        let widths = self.calculate_column_widths();

        lines.push(self.render_border(&widths, '┌', '┬', '┐'));
        lines.push(self.render_header_row(&widths));
        lines.push(self.render_border(&widths, '├', '┼', '┤'));

        for row_index in 0..self.result.rows.len() {
            lines.push(self.render_data_row(row_index, &widths));
        }

        lines.push(self.render_border(&widths, '└', '┴', '┘'));

        let footer = format!(
            "{} row{}",
            self.result.row_count(),
            if self.result.row_count() == 1 { "" } else { "s" },
        );
        lines.push(Line::from(Span::styled(
            footer,
            Style::default().fg(Color::DarkGray),
        )));

        lines
    }

    /// Renders a horizontal border line.
    fn render_border(&self, widths: &[usize], left: char, mid: char, right: char) -> Line<'a> {
        let mut border = String::new();
        border.push(left);

        for (i, &width) in widths.iter().enumerate() {
            border.push_str(&"─".repeat(width + 2));
            if i < widths.len() - 1 {
                border.push(mid);
            }
        }

        border.push(right);

        Line::from(Span::styled(border, Style::default().fg(Color::DarkGray)))
    }

    /// Renders the header row with variable names.
    fn render_header_row(&self, widths: &[usize]) -> Line<'a> {
        let mut spans = Vec::new();
        spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));

        for (i, col) in self.result.columns.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(MIN_COLUMN_WIDTH);
            let name = Self::truncate(col, width);
            let padded = format!(" {name:width$} ");

            spans.push(Span::styled(
                padded,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ));
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }

        Line::from(spans)
    }

    /// Renders a data row, filling unbound cells with a dash.
    fn render_data_row(&self, row_index: usize, widths: &[usize]) -> Line<'a> {
        let row = &self.result.rows[row_index];
        let mut spans = Vec::new();
        spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));

        for (i, col) in self.result.columns.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(MIN_COLUMN_WIDTH);
            let term = row.get(col);
            let display = term.map(|t| t.value.as_str()).unwrap_or(UNBOUND);
            let truncated = Self::truncate(display, width);
            let padded = format!(" {truncated:width$} ");

            spans.push(Span::styled(padded, Self::cell_style(term)));
            spans.push(Span::styled("│", Style::default().fg(Color::DarkGray)));
        }

        Line::from(spans)
    }
}

impl Widget for ResultTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let lines = self.render_to_lines();

        for (i, line) in lines.iter().enumerate() {
            if i >= area.height as usize {
                break;
            }
            let y = area.y + i as u16;
            buf.set_line(area.x, y, line, area.width);
        }
    }
}
