//! Query panel widget.
//!
//! Shows the text of the currently loaded example query, read-only. The
//! panel exists to trace a result back to the query that produced it;
//! rqlens never executes queries.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Widget},
};

/// Widget for the query panel.
pub struct QueryPanel<'a> {
    name: Option<&'a str>,
    text: &'a str,
}

impl<'a> QueryPanel<'a> {
    /// Creates a new query panel.
    pub fn new(name: Option<&'a str>, text: &'a str) -> Self {
        Self { name, text }
    }
}

impl Widget for QueryPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = match self.name {
            Some(name) => format!(" Query · {name} "),
            None => " Query ".to_string(),
        };

        let lines: Vec<Line<'_>> = self
            .text
            .lines()
            .map(|line| {
                // Comment lines carry load-failure notices; keep them visible.
                let style = if line.trim_start().starts_with('#') {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::Gray)
                };
                Line::from(Span::styled(line.to_string(), style))
            })
            .collect();

        let paragraph =
            Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(title));
        paragraph.render(area, buf);
    }
}
