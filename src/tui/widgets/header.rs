//! Header bar widget.
//!
//! One line: application name, the endpoint the results came from, and the
//! open result tabs with the active one highlighted.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Widget,
};

/// Widget for the header bar.
pub struct Header<'a> {
    endpoint: &'a str,
    tabs: &'a [String],
    active: usize,
}

impl<'a> Header<'a> {
    /// Creates a new header.
    pub fn new(endpoint: &'a str, tabs: &'a [String], active: usize) -> Self {
        Self {
            endpoint,
            tabs,
            active,
        }
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut spans = vec![
            Span::styled(
                " rqlens ",
                Style::default()
                    .fg(Color::Black)
                    .bg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!(" {} ", self.endpoint),
                Style::default().fg(Color::DarkGray),
            ),
        ];

        for (i, name) in self.tabs.iter().enumerate() {
            let style = if i == self.active {
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::Gray)
            };
            spans.push(Span::styled(format!(" [{}] {} ", i + 1, name), style));
        }

        buf.set_line(area.x, area.y, &Line::from(spans), area.width);
    }
}
