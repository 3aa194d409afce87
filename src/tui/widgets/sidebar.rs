//! Sidebar widget.
//!
//! Two stacked lists: the views available for the active result (probe
//! outcome per adapter, current view marked) and the example queries found
//! in the queries directory.

use crate::adapters::{Adapter, ALL};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Widget},
};

/// Widget for the sidebar.
pub struct Sidebar<'a> {
    columns: &'a [String],
    current: Option<Adapter>,
    table_active: bool,
    queries: &'a [String],
    query_selected: usize,
    focused: bool,
}

impl<'a> Sidebar<'a> {
    /// Creates a new sidebar.
    pub fn new(
        columns: &'a [String],
        current: Option<Adapter>,
        table_active: bool,
        queries: &'a [String],
        query_selected: usize,
        focused: bool,
    ) -> Self {
        Self {
            columns,
            current,
            table_active,
            queries,
            query_selected,
            focused,
        }
    }

    fn view_items(&self) -> Vec<ListItem<'a>> {
        let mut items: Vec<ListItem<'_>> = ALL
            .iter()
            .map(|adapter| {
                let available = adapter.probe(self.columns);
                let marker = if Some(*adapter) == self.current {
                    "▶"
                } else {
                    " "
                };
                let style = if !available {
                    Style::default().fg(Color::DarkGray)
                } else if Some(*adapter) == self.current {
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(
                    format!("{marker} {} {}", adapter.icon(), adapter.label()),
                    style,
                )))
            })
            .collect();

        let marker = if self.table_active { "▶" } else { " " };
        let style = if self.table_active {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        items.push(ListItem::new(Line::from(Span::styled(
            format!("{marker} ▤ Table"),
            style,
        ))));
        items
    }

    fn query_items(&self) -> Vec<ListItem<'a>> {
        if self.queries.is_empty() {
            return vec![ListItem::new(Line::from(Span::styled(
                "(no example queries)",
                Style::default().fg(Color::DarkGray),
            )))];
        }

        self.queries
            .iter()
            .enumerate()
            .map(|(i, name)| {
                let is_selected = i == self.query_selected;
                let marker = if is_selected && self.focused { "▶" } else { " " };
                let style = if is_selected {
                    Style::default().add_modifier(Modifier::BOLD)
                } else {
                    Style::default()
                };
                ListItem::new(Line::from(Span::styled(
                    format!("{marker} {name}"),
                    style,
                )))
            })
            .collect()
    }
}

impl Widget for Sidebar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let layout = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(7), Constraint::Min(3)])
            .split(area);

        let views = List::new(self.view_items())
            .block(Block::default().borders(Borders::ALL).title(" Views (v) "));
        Widget::render(views, layout[0], buf);

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };
        let queries = List::new(self.query_items()).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title(" Queries (Tab, Enter) "),
        );
        Widget::render(queries, layout[1], buf);
    }
}
