//! Top-level frame layout and draw dispatch.
//!
//! Splits the terminal into header, content, query panel, and footer, then
//! hands the content area to whichever view the active tab resolves to.

use crate::adapters::Adapter;
use crate::tui::app::{ActiveView, App, Focus};
use crate::tui::widgets::{
    chart_view, header::Header, query_panel::QueryPanel, sidebar::Sidebar, table::ResultTable,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Style};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Width of the sidebar column, in cells.
const SIDEBAR_WIDTH: u16 = 30;

/// Height of the query panel, including its border.
const QUERY_PANEL_HEIGHT: u16 = 7;

/// Draws one full frame of the application.
pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(5),
            Constraint::Length(QUERY_PANEL_HEIGHT),
            Constraint::Length(1),
        ])
        .split(frame.area());

    draw_header(frame, rows[0], app);

    let content = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(SIDEBAR_WIDTH)])
        .split(rows[1]);

    draw_view(frame, content[0], app);
    draw_sidebar(frame, content[1], app);
    draw_query_panel(frame, rows[2], app);
    draw_footer(frame, rows[3], app);
}

fn draw_header(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let names: Vec<String> = app.tabs.iter().map(|t| t.name.clone()).collect();
    frame.render_widget(Header::new(&app.endpoint, &names, app.active), area);
}

fn draw_view(frame: &mut Frame<'_>, area: Rect, app: &mut App) {
    let view = app.active_tab().active_view();
    let tab = app.active_tab_mut();
    match view {
        ActiveView::Adapter(Adapter::Map) => {
            let plot = crate::adapters::map::build(&tab.result);
            tab.map.render(frame, area, &plot);
        }
        ActiveView::Adapter(Adapter::Graph) => {
            let graph = crate::adapters::graph::build(&tab.result);
            tab.graph.render(frame, area, &graph);
        }
        ActiveView::Adapter(Adapter::Chart) => {
            let series = crate::adapters::chart::build(&tab.result);
            chart_view::render(frame, area, &series);
        }
        ActiveView::Table => {
            frame.render_widget(ResultTable::new(&tab.result), area);
        }
    }
}

fn draw_sidebar(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let tab = app.active_tab();
    let (current, table_active) = match tab.active_view() {
        ActiveView::Adapter(adapter) => (Some(adapter), false),
        ActiveView::Table => (None, true),
    };
    let sidebar = Sidebar::new(
        &tab.result.columns,
        current,
        table_active,
        &app.queries,
        app.query_selected,
        app.focus == Focus::Queries,
    );
    frame.render_widget(sidebar, area);
}

fn draw_query_panel(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let (name, text) = match &app.loaded_query {
        Some((name, text)) => (Some(name.as_str()), text.as_str()),
        None => (None, "Select a query from the sidebar and press Enter."),
    };
    frame.render_widget(QueryPanel::new(name, text), area);
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect, app: &App) {
    let text = match app.status() {
        Some(status) => format!(" {status}"),
        None => hints_for(app).to_string(),
    };
    frame.render_widget(
        Paragraph::new(text).style(Style::default().fg(Color::DarkGray)),
        area,
    );
}

/// Key hints tailored to the active view.
fn hints_for(app: &App) -> &'static str {
    if app.focus == Focus::Queries {
        return " j/k select · Enter load · Tab back · q quit";
    }
    match app.active_tab().active_view() {
        ActiveView::Adapter(Adapter::Map) => {
            " arrows pan · +/- zoom · f fit · n/p marker · y copy link · v view · q quit"
        }
        ActiveView::Adapter(Adapter::Graph) => " l edge labels · v view · Tab queries · q quit",
        ActiveView::Adapter(Adapter::Chart) => " v view · Tab queries · 1-9 tab · q quit",
        ActiveView::Table => " v view · Tab queries · 1-9 tab · q quit",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::ViewChoice;
    use crate::config::Config;
    use crate::results::{binding, TabularResult, Term};
    use crate::tui::app::Tab;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    fn sample_app() -> App {
        let config = Config::default();
        let result = TabularResult::with_data(
            vec!["lat".to_string(), "long".to_string(), "label".to_string()],
            vec![binding([
                ("lat", Term::literal("48.8")),
                ("long", Term::literal("2.3")),
                ("label", Term::literal("Paris")),
            ])],
        );
        let tab = Tab::new("cities".to_string(), result, ViewChoice::Auto, &config);
        App::new(vec![tab], vec!["cities".to_string()], &config)
    }

    #[test]
    fn test_draw_full_frame() {
        let mut app = sample_app();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
    }

    #[test]
    fn test_draw_each_view() {
        let mut app = sample_app();
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        // Cycle through every pinnable view and make sure each one draws.
        for _ in 0..5 {
            app.handle_event(crate::tui::events::Event::Key(
                crossterm::event::KeyEvent::new(
                    crossterm::event::KeyCode::Char('v'),
                    crossterm::event::KeyModifiers::NONE,
                ),
            ));
            terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
        }
    }

    #[test]
    fn test_footer_shows_status() {
        let mut app = sample_app();
        app.set_status("Copied link");
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).expect("terminal");
        terminal.draw(|frame| draw(frame, &mut app)).expect("draw");
        let buffer = terminal.backend().buffer();
        let bottom: String = (0..20)
            .map(|x| buffer[(x, 29)].symbol().to_string())
            .collect();
        assert!(bottom.contains("Copied link"));
    }
}
