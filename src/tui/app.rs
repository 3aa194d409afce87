//! Application state for the TUI.
//!
//! Contains the main App struct: the open result tabs, per-tab view state,
//! the example-query sidebar, and key handling.

use crate::adapters::{self, map, Adapter};
use crate::cli::ViewChoice;
use crate::config::Config;
use crate::results::TabularResult;
use crate::tui::clipboard;
use crate::tui::events::Event;
use crate::tui::widgets::{graph_view::GraphView, map_view::MapView};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a status message stays visible.
const STATUS_TTL: Duration = Duration::from_secs(3);

/// Which panel currently has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    View,
    Queries,
}

/// The view a tab resolves to after applying its pin and the probes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveView {
    Adapter(Adapter),
    Table,
}

/// An action the event loop must carry out on the app's behalf.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    /// Nothing to do.
    None,
    /// Load the named example query asynchronously.
    LoadQuery(String),
}

/// One open result tab with its retained view state.
pub struct Tab {
    /// Tab title (result file stem).
    pub name: String,
    /// The loaded result, read-only from here on.
    pub result: TabularResult,
    /// View pin; `Auto` probes the registry.
    pub choice: ViewChoice,
    /// Retained map viewport.
    pub map: MapView,
    /// Retained graph layout.
    pub graph: GraphView,
}

impl Tab {
    /// Creates a tab with fresh view state.
    pub fn new(name: String, result: TabularResult, choice: ViewChoice, config: &Config) -> Self {
        Self {
            name,
            result,
            choice,
            map: MapView::new(&config.map),
            graph: GraphView::new(),
        }
    }

    /// Resolves the view to draw for this tab.
    pub fn active_view(&self) -> ActiveView {
        match self.choice {
            ViewChoice::Auto => match adapters::select(&self.result.columns) {
                Some(adapter) => ActiveView::Adapter(adapter),
                None => ActiveView::Table,
            },
            ViewChoice::Adapter(adapter) => ActiveView::Adapter(adapter),
            ViewChoice::Table => ActiveView::Table,
        }
    }

    /// Cycles the view pin: auto, each adapter in priority order, table.
    fn cycle_view(&mut self) {
        self.choice = match self.choice {
            ViewChoice::Auto => ViewChoice::Adapter(Adapter::Map),
            ViewChoice::Adapter(Adapter::Map) => ViewChoice::Adapter(Adapter::Graph),
            ViewChoice::Adapter(Adapter::Graph) => ViewChoice::Adapter(Adapter::Chart),
            ViewChoice::Adapter(Adapter::Chart) => ViewChoice::Table,
            ViewChoice::Table => ViewChoice::Auto,
        };
    }
}

/// The main application state.
pub struct App {
    /// Whether the event loop keeps running.
    pub running: bool,
    /// Open result tabs; never empty.
    pub tabs: Vec<Tab>,
    /// Index of the active tab.
    pub active: usize,
    /// Focused panel.
    pub focus: Focus,
    /// Endpoint URL shown in the header.
    pub endpoint: String,
    /// Example query names for the sidebar.
    pub queries: Vec<String>,
    /// Selected query index in the sidebar.
    pub query_selected: usize,
    /// Currently loaded query, as (name, text).
    pub loaded_query: Option<(String, String)>,
    /// Transient status message.
    status: Option<(String, Instant)>,
}

impl App {
    /// Creates the app state from loaded tabs and config.
    pub fn new(tabs: Vec<Tab>, queries: Vec<String>, config: &Config) -> Self {
        Self {
            running: true,
            tabs,
            active: 0,
            focus: Focus::View,
            endpoint: config.endpoint.url.clone(),
            queries,
            query_selected: 0,
            loaded_query: None,
            status: None,
        }
    }

    /// Returns the active tab.
    pub fn active_tab(&self) -> &Tab {
        &self.tabs[self.active.min(self.tabs.len() - 1)]
    }

    /// Returns the active tab mutably.
    pub fn active_tab_mut(&mut self) -> &mut Tab {
        let index = self.active.min(self.tabs.len() - 1);
        &mut self.tabs[index]
    }

    /// Sets a transient status message.
    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status = Some((message.into(), Instant::now()));
    }

    /// Returns the current status message, if still fresh.
    pub fn status(&self) -> Option<&str> {
        self.status
            .as_ref()
            .map(|(message, _)| message.as_str())
    }

    /// Drops the status message once it has expired.
    pub fn clear_expired_status(&mut self) {
        if let Some((_, since)) = &self.status {
            if since.elapsed() > STATUS_TTL {
                self.status = None;
            }
        }
    }

    /// Records a loaded example query for the query panel.
    pub fn query_loaded(&mut self, name: String, text: String) {
        debug!(query = %name, "example query loaded");
        self.loaded_query = Some((name, text));
    }

    /// Advances animations; called on every tick.
    ///
    /// The graph layout gains momentum only while it is the visible view.
    pub fn tick(&mut self) {
        let tab = self.active_tab_mut();
        if tab.active_view() == ActiveView::Adapter(Adapter::Graph) {
            let graph = crate::adapters::graph::build(&tab.result);
            tab.graph.step(&graph);
        }
    }

    /// Handles a terminal event, returning any follow-up action.
    pub fn handle_event(&mut self, event: Event) -> Action {
        match event {
            Event::Key(key) => self.handle_key(key),
            Event::Resize(_, _) | Event::Tick => Action::None,
        }
    }

    fn handle_key(&mut self, key: KeyEvent) -> Action {
        // Global shortcuts first.
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.running = false;
                return Action::None;
            }
            KeyCode::Char('q') => {
                self.running = false;
                return Action::None;
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Focus::View => Focus::Queries,
                    Focus::Queries => Focus::View,
                };
                return Action::None;
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = (c as usize) - ('1' as usize);
                if index < self.tabs.len() {
                    self.active = index;
                }
                return Action::None;
            }
            _ => {}
        }

        match self.focus {
            Focus::Queries => self.handle_queries_key(key),
            Focus::View => self.handle_view_key(key),
        }
    }

    fn handle_queries_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Down | KeyCode::Char('j') => {
                if !self.queries.is_empty() {
                    self.query_selected = (self.query_selected + 1) % self.queries.len();
                }
            }
            KeyCode::Up | KeyCode::Char('k') => {
                if !self.queries.is_empty() {
                    self.query_selected =
                        (self.query_selected + self.queries.len() - 1) % self.queries.len();
                }
            }
            KeyCode::Enter => {
                if let Some(name) = self.queries.get(self.query_selected) {
                    return Action::LoadQuery(name.clone());
                }
            }
            _ => {}
        }
        Action::None
    }

    fn handle_view_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Char('v') => {
                self.active_tab_mut().cycle_view();
                return Action::None;
            }
            _ => {}
        }

        match self.active_tab().active_view() {
            ActiveView::Adapter(Adapter::Map) => self.handle_map_key(key),
            ActiveView::Adapter(Adapter::Graph) => self.handle_graph_key(key),
            _ => {}
        }
        Action::None
    }

    fn handle_map_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('y') {
            self.copy_selected_link();
            return;
        }

        let point_count = map::build(&self.active_tab().result).points.len();
        let tab = self.active_tab_mut();
        match key.code {
            KeyCode::Left | KeyCode::Char('h') => tab.map.pan(-0.1, 0.0),
            KeyCode::Right => tab.map.pan(0.1, 0.0),
            KeyCode::Up => tab.map.pan(0.0, 0.1),
            KeyCode::Down => tab.map.pan(0.0, -0.1),
            KeyCode::Char('+') | KeyCode::Char('=') => tab.map.zoom_in(),
            KeyCode::Char('-') => tab.map.zoom_out(),
            KeyCode::Char('f') => tab.map.request_fit(),
            KeyCode::Char('n') => tab.map.select_next(point_count),
            KeyCode::Char('p') => tab.map.select_prev(point_count),
            _ => {}
        }
    }

    fn handle_graph_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('l') {
            self.active_tab_mut().graph.toggle_labels();
        }
    }

    /// Copies the selected marker's link, the TUI stand-in for opening it.
    fn copy_selected_link(&mut self) {
        let tab = self.active_tab();
        let plot = map::build(&tab.result);
        let link = plot
            .points
            .get(tab.map.selected % plot.points.len().max(1))
            .and_then(|p| p.link.clone());

        match link {
            Some(link) => match clipboard::copy(&link) {
                Ok(()) => self.set_status(format!("Copied {link}")),
                Err(e) => self.set_status(format!("Clipboard error: {e}")),
            },
            None => self.set_status("Selected point has no link"),
        }
    }
}
