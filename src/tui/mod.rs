//! Terminal user interface for rqlens.
//!
//! Provides the main TUI application loop using ratatui and crossterm.

pub mod app;
mod clipboard;
mod events;
mod ui;
pub mod widgets;

pub use app::{App, Tab};
pub use events::{Event, EventHandler};

use crate::error::{Result, RqlensError};
use crate::queries;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;
use std::path::PathBuf;
use tokio::sync::mpsc;
use tracing::warn;

/// Messages sent from background tasks to the main loop.
#[derive(Debug)]
pub enum AsyncMessage {
    /// An example query finished loading, as (name, text).
    QueryLoaded(String, String),
}

/// The main TUI application runner.
pub struct Tui {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    event_handler: EventHandler,
    /// Directory the example queries are loaded from.
    queries_dir: PathBuf,
    /// Fallback query text used when a load fails.
    default_query: String,
}

impl Tui {
    /// Creates a new TUI instance, initializing the terminal.
    pub fn new(queries_dir: PathBuf, default_query: String) -> Result<Self> {
        let terminal = Self::setup_terminal()?;
        let event_handler = EventHandler::new();

        // Initialize clipboard (non-fatal if it fails)
        if let Err(e) = clipboard::init() {
            warn!("Failed to initialize clipboard: {}", e);
        }

        Ok(Self {
            terminal,
            event_handler,
            queries_dir,
            default_query,
        })
    }

    /// Sets up the terminal for TUI rendering.
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<Stdout>>> {
        enable_raw_mode()
            .map_err(|e| RqlensError::internal(format!("Failed to enable raw mode: {e}")))?;

        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .map_err(|e| RqlensError::internal(format!("Failed to enter alternate screen: {e}")))?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend)
            .map_err(|e| RqlensError::internal(format!("Failed to create terminal: {e}")))?;

        Ok(terminal)
    }

    /// Restores the terminal to its original state.
    fn restore_terminal(&mut self) -> Result<()> {
        disable_raw_mode()
            .map_err(|e| RqlensError::internal(format!("Failed to disable raw mode: {e}")))?;

        execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )
        .map_err(|e| RqlensError::internal(format!("Failed to leave alternate screen: {e}")))?;

        self.terminal
            .show_cursor()
            .map_err(|e| RqlensError::internal(format!("Failed to show cursor: {e}")))?;

        Ok(())
    }

    /// Runs the main TUI event loop.
    pub async fn run(&mut self, mut app: App) -> Result<()> {
        // Set up panic hook to restore terminal on panic
        let original_hook = panic::take_hook();
        panic::set_hook(Box::new(move |panic_info| {
            let _ = disable_raw_mode();
            let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
            original_hook(panic_info);
        }));

        // Channel for async messages
        let (tx, mut rx) = mpsc::channel::<AsyncMessage>(32);

        let result = self.run_event_loop(&mut app, tx, &mut rx).await;

        // Restore panic hook
        let _ = panic::take_hook();

        result
    }

    /// The main event loop, separated for cleaner error handling.
    async fn run_event_loop(
        &mut self,
        app: &mut App,
        tx: mpsc::Sender<AsyncMessage>,
        rx: &mut mpsc::Receiver<AsyncMessage>,
    ) -> Result<()> {
        loop {
            app.clear_expired_status();

            self.terminal
                .draw(|frame| ui::draw(frame, app))
                .map_err(|e| RqlensError::internal(format!("Failed to draw: {e}")))?;

            if !app.running {
                break;
            }

            tokio::select! {
                event = self.event_handler.next() => {
                    let event = event?;
                    if event == Event::Tick {
                        app.tick();
                    }
                    match app.handle_event(event) {
                        app::Action::LoadQuery(name) => {
                            self.spawn_query_load(name, tx.clone());
                        }
                        app::Action::None => {}
                    }
                }

                Some(msg) = rx.recv() => {
                    self.handle_async_message(msg, app);
                }
            }
        }

        Ok(())
    }

    /// Loads an example query off the event loop.
    fn spawn_query_load(&self, name: String, tx: mpsc::Sender<AsyncMessage>) {
        let dir = self.queries_dir.clone();
        let fallback = self.default_query.clone();
        tokio::spawn(async move {
            let text = queries::load_query(&dir, &name, &fallback).await;
            let _ = tx.send(AsyncMessage::QueryLoaded(name, text)).await;
        });
    }

    /// Handles an async message from a background task.
    fn handle_async_message(&mut self, msg: AsyncMessage, app: &mut App) {
        match msg {
            AsyncMessage::QueryLoaded(name, text) => {
                app.query_loaded(name, text);
            }
        }
    }
}

impl Drop for Tui {
    fn drop(&mut self) {
        let _ = self.restore_terminal();
    }
}

/// Runs the TUI application.
pub async fn run(app: App, queries_dir: PathBuf, default_query: String) -> Result<()> {
    let mut tui = Tui::new(queries_dir, default_query)?;
    tui.run(app).await
}
