// App state and main event loop.
// Holds the computed chart data and handles keyboard input.

use std::io;
use std::path::PathBuf;

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use ratatui::prelude::*;

use crate::stats::ChartData;
use crate::ui;

/// Where the displayed data came from.
#[derive(Debug, Clone)]
pub enum DataSource {
    /// Fetched from the API this invocation.
    Api,
    /// Imported from a cache file written by an earlier invocation.
    Cache(PathBuf),
}

impl DataSource {
    pub fn display(&self) -> String {
        match self {
            DataSource::Api => "fetched from api.wanikani.com".to_string(),
            DataSource::Cache(path) => format!("cached in {}", path.display()),
        }
    }
}

/// Main application state.
pub struct App {
    /// Per-level durations and their average.
    pub chart: ChartData,
    /// Where the chart data came from.
    pub source: DataSource,
    /// Whether the app should exit.
    pub should_quit: bool,
}

impl App {
    pub fn new(chart: ChartData, source: DataSource) -> Self {
        Self {
            chart,
            source,
            should_quit: false,
        }
    }

    /// Main event loop.
    pub fn run(&mut self, terminal: &mut Terminal<impl Backend>) -> io::Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::draw(frame, self))?;
            self.handle_events()?;
        }
        Ok(())
    }

    /// Handle keyboard and other events.
    #[allow(clippy::collapsible_if)]
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                        _ => {}
                    }
                }
            }
        }
        Ok(())
    }
}
