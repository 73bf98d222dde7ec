//! Terminal User Interface (TUI) for studymate.
//!
//! Provides the full-screen interface: a main menu, the assistant chat,
//! and the distraction blocker. Built with ratatui and crossterm.

mod app;
mod event;
mod ui;

pub use app::{App, Screen};

use std::io;
use std::time::Instant;

use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::prelude::*;

use crate::config::Config;
use crate::error::StudymateError;

/// Run the TUI application.
///
/// # Errors
///
/// Returns an error if the TUI fails to initialize or run.
pub fn run(config: &Config) -> Result<(), StudymateError> {
    // Setup terminal
    enable_raw_mode()
        .map_err(|e| StudymateError::Terminal(format!("Failed to enable raw mode: {e}")))?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
        .map_err(|e| StudymateError::Terminal(format!("Failed to setup terminal: {e}")))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)
        .map_err(|e| StudymateError::Terminal(format!("Failed to create terminal: {e}")))?;

    // Create app state and run main loop
    let mut app = App::new(config);
    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode().ok();
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )
    .ok();
    terminal.show_cursor().ok();

    result
}

/// Run the main application loop.
fn run_app<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), StudymateError> {
    let mut last = Instant::now();

    loop {
        // Feed real elapsed time to the cores so timers tick and pending
        // replies land while we wait for input.
        let now = Instant::now();
        app.advance(now.duration_since(last));
        last = now;

        // Draw UI
        terminal
            .draw(|frame| ui::render(frame, app))
            .map_err(|e| StudymateError::Terminal(format!("Failed to draw: {e}")))?;

        // Handle events
        event::handle_events(app)?;
        if app.should_quit {
            break;
        }
    }

    Ok(())
}
