//! Event handling for the TUI.

use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::error::StudymateError;
use crate::tui::app::{App, Screen, MENU_ITEMS};

/// Handle terminal events, mutating the app state.
///
/// # Errors
///
/// Returns an error if event polling fails.
pub fn handle_events(app: &mut App) -> Result<(), StudymateError> {
    // Poll with a small timeout so timers and replies keep advancing.
    if event::poll(Duration::from_millis(100))
        .map_err(|e| StudymateError::Terminal(format!("Event poll failed: {e}")))?
    {
        if let Event::Key(key) =
            event::read().map_err(|e| StudymateError::Terminal(format!("Event read failed: {e}")))?
        {
            // Handle Ctrl+C everywhere
            if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
                app.should_quit = true;
                return Ok(());
            }

            match app.screen {
                Screen::Menu => handle_menu_key(app, key),
                Screen::Chat => handle_chat_key(app, key),
                Screen::Blocker => handle_blocker_key(app, key),
            }
        }
    }

    Ok(())
}

fn handle_menu_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char('j') | KeyCode::Down => app.menu_next(),
        KeyCode::Char('k') | KeyCode::Up => app.menu_previous(),
        KeyCode::Enter => {
            let (_, _, screen) = MENU_ITEMS[app.menu_selected];
            app.open(screen);
        }
        _ => {}
    }
}

fn handle_chat_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.back_to_menu(),
        KeyCode::Enter => app.submit_input(),
        KeyCode::Backspace => {
            app.input.pop();
        }
        // A bare digit picks a quick prompt while the conversation hasn't
        // started; otherwise digits are ordinary input.
        KeyCode::Char(c @ '1'..='4')
            if app.input.is_empty() && app.timeline.messages().len() == 1 =>
        {
            let n = c as usize - '0' as usize;
            app.submit_quick_prompt(n);
        }
        KeyCode::Char(c) => app.input.push(c),
        _ => {}
    }
}

fn handle_blocker_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('q') => app.back_to_menu(),
        KeyCode::Char('j') | KeyCode::Down => app.select_next_app(),
        KeyCode::Char('k') | KeyCode::Up => app.select_previous_app(),
        KeyCode::Char(' ') => app.toggle_selected_app(),
        KeyCode::Char('s') => app.focus.toggle_study_mode(),
        KeyCode::Char('t') => app.focus.start_timer(),
        KeyCode::Char('p') => app.focus.pause_timer(),
        KeyCode::Char('r') => app.focus.reset_timer(),
        KeyCode::Char('?') => {
            app.status = Some(
                "j/k:nav | Space:toggle | s:study mode | t:start | p:pause | r:reset | Esc:menu"
                    .to_string(),
            );
        }
        _ => {}
    }
}
