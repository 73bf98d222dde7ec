//! Application state for the TUI.

use std::time::Duration;

use crate::config::Config;
use crate::features::chat::{CannedReplies, MessageTimeline, QUICK_PROMPTS};
use crate::features::focus::{FocusController, StudyTimer};

/// The named screens the interface can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    /// The main menu.
    Menu,
    /// The assistant chat.
    Chat,
    /// The distraction blocker.
    Blocker,
}

/// Menu entries, in display order.
pub const MENU_ITEMS: [(&str, &str, Screen); 2] = [
    ("💬", "Assistant chat", Screen::Chat),
    ("🛡", "Distraction blocker", Screen::Blocker),
];

/// Application state.
///
/// Owns one core per screen, created when the interface starts and
/// discarded when it exits. The input buffer belongs here, not to the
/// timeline; it is cleared as part of submitting.
pub struct App {
    /// Which screen is showing.
    pub screen: Screen,
    /// The chat screen's core.
    pub timeline: MessageTimeline,
    /// The blocker screen's core.
    pub focus: FocusController,
    /// The chat input buffer.
    pub input: String,
    /// Selected roster entry on the blocker screen.
    pub selected_app: usize,
    /// Selected menu entry.
    pub menu_selected: usize,
    /// Status message to display.
    pub status: Option<String>,
    /// Whether the app should quit.
    pub should_quit: bool,
}

impl App {
    /// Create a new app instance from configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        let timeline =
            MessageTimeline::with_reply_delay(Box::new(CannedReplies), config.chat.reply_delay());
        let focus = FocusController::with_timer(
            config.blocker.apps.clone(),
            config.plan.sessions.clone(),
            StudyTimer::from_minutes(config.focus.pomodoro_duration_minutes),
        );

        Self {
            screen: Screen::Menu,
            timeline,
            focus,
            input: String::new(),
            selected_app: 0,
            menu_selected: 0,
            status: None,
            should_quit: false,
        }
    }

    /// Feed elapsed time to both cores.
    pub fn advance(&mut self, elapsed: Duration) {
        self.timeline.advance(elapsed);
        self.focus.advance(elapsed);
    }

    /// Open a screen.
    pub fn open(&mut self, screen: Screen) {
        self.screen = screen;
        self.status = None;
    }

    /// Return to the main menu. Both cores keep running.
    pub fn back_to_menu(&mut self) {
        self.screen = Screen::Menu;
        self.status = None;
    }

    /// Move the menu selection up.
    pub fn menu_previous(&mut self) {
        if self.menu_selected > 0 {
            self.menu_selected -= 1;
        }
    }

    /// Move the menu selection down.
    pub fn menu_next(&mut self) {
        if self.menu_selected < MENU_ITEMS.len() - 1 {
            self.menu_selected += 1;
        }
    }

    /// Move the roster selection up.
    pub fn select_previous_app(&mut self) {
        if self.selected_app > 0 {
            self.selected_app -= 1;
        }
    }

    /// Move the roster selection down.
    pub fn select_next_app(&mut self) {
        let len = self.focus.apps().len();
        if len > 0 && self.selected_app < len - 1 {
            self.selected_app += 1;
        }
    }

    /// Flip the block flag of the selected roster entry.
    pub fn toggle_selected_app(&mut self) {
        if let Err(e) = self.focus.toggle_block(self.selected_app) {
            self.status = Some(e.to_string());
        }
    }

    /// Submit the chat input buffer, clearing it.
    pub fn submit_input(&mut self) {
        let text = std::mem::take(&mut self.input);
        if !self.timeline.submit(&text) {
            self.status = Some("Nothing to send".to_string());
        }
    }

    /// Submit quick prompt number `n` (1-based), if the conversation has
    /// not started yet.
    pub fn submit_quick_prompt(&mut self, n: usize) {
        if self.timeline.messages().len() == 1 && (1..=QUICK_PROMPTS.len()).contains(&n) {
            self.timeline.submit(QUICK_PROMPTS[n - 1]);
        }
    }
}
