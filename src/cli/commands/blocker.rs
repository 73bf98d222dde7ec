//! Distraction blocker command implementations.

use crate::cli::args::{AppsArgs, OutputFormat};
use crate::config::Config;
use crate::error::StudymateError;
use crate::features::focus::FocusController;
use crate::output::{format_apps, format_sessions};

/// Execute the apps command.
///
/// Toggles are applied first, then the study-mode override, so the output
/// reflects the same precedence the blocker screen has: entering study mode
/// blocks everything regardless of individual flags.
///
/// # Errors
///
/// Returns an error if a toggle index is out of range or formatting fails.
pub fn apps(config: &Config, args: &AppsArgs, format: OutputFormat) -> Result<String, StudymateError> {
    let mut controller =
        FocusController::new(config.blocker.apps.clone(), config.plan.sessions.clone());

    for &index in &args.toggle {
        controller.toggle_block(index)?;
    }
    if args.study_mode {
        controller.toggle_study_mode();
    }

    format_apps(controller.apps(), controller.study_mode_active(), format)
}

/// Execute the sessions command.
///
/// # Errors
///
/// Returns an error if formatting fails.
pub fn sessions(config: &Config, format: OutputFormat) -> Result<String, StudymateError> {
    format_sessions(&config.plan.sessions, format)
}
