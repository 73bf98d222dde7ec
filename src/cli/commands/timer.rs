//! Study timer command implementation.

use std::io::{self, Write};
use std::time::{Duration, Instant};

use colored::Colorize;

use crate::cli::args::{OutputFormat, TimerArgs};
use crate::config::Config;
use crate::error::StudymateError;
use crate::features::focus::{FocusController, StudyTimer};

/// Execute the timer command: count down to zero in the terminal.
///
/// # Errors
///
/// Returns an error if writing to the terminal fails.
pub fn timer(
    config: &Config,
    args: &TimerArgs,
    format: OutputFormat,
) -> Result<String, StudymateError> {
    let minutes = args.minutes.unwrap_or(config.focus.pomodoro_duration_minutes);
    let mut controller = FocusController::with_timer(
        config.blocker.apps.clone(),
        config.plan.sessions.clone(),
        StudyTimer::from_minutes(minutes),
    );

    controller.start_timer();
    println!(
        "🎯 {} ({minutes} minutes). Ctrl+C to stop early.",
        "Study timer started".green().bold()
    );

    let mut last = Instant::now();
    while !controller.timer().is_finished() {
        std::thread::sleep(Duration::from_millis(200));
        let now = Instant::now();
        controller.advance(now.duration_since(last));
        last = now;

        print!(
            "\r   {} remaining ",
            controller.timer().format_remaining().bold()
        );
        io::stdout().flush()?;
    }
    println!();

    match format {
        OutputFormat::Json => {
            let output = serde_json::json!({
                "minutes": minutes,
                "finished": controller.timer().is_finished(),
            });
            Ok(serde_json::to_string_pretty(&output)?)
        }
        OutputFormat::Pretty => Ok(format!(
            "✅ {} Time for a break.",
            "Session finished!".green().bold()
        )),
    }
}
