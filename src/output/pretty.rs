//! Pretty terminal output formatting for studymate.

use colored::Colorize;

use crate::features::chat::{ChatMessage, Sender};
use crate::features::focus::{completed_count, BlockedApp, StudySession};

/// Format a chat transcript for the terminal.
#[must_use]
pub fn format_transcript_pretty(messages: &[ChatMessage]) -> String {
    let mut output = Vec::new();

    for message in messages {
        let time = message.timestamp_local().format("%H:%M");
        let speaker = match message.sender {
            Sender::User => message.sender.display_name().blue().bold(),
            Sender::Assistant => message.sender.display_name().magenta().bold(),
        };
        output.push(format!(
            "{} {} {}",
            format!("[{time}]").dimmed(),
            speaker,
            message.text
        ));
    }

    output.join("\n")
}

/// Format the app roster for the terminal.
#[must_use]
pub fn format_apps_pretty(apps: &[BlockedApp], study_mode: bool) -> String {
    let mut output = Vec::new();

    let mode = if study_mode {
        "Study mode is ON - apps are blocked".green().bold()
    } else {
        "Study mode is off".dimmed()
    };
    output.push(format!("🛡  {mode}"));
    output.push(String::new());

    for (index, app) in apps.iter().enumerate() {
        let flag = if app.blocked {
            "blocked".red().bold()
        } else {
            "allowed".green()
        };
        output.push(format!(
            "  {index}. {} {:12} {:>8}  [{flag}]",
            app.icon,
            app.name,
            app.time_spent.dimmed()
        ));
    }

    output.join("\n")
}

/// Format the study plan for the terminal.
#[must_use]
pub fn format_sessions_pretty(sessions: &[StudySession]) -> String {
    let mut output = Vec::new();

    output.push("Today's study sessions".bold().to_string());
    output.push(String::new());

    for session in sessions {
        let mark = if session.completed {
            "✓".green().bold()
        } else {
            "·".dimmed()
        };
        let subject = if session.completed {
            session.subject.green()
        } else {
            session.subject.normal()
        };
        output.push(format!(
            "  {mark} {subject} {}",
            format!("({})", session.duration).dimmed()
        ));
    }

    output.push(String::new());
    output.push(format!(
        "  {} of {} sessions completed",
        completed_count(sessions),
        sessions.len()
    ));

    output.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::{default_apps, default_plan};

    #[test]
    fn test_apps_pretty_lists_every_entry() {
        let output = format_apps_pretty(&default_apps(), false);
        for app in default_apps() {
            assert!(output.contains(&app.name));
        }
    }

    #[test]
    fn test_sessions_pretty_summary_line() {
        let output = format_sessions_pretty(&default_plan());
        assert!(output.contains("2 of 4 sessions completed"));
    }
}
