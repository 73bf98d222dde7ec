//! JSON output formatting for studymate.

use serde_json::json;

use crate::error::StudymateError;
use crate::features::chat::ChatMessage;
use crate::features::focus::{completed_count, BlockedApp, StudySession};

/// Format a chat transcript as JSON
///
/// # Errors
///
/// Returns `StudymateError::Parse` if JSON serialization fails.
pub fn format_transcript_json(messages: &[ChatMessage]) -> Result<String, StudymateError> {
    let output = json!({
        "count": messages.len(),
        "messages": messages
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the app roster as JSON
///
/// # Errors
///
/// Returns `StudymateError::Parse` if JSON serialization fails.
pub fn format_apps_json(apps: &[BlockedApp], study_mode: bool) -> Result<String, StudymateError> {
    let output = json!({
        "study_mode": study_mode,
        "count": apps.len(),
        "blocked": apps.iter().filter(|a| a.blocked).count(),
        "apps": apps
    });
    Ok(serde_json::to_string_pretty(&output)?)
}

/// Format the study plan as JSON
///
/// # Errors
///
/// Returns `StudymateError::Parse` if JSON serialization fails.
pub fn format_sessions_json(sessions: &[StudySession]) -> Result<String, StudymateError> {
    let output = json!({
        "count": sessions.len(),
        "completed": completed_count(sessions),
        "sessions": sessions
    });
    Ok(serde_json::to_string_pretty(&output)?)
}
