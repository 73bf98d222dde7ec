//! Output formatting for studymate.
//!
//! This module provides formatters for displaying chat transcripts, the
//! blocker roster, and the study plan in pretty or JSON form.

mod json;
mod pretty;

use crate::cli::args::OutputFormat;
use crate::error::StudymateError;
use crate::features::chat::ChatMessage;
use crate::features::focus::{BlockedApp, StudySession};

pub use json::*;
pub use pretty::*;

/// Format a chat transcript based on output format
///
/// # Errors
///
/// Returns `StudymateError::Parse` if JSON serialization fails.
pub fn format_transcript(
    messages: &[ChatMessage],
    format: OutputFormat,
) -> Result<String, StudymateError> {
    match format {
        OutputFormat::Pretty => Ok(format_transcript_pretty(messages)),
        OutputFormat::Json => format_transcript_json(messages),
    }
}

/// Format the app roster based on output format
///
/// # Errors
///
/// Returns `StudymateError::Parse` if JSON serialization fails.
pub fn format_apps(
    apps: &[BlockedApp],
    study_mode: bool,
    format: OutputFormat,
) -> Result<String, StudymateError> {
    match format {
        OutputFormat::Pretty => Ok(format_apps_pretty(apps, study_mode)),
        OutputFormat::Json => format_apps_json(apps, study_mode),
    }
}

/// Format the study plan based on output format
///
/// # Errors
///
/// Returns `StudymateError::Parse` if JSON serialization fails.
pub fn format_sessions(
    sessions: &[StudySession],
    format: OutputFormat,
) -> Result<String, StudymateError> {
    match format {
        OutputFormat::Pretty => Ok(format_sessions_pretty(sessions)),
        OutputFormat::Json => format_sessions_json(sessions),
    }
}
