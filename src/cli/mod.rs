//! Command-line interface for studymate.

pub mod args;
pub mod commands;
