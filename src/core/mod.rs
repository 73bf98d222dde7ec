//! Core abstractions for studymate.
//!
//! This module provides the delayed-action scheduler shared by the chat
//! timeline and the focus controller.

pub mod scheduler;

pub use scheduler::{Scheduler, TaskHandle};
