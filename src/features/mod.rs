//! Feature implementations for studymate.
//!
//! This module contains the two stateful screens' cores:
//! - Assistant chat (message timeline + canned replies)
//! - Distraction blocker (app roster, study mode, countdown timer)

pub mod chat;
pub mod focus;
