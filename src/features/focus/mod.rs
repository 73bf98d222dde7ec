//! Distraction blocking and study timing.
//!
//! Provides the focus screen's state:
//! - Blockable-app roster with per-app and bulk (study mode) toggles
//! - Pomodoro-style countdown timer
//! - Study-session plan with completion summary

pub mod apps;
pub mod controller;
pub mod session;
pub mod timer;

pub use apps::{default_apps, BlockedApp};
pub use controller::FocusController;
pub use session::{completed_count, default_plan, StudySession};
pub use timer::{format_time, StudyTimer, TimerState, DEFAULT_POMODORO_SECONDS};
