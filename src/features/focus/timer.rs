//! The study countdown timer.
//!
//! An explicit finite-state machine: `Idle` (never started, or reset),
//! `Running`, `Paused`, and the terminal `Finished` once the countdown hits
//! zero. Ticks are delivered from outside, one per second while running;
//! `tick` itself guards on the running state so a tick that was in flight
//! when the timer was paused cannot produce a stray decrement.

use serde::{Deserialize, Serialize};

/// Default countdown length: one 25-minute pomodoro.
pub const DEFAULT_POMODORO_SECONDS: u32 = 25 * 60;

/// Timer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    /// Not started since creation or the last reset.
    Idle,
    /// Counting down.
    Running,
    /// Stopped with time remaining.
    Paused,
    /// Counted all the way down to zero.
    Finished,
}

/// A countdown timer for study sessions.
#[derive(Debug, Clone)]
pub struct StudyTimer {
    total_seconds: u32,
    remaining_seconds: u32,
    state: TimerState,
}

impl StudyTimer {
    /// Create a timer for the given number of seconds.
    #[must_use]
    pub const fn new(total_seconds: u32) -> Self {
        Self {
            total_seconds,
            remaining_seconds: total_seconds,
            state: TimerState::Idle,
        }
    }

    /// Create a timer from minutes.
    #[must_use]
    pub const fn from_minutes(minutes: u32) -> Self {
        Self::new(minutes * 60)
    }

    /// Start or resume the countdown.
    ///
    /// No-op while already running, and on a finished timer (reset first).
    pub fn start(&mut self) {
        if matches!(self.state, TimerState::Idle | TimerState::Paused)
            && self.remaining_seconds > 0
        {
            self.state = TimerState::Running;
        }
    }

    /// Pause the countdown, preserving the remaining time exactly.
    pub fn pause(&mut self) {
        if self.state == TimerState::Running {
            self.state = TimerState::Paused;
        }
    }

    /// Stop and restore the full countdown length.
    pub fn reset(&mut self) {
        self.remaining_seconds = self.total_seconds;
        self.state = TimerState::Idle;
    }

    /// Advance the countdown by one second.
    ///
    /// Only has an effect while running. Returns true when this tick
    /// finished the countdown; the timer then stays in [`TimerState::Finished`]
    /// until reset.
    pub fn tick(&mut self) -> bool {
        if self.state != TimerState::Running {
            return false;
        }

        self.remaining_seconds = self.remaining_seconds.saturating_sub(1);
        if self.remaining_seconds == 0 {
            self.state = TimerState::Finished;
            true
        } else {
            false
        }
    }

    /// Seconds left on the countdown.
    #[must_use]
    pub const fn remaining_seconds(&self) -> u32 {
        self.remaining_seconds
    }

    /// The configured countdown length in seconds.
    #[must_use]
    pub const fn total_seconds(&self) -> u32 {
        self.total_seconds
    }

    /// Check if the timer is counting down.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    /// Check if the countdown reached zero.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.state == TimerState::Finished
    }

    /// Get the current state.
    #[must_use]
    pub const fn state(&self) -> TimerState {
        self.state
    }

    /// Format the remaining time as MM:SS.
    #[must_use]
    pub fn format_remaining(&self) -> String {
        format_time(self.remaining_seconds)
    }
}

impl Default for StudyTimer {
    fn default() -> Self {
        Self::new(DEFAULT_POMODORO_SECONDS)
    }
}

/// Format a second count as zero-padded MM:SS.
///
/// Total for all inputs; minutes widen past two digits rather than wrap.
#[must_use]
pub fn format_time(seconds: u32) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}
