//! The focus-session controller.
//!
//! Owns the blockable-app roster, the study-mode flag, the countdown timer,
//! and the day's study-session records. All mutation goes through the
//! controller; the CLI and TUI only read. The 1-second countdown tick is
//! built on the single-shot scheduler by re-scheduling at fire time, gated
//! on the timer still running when the tick actually fires.

use std::time::Duration;

use crate::core::{Scheduler, TaskHandle};
use crate::error::StudymateError;
use crate::features::focus::apps::BlockedApp;
use crate::features::focus::session::{completed_count, StudySession};
use crate::features::focus::timer::StudyTimer;

const TICK_INTERVAL: Duration = Duration::from_secs(1);

#[derive(Debug, Clone, Copy)]
enum FocusEvent {
    Tick,
}

/// Controller for the distraction-blocker screen.
pub struct FocusController {
    apps: Vec<BlockedApp>,
    sessions: Vec<StudySession>,
    study_mode: bool,
    timer: StudyTimer,
    scheduler: Scheduler<FocusEvent>,
    tick_handle: Option<TaskHandle>,
}

impl FocusController {
    /// Create a controller over externally seeded roster and plan data,
    /// with the default pomodoro timer.
    #[must_use]
    pub fn new(apps: Vec<BlockedApp>, sessions: Vec<StudySession>) -> Self {
        Self::with_timer(apps, sessions, StudyTimer::default())
    }

    /// Create a controller with a custom timer.
    #[must_use]
    pub fn with_timer(
        apps: Vec<BlockedApp>,
        sessions: Vec<StudySession>,
        timer: StudyTimer,
    ) -> Self {
        Self {
            apps,
            sessions,
            study_mode: false,
            timer,
            scheduler: Scheduler::new(),
            tick_handle: None,
        }
    }

    /// The app roster.
    #[must_use]
    pub fn apps(&self) -> &[BlockedApp] {
        &self.apps
    }

    /// The day's study sessions.
    #[must_use]
    pub fn sessions(&self) -> &[StudySession] {
        &self.sessions
    }

    /// The countdown timer.
    #[must_use]
    pub const fn timer(&self) -> &StudyTimer {
        &self.timer
    }

    /// Whether study mode is active.
    #[must_use]
    pub const fn study_mode_active(&self) -> bool {
        self.study_mode
    }

    /// How many planned sessions are completed.
    #[must_use]
    pub fn completed_sessions(&self) -> usize {
        completed_count(&self.sessions)
    }

    /// Flip the block flag for one roster entry, leaving the rest alone.
    ///
    /// # Errors
    ///
    /// Returns [`StudymateError::InvalidIndex`] if `index` is out of range.
    pub fn toggle_block(&mut self, index: usize) -> Result<(), StudymateError> {
        let len = self.apps.len();
        let app = self
            .apps
            .get_mut(index)
            .ok_or(StudymateError::InvalidIndex { index, len })?;
        app.blocked = !app.blocked;
        Ok(())
    }

    /// Flip study mode.
    ///
    /// Entering study mode blocks every app in the roster; the previous
    /// per-app flags are discarded, not remembered. Leaving study mode
    /// changes no flags.
    pub fn toggle_study_mode(&mut self) {
        self.study_mode = !self.study_mode;
        if self.study_mode {
            for app in &mut self.apps {
                app.blocked = true;
            }
        }
    }

    /// Start or resume the countdown.
    ///
    /// No-op if the timer is already running, or finished (reset first).
    pub fn start_timer(&mut self) {
        if self.timer.is_running() {
            return;
        }
        self.timer.start();
        if self.timer.is_running() {
            self.schedule_tick();
        }
    }

    /// Pause the countdown, cancelling the pending tick.
    ///
    /// The remaining time is preserved exactly as it was at pause time.
    pub fn pause_timer(&mut self) {
        self.timer.pause();
        self.cancel_tick();
    }

    /// Stop the countdown and restore the full length.
    pub fn reset_timer(&mut self) {
        self.timer.reset();
        self.cancel_tick();
    }

    /// Feed elapsed time to the controller, applying any countdown ticks
    /// that have come due.
    pub fn advance(&mut self, elapsed: Duration) {
        self.scheduler.advance(elapsed);
        while let Some(FocusEvent::Tick) = self.scheduler.pop_due() {
            self.tick_handle = None;

            // Checked at fire time, not schedule time: a tick that was in
            // flight when the timer was paused or reset must not decrement.
            if !self.timer.is_running() {
                continue;
            }

            let finished = self.timer.tick();
            if !finished && self.timer.is_running() {
                self.schedule_tick();
            }
        }
    }

    fn schedule_tick(&mut self) {
        self.tick_handle = Some(self.scheduler.schedule(TICK_INTERVAL, FocusEvent::Tick));
    }

    fn cancel_tick(&mut self) {
        if let Some(handle) = self.tick_handle.take() {
            self.scheduler.cancel(handle);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::focus::apps::default_apps;
    use crate::features::focus::session::default_plan;
    use crate::features::focus::timer::TimerState;

    fn controller() -> FocusController {
        FocusController::new(default_apps(), default_plan())
    }

    #[test]
    fn test_toggle_block_flips_only_that_index() {
        let mut controller = controller();
        let before: Vec<bool> = controller.apps().iter().map(|a| a.blocked).collect();

        for index in 0..before.len() {
            controller.toggle_block(index).unwrap();
            for (i, app) in controller.apps().iter().enumerate() {
                if i == index {
                    assert_eq!(app.blocked, !before[i]);
                } else if i < index {
                    // Already flipped on an earlier pass.
                    assert_eq!(app.blocked, !before[i]);
                } else {
                    assert_eq!(app.blocked, before[i]);
                }
            }
        }
    }

    #[test]
    fn test_toggle_block_out_of_range() {
        let mut controller = controller();
        let err = controller.toggle_block(8).unwrap_err();
        assert!(matches!(
            err,
            StudymateError::InvalidIndex { index: 8, len: 8 }
        ));
    }

    #[test]
    fn test_entering_study_mode_blocks_everything() {
        let mut controller = controller();
        assert!(!controller.study_mode_active());

        controller.toggle_study_mode();
        assert!(controller.study_mode_active());
        assert!(controller.apps().iter().all(|a| a.blocked));
    }

    #[test]
    fn test_leaving_study_mode_keeps_flags() {
        let mut controller = controller();
        controller.toggle_study_mode();

        controller.toggle_study_mode();
        assert!(!controller.study_mode_active());
        // The bulk override is one-way; nothing is restored on exit.
        assert!(controller.apps().iter().all(|a| a.blocked));
    }

    #[test]
    fn test_study_mode_does_not_touch_timer() {
        let mut controller = controller();
        controller.start_timer();
        controller.toggle_study_mode();
        assert!(controller.timer().is_running());
        assert_eq!(controller.timer().remaining_seconds(), 1500);
    }

    #[test]
    fn test_three_ticks() {
        let mut controller = controller();
        controller.start_timer();
        controller.advance(Duration::from_secs(3));

        assert_eq!(controller.timer().remaining_seconds(), 1497);
        assert!(controller.timer().is_running());
    }

    #[test]
    fn test_pause_preserves_remaining_exactly() {
        let mut controller = controller();
        controller.start_timer();
        controller.advance(Duration::from_millis(2500));
        assert_eq!(controller.timer().remaining_seconds(), 1498);

        controller.pause_timer();
        controller.advance(Duration::from_secs(10));
        assert_eq!(controller.timer().remaining_seconds(), 1498);
        assert!(!controller.timer().is_running());
    }

    #[test]
    fn test_resume_counts_from_pause_value_without_drift() {
        let mut controller = controller();
        controller.start_timer();
        controller.advance(Duration::from_millis(2500));
        controller.pause_timer();

        controller.start_timer();
        // A full second must elapse after resume before the next decrement.
        controller.advance(Duration::from_millis(999));
        assert_eq!(controller.timer().remaining_seconds(), 1498);
        controller.advance(Duration::from_millis(1));
        assert_eq!(controller.timer().remaining_seconds(), 1497);
    }

    #[test]
    fn test_redundant_start_does_not_double_tick() {
        let mut controller = controller();
        controller.start_timer();
        controller.start_timer();
        controller.advance(Duration::from_secs(1));
        assert_eq!(controller.timer().remaining_seconds(), 1499);
    }

    #[test]
    fn test_reset_restores_default_from_any_state() {
        let mut controller = controller();
        controller.start_timer();
        controller.advance(Duration::from_secs(5));

        controller.reset_timer();
        assert_eq!(controller.timer().remaining_seconds(), 1500);
        assert!(!controller.timer().is_running());

        // And again while already stopped.
        controller.reset_timer();
        assert_eq!(controller.timer().remaining_seconds(), 1500);
    }

    #[test]
    fn test_countdown_stops_at_zero() {
        let mut controller = FocusController::with_timer(
            default_apps(),
            default_plan(),
            StudyTimer::new(3),
        );
        controller.start_timer();
        controller.advance(Duration::from_secs(10));

        assert_eq!(controller.timer().remaining_seconds(), 0);
        assert_eq!(controller.timer().state(), TimerState::Finished);
        assert!(!controller.timer().is_running());

        // No stray tick remains scheduled after finishing.
        controller.advance(Duration::from_secs(10));
        assert_eq!(controller.timer().remaining_seconds(), 0);
    }

    #[test]
    fn test_completed_sessions_aggregate() {
        let controller = controller();
        assert_eq!(controller.completed_sessions(), 2);
        assert_eq!(controller.sessions().len(), 4);
    }
}
