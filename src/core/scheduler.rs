//! Delayed-action scheduling.
//!
//! A single-shot, cancellable event scheduler driven by a logical clock.
//! Nothing here blocks or spawns threads: callers feed elapsed wall time in
//! via [`Scheduler::advance`] and drain due events with
//! [`Scheduler::pop_due`]. Repeating behavior (the 1-second countdown tick)
//! is layered on top by re-scheduling at fire time.

use std::time::Duration;

/// Handle to a scheduled action, used for cancellation.
///
/// Handles are never reused. Cancelling a handle that has already fired or
/// been cancelled is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(u64);

#[derive(Debug)]
struct Entry<E> {
    /// Logical time at which the entry becomes due.
    due: Duration,
    /// Schedule-order sequence number; breaks ties between equal due times.
    seq: u64,
    event: E,
}

/// A deterministic single-shot event scheduler.
///
/// Two clocks are kept: `horizon` is the total elapsed time reported by the
/// caller, and `clock` is the logical "now" used as the base for new
/// schedules. While draining, `clock` snaps to each fired entry's due time,
/// so an action re-scheduled from inside its own firing keeps exact cadence
/// even when a single `advance` covers several periods.
#[derive(Debug)]
pub struct Scheduler<E> {
    clock: Duration,
    horizon: Duration,
    pending: Vec<Entry<E>>,
    next_seq: u64,
}

impl<E> Scheduler<E> {
    /// Create an empty scheduler at logical time zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            clock: Duration::ZERO,
            horizon: Duration::ZERO,
            pending: Vec::new(),
            next_seq: 0,
        }
    }

    /// Schedule `event` to fire once, `delay` after the current logical time.
    pub fn schedule(&mut self, delay: Duration, event: E) -> TaskHandle {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.pending.push(Entry {
            due: self.clock + delay,
            seq,
            event,
        });
        TaskHandle(seq)
    }

    /// Cancel a pending action.
    ///
    /// Already-fired and already-cancelled handles are ignored.
    pub fn cancel(&mut self, handle: TaskHandle) {
        self.pending.retain(|entry| entry.seq != handle.0);
    }

    /// Move the horizon forward by `elapsed`.
    ///
    /// Call [`Self::pop_due`] until it returns `None` afterwards; the final
    /// `None` synchronizes the logical clock with the horizon.
    pub fn advance(&mut self, elapsed: Duration) {
        self.horizon += elapsed;
    }

    /// Pop the next due event, earliest first.
    ///
    /// Events with equal due times fire in schedule order. Returns `None`
    /// once nothing is due at the current horizon.
    pub fn pop_due(&mut self) -> Option<E> {
        let next = self
            .pending
            .iter()
            .enumerate()
            .filter(|(_, entry)| entry.due <= self.horizon)
            .min_by_key(|&(_, entry)| (entry.due, entry.seq))
            .map(|(index, _)| index);

        match next {
            Some(index) => {
                let entry = self.pending.swap_remove(index);
                self.clock = entry.due;
                Some(entry.event)
            }
            None => {
                self.clock = self.horizon;
                None
            }
        }
    }

    /// Number of actions still waiting to fire.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}

impl<E> Default for Scheduler<E> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: Duration = Duration::from_secs(1);

    #[test]
    fn test_nothing_due_before_delay() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(SECOND, "tick");

        scheduler.advance(Duration::from_millis(999));
        assert_eq!(scheduler.pop_due(), None);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_fires_in_due_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(Duration::from_secs(2), "late");
        scheduler.schedule(SECOND, "early");

        scheduler.advance(Duration::from_secs(3));
        assert_eq!(scheduler.pop_due(), Some("early"));
        assert_eq!(scheduler.pop_due(), Some("late"));
        assert_eq!(scheduler.pop_due(), None);
    }

    #[test]
    fn test_equal_due_times_fire_in_schedule_order() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(SECOND, "first");
        scheduler.schedule(SECOND, "second");

        scheduler.advance(SECOND);
        assert_eq!(scheduler.pop_due(), Some("first"));
        assert_eq!(scheduler.pop_due(), Some("second"));
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(SECOND, "tick");
        scheduler.cancel(handle);

        scheduler.advance(Duration::from_secs(5));
        assert_eq!(scheduler.pop_due(), None);
    }

    #[test]
    fn test_cancel_after_fire_is_noop() {
        let mut scheduler = Scheduler::new();
        let handle = scheduler.schedule(SECOND, "tick");

        scheduler.advance(SECOND);
        assert_eq!(scheduler.pop_due(), Some("tick"));

        scheduler.cancel(handle);
        scheduler.cancel(handle);
        assert_eq!(scheduler.pop_due(), None);
    }

    #[test]
    fn test_rescheduling_at_fire_time_keeps_cadence() {
        let mut scheduler = Scheduler::new();
        scheduler.schedule(SECOND, ());

        // One large advance covers three periods; re-scheduling from inside
        // the drain loop must land each tick on an exact 1s boundary.
        scheduler.advance(Duration::from_millis(3500));
        let mut fired = 0;
        while scheduler.pop_due().is_some() {
            fired += 1;
            scheduler.schedule(SECOND, ());
        }

        assert_eq!(fired, 3);
        assert_eq!(scheduler.pending(), 1);
    }

    #[test]
    fn test_clock_syncs_to_horizon_when_drained() {
        let mut scheduler: Scheduler<()> = Scheduler::new();
        scheduler.advance(Duration::from_millis(2500));
        assert_eq!(scheduler.pop_due(), None);

        // New schedules are based on the synchronized clock.
        scheduler.schedule(SECOND, ());
        scheduler.advance(Duration::from_millis(999));
        assert_eq!(scheduler.pop_due(), None);
        scheduler.advance(Duration::from_millis(1));
        assert_eq!(scheduler.pop_due(), Some(()));
    }
}
