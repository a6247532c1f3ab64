#![forbid(unsafe_code)]

//! Trailing-edge debouncing for high-frequency refresh triggers.
//!
//! Hosts can emit a burst of data-change notifications (an actor update
//! followed by several item updates) for a single user action. Rebuilding the
//! hand for each one wastes work and causes visible flicker.
//!
//! [`Debouncer`] uses a "latest wins" strategy:
//! - every [`trigger`](Debouncer::trigger) pushes the deadline to
//!   `now + delay`, folding the earlier triggers into the pending one;
//! - [`poll`](Debouncer::poll) fires at most once per pending burst, once the
//!   host clock reaches the deadline.
//!
//! The debouncer only decides *when* to run. The caller reads its data at
//! fire time, so the executed refresh always observes the latest state.
//!
//! # Usage
//!
//! ```
//! use core::time::Duration;
//! use fanhand_core::debounce::{Debouncer, REFRESH_DEBOUNCE};
//!
//! let mut debouncer = Debouncer::new(REFRESH_DEBOUNCE);
//! debouncer.trigger(Duration::from_millis(0));
//! debouncer.trigger(Duration::from_millis(10));
//! debouncer.trigger(Duration::from_millis(20));
//!
//! // Deadline moved to 20ms + 50ms.
//! assert_eq!(debouncer.poll(Duration::from_millis(60)), None);
//! assert_eq!(debouncer.poll(Duration::from_millis(70)), Some(3));
//! assert_eq!(debouncer.poll(Duration::from_millis(500)), None);
//! ```

use core::time::Duration;

/// Coalescing delay used for host data-change refreshes.
pub const REFRESH_DEBOUNCE: Duration = Duration::from_millis(50);

/// Trailing-edge debouncer driven by host-supplied monotonic time.
///
/// Not thread-safe; owned by a single event loop.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: Duration,
    deadline: Option<Duration>,
    pending_triggers: u32,
}

impl Debouncer {
    /// Create an idle debouncer with the given delay.
    #[must_use]
    pub const fn new(delay: Duration) -> Self {
        Self {
            delay,
            deadline: None,
            pending_triggers: 0,
        }
    }

    /// Configured coalescing delay.
    #[must_use]
    pub const fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedule a fire at `now + delay`, replacing any earlier deadline.
    pub fn trigger(&mut self, now: Duration) {
        self.deadline = Some(now.saturating_add(self.delay));
        self.pending_triggers = self.pending_triggers.saturating_add(1);
    }

    /// Fire if the deadline has been reached.
    ///
    /// Returns the number of triggers folded into this fire, or `None` when
    /// nothing is pending or the deadline lies in the future.
    pub fn poll(&mut self, now: Duration) -> Option<u32> {
        let deadline = self.deadline?;
        if now < deadline {
            return None;
        }
        self.deadline = None;
        Some(std::mem::take(&mut self.pending_triggers))
    }

    /// Drop the pending fire, if any. Returns whether one was pending.
    pub fn cancel(&mut self) -> bool {
        self.pending_triggers = 0;
        self.deadline.take().is_some()
    }

    /// Whether a fire is scheduled.
    #[must_use]
    pub const fn is_pending(&self) -> bool {
        self.deadline.is_some()
    }

    /// Scheduled deadline, if any.
    #[must_use]
    pub const fn deadline(&self) -> Option<Duration> {
        self.deadline
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(REFRESH_DEBOUNCE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn idle_debouncer_never_fires() {
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.is_pending());
        assert_eq!(debouncer.poll(ms(1_000)), None);
    }

    #[test]
    fn single_trigger_fires_after_delay() {
        let mut debouncer = Debouncer::default();
        debouncer.trigger(ms(100));
        assert_eq!(debouncer.deadline(), Some(ms(150)));
        assert_eq!(debouncer.poll(ms(149)), None);
        assert_eq!(debouncer.poll(ms(150)), Some(1));
        assert!(!debouncer.is_pending());
    }

    #[test]
    fn burst_inside_window_fires_once() {
        let mut debouncer = Debouncer::default();
        for t in [0, 10, 20, 30, 40] {
            debouncer.trigger(ms(t));
            assert_eq!(debouncer.poll(ms(t)), None);
        }
        assert_eq!(debouncer.poll(ms(89)), None);
        assert_eq!(debouncer.poll(ms(90)), Some(5));
        assert_eq!(debouncer.poll(ms(91)), None);
    }

    #[test]
    fn triggers_after_fire_start_a_new_burst() {
        let mut debouncer = Debouncer::default();
        debouncer.trigger(ms(0));
        assert_eq!(debouncer.poll(ms(50)), Some(1));
        debouncer.trigger(ms(60));
        assert_eq!(debouncer.poll(ms(110)), Some(1));
    }

    #[test]
    fn cancel_discards_pending_fire() {
        let mut debouncer = Debouncer::default();
        debouncer.trigger(ms(0));
        assert!(debouncer.cancel());
        assert!(!debouncer.cancel());
        assert_eq!(debouncer.poll(ms(500)), None);
    }
}
