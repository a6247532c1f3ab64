#![forbid(unsafe_code)]

//! Monotonic time sources.
//!
//! Everything time-dependent in fanhand takes a `Duration` "now" measured
//! from an arbitrary origin. Hosts pick the clock: [`WallClock`] for native
//! embedding, [`DeterministicClock`] when the embedding environment advances
//! time explicitly (tests, replay, WASM hosts driving their own frame loop).

use core::time::Duration;

use web_time::Instant;

/// A source of monotonic timestamps.
pub trait MonotonicClock {
    /// Time elapsed since the clock's origin.
    fn now_mono(&self) -> Duration;
}

/// Host-stepped clock. Time only moves when the owner says so, and never
/// backwards.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DeterministicClock {
    elapsed: Duration,
}

impl DeterministicClock {
    #[must_use]
    pub const fn new() -> Self {
        Self::starting_at(Duration::ZERO)
    }

    #[must_use]
    pub const fn starting_at(elapsed: Duration) -> Self {
        Self { elapsed }
    }

    /// Step forward by `dt` and return the new reading.
    pub fn advance(&mut self, dt: Duration) -> Duration {
        self.elapsed = self.elapsed.saturating_add(dt);
        self.elapsed
    }

    /// Jump to `target` if it lies ahead. Earlier targets are ignored.
    pub fn advance_to(&mut self, target: Duration) -> Duration {
        self.elapsed = self.elapsed.max(target);
        self.elapsed
    }
}

impl MonotonicClock for DeterministicClock {
    fn now_mono(&self) -> Duration {
        self.elapsed
    }
}

/// Real time, measured from construction.
#[derive(Debug, Clone)]
pub struct WallClock {
    origin: Instant,
}

impl WallClock {
    #[must_use]
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for WallClock {
    fn default() -> Self {
        Self::new()
    }
}

impl MonotonicClock for WallClock {
    fn now_mono(&self) -> Duration {
        self.origin.elapsed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stepped_clock_only_moves_forward() {
        let mut clock = DeterministicClock::starting_at(Duration::from_millis(5));
        assert_eq!(clock.advance(Duration::from_millis(30)), Duration::from_millis(35));
        assert_eq!(clock.advance_to(Duration::from_millis(10)), Duration::from_millis(35));
        assert_eq!(clock.advance_to(Duration::from_millis(90)), Duration::from_millis(90));
        assert_eq!(clock.now_mono(), Duration::from_millis(90));
    }

    #[test]
    fn stepped_clock_saturates() {
        let mut clock = DeterministicClock::starting_at(Duration::MAX);
        clock.advance(Duration::from_secs(1));
        assert_eq!(clock.now_mono(), Duration::MAX);
        assert_eq!(DeterministicClock::new().now_mono(), Duration::ZERO);
    }

    #[test]
    fn wall_clock_is_monotonic() {
        let clock = WallClock::new();
        let a = clock.now_mono();
        let b = clock.now_mono();
        assert!(b >= a);
    }
}
