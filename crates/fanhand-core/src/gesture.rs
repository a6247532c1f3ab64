#![forbid(unsafe_code)]

//! Pure gesture classification.
//!
//! The drag behaviors in `fanhand-web` delegate every decision that depends
//! only on geometry to these functions so they can be tested without a
//! pointer stream.
//!
//! # Invariants
//!
//! 1. A card release always settles; activation is reported in addition.
//! 2. Activation requires strictly more than [`CARD_ACTIVATE_DISTANCE_PX`] of
//!    upward travel. Horizontal travel never matters.
//! 3. A panel commit uses the horizontal component only.

use crate::geometry::Delta;

/// Upward travel (pixels) a card must exceed to count as "use".
pub const CARD_ACTIVATE_DISTANCE_PX: f64 = 100.0;

/// What a drag session is moving.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Panel,
    Card,
}

/// Result of releasing a dragged card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardRelease {
    /// Fire the item's use action.
    pub activate: bool,
    /// Return the card to the hand and re-run the fan layout.
    pub settle: bool,
}

impl CardRelease {
    /// Release outcome for an interrupted drag: settle, never activate.
    pub const CANCELLED: Self = Self {
        activate: false,
        settle: true,
    };
}

/// Classify a card release from its total displacement since press.
#[must_use]
pub fn classify_card_release(total: Delta) -> CardRelease {
    CardRelease {
        activate: total.dy < -CARD_ACTIVATE_DISTANCE_PX,
        settle: true,
    }
}

/// Absolute panel anchor after a horizontal drag.
#[must_use]
pub fn panel_final_left(left_at_start: f64, total: Delta) -> f64 {
    left_at_start + total.horizontal().dx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upward_flick_past_threshold_activates() {
        let release = classify_card_release(Delta::new(0.0, -101.0));
        assert!(release.activate);
        assert!(release.settle);
    }

    #[test]
    fn short_or_exact_travel_only_settles() {
        for dy in [-99.0, -100.0, 0.0, 250.0] {
            let release = classify_card_release(Delta::new(40.0, dy));
            assert!(!release.activate, "dy={dy} must not activate");
            assert!(release.settle);
        }
    }

    #[test]
    fn non_finite_delta_never_activates() {
        assert!(!classify_card_release(Delta::new(0.0, f64::NAN)).activate);
    }

    #[test]
    fn panel_commit_ignores_vertical_travel() {
        assert_eq!(panel_final_left(300.0, Delta::new(-45.5, 900.0)), 254.5);
        assert_eq!(panel_final_left(300.0, Delta::new(-45.5, -900.0)), 254.5);
    }
}
