#![forbid(unsafe_code)]

//! Fan layout: a row of fixed-width cards spread on an arc with overlap.
//!
//! # Algorithm
//!
//! 1. Cards are [`CARD_WIDTH`] wide; [`SIDE_PADDING`] is reserved out of the
//!    container width.
//! 2. Each card after the first overlaps its predecessor by
//!    [`DEFAULT_OVERLAP`]. When the row does not fit, the overlap grows so the
//!    row fills the available space exactly.
//! 3. The overlap margin is clamped to `[MIN_OVERLAP, MAX_OVERLAP]`.
//! 4. With a non-zero arc angle each card is rotated proportionally to its
//!    distance from the center and pushed by [`LIFT_PER_STEP`] per unit of
//!    distance, producing the arc.
//!
//! # Invariants
//!
//! - Slot `i` has `index == i` and `z_index == i + 1`.
//! - Slot 0 has a zero margin; every other margin lies in
//!   `[MIN_OVERLAP, MAX_OVERLAP]`.
//! - An arc angle of zero yields rotation 0 and lift 0 for every slot.
//! - The output is a pure function of the inputs.

use serde::{Deserialize, Serialize};

/// Nominal card width.
pub const CARD_WIDTH: f64 = 160.0;
/// Total horizontal padding reserved out of the container width.
pub const SIDE_PADDING: f64 = 40.0;
/// Overlap between neighbours when the row fits.
pub const DEFAULT_OVERLAP: f64 = -20.0;
/// Largest overlap allowed (most negative margin).
pub const MIN_OVERLAP: f64 = -140.0;
/// Largest positive gap allowed.
pub const MAX_OVERLAP: f64 = 5.0;
/// Vertical offset per unit of distance from the center card.
pub const LIFT_PER_STEP: f64 = 5.0;

/// Computed placement of one card.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanSlot {
    /// Position in the sorted hand.
    pub index: usize,
    /// Left margin relative to the previous card (negative overlaps).
    pub margin_left: f64,
    /// Rotation in degrees, negative to the left of center.
    pub rotation_deg: f64,
    /// Vertical offset in pixels.
    pub lift_px: f64,
    /// Stacking order; later cards stack on top.
    pub z_index: u32,
}

impl FanSlot {
    /// True when the slot carries no rotation and no lift.
    #[must_use]
    pub fn is_flat(&self) -> bool {
        self.rotation_deg == 0.0 && self.lift_px == 0.0
    }
}

/// Inputs of one layout pass.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FanRequest {
    pub card_count: usize,
    pub container_width: f64,
    pub max_arc_angle: f64,
}

impl FanRequest {
    #[must_use]
    pub const fn new(card_count: usize, container_width: f64, max_arc_angle: f64) -> Self {
        Self {
            card_count,
            container_width,
            max_arc_angle,
        }
    }

    /// Run [`fan_layout`] for this request.
    #[must_use]
    pub fn layout(&self) -> Vec<FanSlot> {
        fan_layout(self.card_count, self.container_width, self.max_arc_angle)
    }
}

fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

/// Overlap margin applied to every card after the first.
///
/// Always within `[MIN_OVERLAP, MAX_OVERLAP]`.
#[must_use]
pub fn overlap_margin(card_count: usize, container_width: f64) -> f64 {
    let available = finite_or_zero(container_width) - SIDE_PADDING;
    let mut margin = DEFAULT_OVERLAP;
    if card_count > 1 && card_count as f64 * CARD_WIDTH > available {
        let space_per_card = (available - CARD_WIDTH) / (card_count - 1) as f64;
        margin = space_per_card - CARD_WIDTH;
    }
    margin.clamp(MIN_OVERLAP, MAX_OVERLAP)
}

/// Lay out `card_count` cards in a container `container_width` pixels wide,
/// spreading them over at most `max_arc_angle` degrees on each side.
///
/// Non-finite widths or angles are treated as zero.
#[must_use]
pub fn fan_layout(card_count: usize, container_width: f64, max_arc_angle: f64) -> Vec<FanSlot> {
    fan_layout_excluding(card_count, container_width, max_arc_angle, |_| false)
}

/// Like [`fan_layout`], but omits slots for which `skip(index)` is true.
///
/// Skipped cards still take part in the geometry (their neighbours do not
/// shift); only their slot is withheld. The runtime uses this to leave cards
/// owned by an active drag session untouched.
#[must_use]
pub fn fan_layout_excluding(
    card_count: usize,
    container_width: f64,
    max_arc_angle: f64,
    mut skip: impl FnMut(usize) -> bool,
) -> Vec<FanSlot> {
    if card_count == 0 {
        return Vec::new();
    }

    let margin = overlap_margin(card_count, container_width);
    let max_arc_angle = finite_or_zero(max_arc_angle);
    let center = (card_count - 1) as f64 / 2.0;
    let angle_step = max_arc_angle / (card_count as f64 / 2.0).max(1.0);

    let mut slots = Vec::with_capacity(card_count);
    for index in 0..card_count {
        if skip(index) {
            continue;
        }
        let dist = index as f64 - center;
        let (rotation_deg, lift_px) = if max_arc_angle == 0.0 {
            (0.0, 0.0)
        } else {
            (dist * angle_step, dist.abs() * LIFT_PER_STEP)
        };
        slots.push(FanSlot {
            index,
            margin_left: if index == 0 { 0.0 } else { margin },
            rotation_deg,
            lift_px,
            z_index: u32::try_from(index + 1).unwrap_or(u32::MAX),
        });
    }
    slots
}
