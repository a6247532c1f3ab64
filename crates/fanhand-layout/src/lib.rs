#![forbid(unsafe_code)]

//! Layout solvers for card hands.
//!
//! # Role in fanhand
//! `fanhand-layout` turns a card count, a container width and a maximum arc
//! angle into one [`FanSlot`] per card. It is a pure function of its inputs:
//! identical requests always produce identical slots, which lets the runtime
//! re-run layout on every refresh without diffing.
//!
//! # How it fits in the system
//! `fanhand-runtime` calls [`fan_layout_excluding`] after each render so that
//! cards owned by an active drag session keep their position, and
//! `fanhand-web` converts slots into element styles.

pub mod fan;

pub use fan::{
    CARD_WIDTH, DEFAULT_OVERLAP, FanRequest, FanSlot, LIFT_PER_STEP, MAX_OVERLAP, MIN_OVERLAP,
    SIDE_PADDING, fan_layout, fan_layout_excluding, overlap_margin,
};
